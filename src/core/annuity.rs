/// Monthly annuity payment and total overpayment, both rounded up.
///
/// Preconditions: `annual_rate_percent > 0` and `months >= 1`. Neither is
/// checked here; with a zero rate or term the division degenerates.
pub fn compute_annuity(principal: f64, annual_rate_percent: f64, months: u32) -> (i64, i64) {
    let monthly_rate = annual_rate_percent / (100.0 * 12.0);
    let factor = (1.0 + monthly_rate).powf(f64::from(months));

    let monthly_payment = (principal * (monthly_rate * factor) / (factor - 1.0)).ceil() as i64;
    let overpayment = (monthly_payment as f64 * f64::from(months) - principal).ceil() as i64;

    (monthly_payment, overpayment)
}
