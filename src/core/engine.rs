use chrono::{Local, Months, NaiveDate};

use super::annuity::compute_annuity;
use super::rates::resolve_rate;
use super::types::{Aggregates, LoanParams, LoanRequest, LoanResult, Program};
use super::validate::{CalcError, validate_down_payment, validate_program_selection};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Source of the current calendar date.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

#[derive(Copy, Clone, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

#[derive(Copy, Clone, Debug)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Validates the request and computes its aggregates. Nothing is stored.
pub fn compute(request: &LoanRequest, today: NaiveDate) -> Result<LoanResult, CalcError> {
    let params = request.params;
    if !validate_down_payment(params.object_cost, params.initial_payment) {
        return Err(CalcError::InsufficientDownPayment);
    }
    let name = validate_program_selection(&request.program)?;

    let (rate, program) = resolve_rate(name.as_str());
    let loan_sum = params.object_cost - params.initial_payment;
    let (monthly_payment, overpayment) =
        compute_annuity(loan_sum as f64, f64::from(rate), params.months);

    Ok(assemble_result(
        params,
        program,
        rate,
        monthly_payment,
        overpayment,
        today,
    ))
}

pub fn assemble_result(
    params: LoanParams,
    program: Program,
    rate: u8,
    monthly_payment: i64,
    overpayment: i64,
    today: NaiveDate,
) -> LoanResult {
    LoanResult {
        params,
        program,
        aggregates: Aggregates {
            rate,
            loan_sum: params.object_cost - params.initial_payment,
            monthly_payment,
            overpayment,
            last_payment_date: last_payment_date(today, params.months),
        },
    }
}

/// `today` plus `months` calendar months. Days past the end of the target
/// month clamp to its last day; dates beyond chrono's range saturate.
pub fn last_payment_date(today: NaiveDate, months: u32) -> String {
    today
        .checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
        .format(DATE_FORMAT)
        .to_string()
}
