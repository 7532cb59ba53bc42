mod annuity;
mod engine;
mod rates;
mod types;
mod validate;

pub use annuity::compute_annuity;
pub use engine::{Clock, FixedClock, SystemClock, assemble_result, compute, last_payment_date};
pub use rates::{rate_for, resolve_rate};
pub use types::{
    Aggregates, CacheEntry, LoanParams, LoanRequest, LoanResult, Program, ProgramName,
};
pub use validate::{CalcError, validate_down_payment, validate_program_selection};
