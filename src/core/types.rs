use serde::{Deserialize, Serialize};

fn is_false(value: &bool) -> bool {
    !*value
}

/// Loan programs with a fixed interest rate.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ProgramName {
    Base,
    Military,
    Salary,
}

impl ProgramName {
    pub fn as_str(self) -> &'static str {
        match self {
            ProgramName::Base => "base",
            ProgramName::Military => "military",
            ProgramName::Salary => "salary",
        }
    }
}

/// Program selection flags. After validation exactly one flag is set.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Program {
    #[serde(skip_serializing_if = "is_false")]
    pub salary: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub military: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub base: bool,
}

impl Program {
    pub fn only(name: ProgramName) -> Self {
        let mut program = Program::default();
        match name {
            ProgramName::Base => program.base = true,
            ProgramName::Military => program.military = true,
            ProgramName::Salary => program.salary = true,
        }
        program
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct LoanParams {
    pub object_cost: i64,
    pub initial_payment: i64,
    pub months: u32,
}

/// Raw caller input, not yet validated.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct LoanRequest {
    pub params: LoanParams,
    pub program: Program,
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct Aggregates {
    pub rate: u8,
    pub loan_sum: i64,
    pub monthly_payment: i64,
    pub overpayment: i64,
    pub last_payment_date: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct LoanResult {
    pub params: LoanParams,
    pub program: Program,
    pub aggregates: Aggregates,
}

/// A stored result. Field order matches the wire layout: id first.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct CacheEntry {
    pub id: u32,
    pub params: LoanParams,
    pub program: Program,
    pub aggregates: Aggregates,
}

impl CacheEntry {
    pub fn new(id: u32, result: LoanResult) -> Self {
        Self {
            id,
            params: result.params,
            program: result.program,
            aggregates: result.aggregates,
        }
    }
}
