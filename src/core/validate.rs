use thiserror::Error;

use super::types::{Program, ProgramName};

/// Input validation failures. All are detected before any calculation runs.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum CalcError {
    #[error("the initial payment should be more")]
    InsufficientDownPayment,
    #[error("choose program")]
    NoProgramSelected,
    #[error("choose only 1 program")]
    MultipleProgramsSelected,
}

/// The down payment must be positive, no larger than the cost, and at least 20% of it.
pub fn validate_down_payment(object_cost: i64, initial_payment: i64) -> bool {
    if initial_payment > object_cost {
        return false;
    }
    if object_cost == 0 && initial_payment == 0 {
        return false;
    }
    if initial_payment <= 0 {
        return false;
    }
    // i128 keeps the 20% comparison exact for any i64 cost.
    i128::from(initial_payment) * 5 >= i128::from(object_cost)
}

pub fn validate_program_selection(program: &Program) -> Result<ProgramName, CalcError> {
    let selected: Vec<ProgramName> = [
        (program.base, ProgramName::Base),
        (program.military, ProgramName::Military),
        (program.salary, ProgramName::Salary),
    ]
    .into_iter()
    .filter_map(|(flag, name)| flag.then_some(name))
    .collect();

    match selected.as_slice() {
        [] => Err(CalcError::NoProgramSelected),
        [name] => Ok(*name),
        _ => Err(CalcError::MultipleProgramsSelected),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert_eq, proptest};

    #[test]
    fn down_payment_rejects_zero_values() {
        assert!(!validate_down_payment(0, 0));
    }

    #[test]
    fn down_payment_rejects_zero_initial_payment() {
        assert!(!validate_down_payment(100_000, 0));
    }

    #[test]
    fn down_payment_accepts_exactly_twenty_percent() {
        assert!(validate_down_payment(100_000, 20_000));
    }

    #[test]
    fn down_payment_rejects_just_below_twenty_percent() {
        assert!(!validate_down_payment(100_000, 19_999));
        assert!(!validate_down_payment(100_000, 19_000));
    }

    #[test]
    fn down_payment_rejects_payment_above_cost() {
        assert!(!validate_down_payment(100_000, 150_000));
    }

    #[test]
    fn down_payment_accepts_full_cost() {
        assert!(validate_down_payment(100_000, 100_000));
    }

    #[test]
    fn program_selection_requires_a_flag() {
        let err = validate_program_selection(&Program::default())
            .expect_err("empty selection must fail");
        assert_eq!(err, CalcError::NoProgramSelected);
    }

    #[test]
    fn program_selection_rejects_two_flags() {
        let program = Program {
            base: true,
            military: true,
            salary: false,
        };
        let err = validate_program_selection(&program).expect_err("two flags must fail");
        assert_eq!(err, CalcError::MultipleProgramsSelected);
    }

    #[test]
    fn program_selection_rejects_all_flags() {
        let program = Program {
            base: true,
            military: true,
            salary: true,
        };
        let err = validate_program_selection(&program).expect_err("three flags must fail");
        assert_eq!(err, CalcError::MultipleProgramsSelected);
    }

    #[test]
    fn program_selection_returns_the_single_flag() {
        for name in [ProgramName::Base, ProgramName::Military, ProgramName::Salary] {
            let selected =
                validate_program_selection(&Program::only(name)).expect("single flag is valid");
            assert_eq!(selected, name);
            assert_eq!(selected.as_str(), name.as_str());
        }
    }

    proptest! {
        #[test]
        fn prop_down_payment_matches_twenty_percent_rule(
            object_cost in 1i64..10_000_000,
            initial_payment in 1i64..12_000_000
        ) {
            let expected = initial_payment <= object_cost && initial_payment * 5 >= object_cost;
            prop_assert_eq!(validate_down_payment(object_cost, initial_payment), expected);
        }
    }
}
