use super::types::{Program, ProgramName};

const BASE_RATE: u8 = 10;
const MILITARY_RATE: u8 = 9;
const SALARY_RATE: u8 = 8;

pub fn rate_for(name: ProgramName) -> u8 {
    match name {
        ProgramName::Base => BASE_RATE,
        ProgramName::Military => MILITARY_RATE,
        ProgramName::Salary => SALARY_RATE,
    }
}

/// Resolves a program name to its annual rate and normalized flags.
///
/// Unknown names yield a zero rate and no flags rather than an error.
pub fn resolve_rate(name: &str) -> (u8, Program) {
    let program = match name {
        "base" => ProgramName::Base,
        "military" => ProgramName::Military,
        "salary" => ProgramName::Salary,
        _ => return (0, Program::default()),
    };
    (rate_for(program), Program::only(program))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_program_rate() {
        assert_eq!(
            resolve_rate("base"),
            (
                10,
                Program {
                    base: true,
                    ..Program::default()
                }
            )
        );
    }

    #[test]
    fn military_program_rate() {
        assert_eq!(
            resolve_rate("military"),
            (
                9,
                Program {
                    military: true,
                    ..Program::default()
                }
            )
        );
    }

    #[test]
    fn salary_program_rate() {
        assert_eq!(
            resolve_rate("salary"),
            (
                8,
                Program {
                    salary: true,
                    ..Program::default()
                }
            )
        );
    }

    #[test]
    fn unknown_program_resolves_to_zero() {
        assert_eq!(resolve_rate("unknown"), (0, Program::default()));
    }

    #[test]
    fn resolve_by_name_agrees_with_typed_lookup() {
        for name in [ProgramName::Base, ProgramName::Military, ProgramName::Salary] {
            assert_eq!(resolve_rate(name.as_str()).0, rate_for(name));
        }
    }
}
