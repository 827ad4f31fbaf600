use itertools::Itertools;

use crate::formula::Assignment;

/// Values of variables `1..=n`, stored at index `id - 1`
pub type Valuation = Vec<bool>;

/// Single line encoding of an unsatisfiable formula
pub const UNSAT_TOKEN: &str = "UNSAT";

const MAX_LITERALS_PER_LINE: usize = 8;

#[derive(Clone, PartialEq, Eq)]
pub enum SATSolution {
    Satisfiable(Valuation),
    Unsatisfiable,
}

impl std::iter::FromIterator<bool> for SATSolution {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        SATSolution::Satisfiable(iter.into_iter().collect())
    }
}

impl SATSolution {
    /// Variables of `1..=num_variables` missing from the assignment were
    /// left unconstrained and are set to `false`.
    pub fn from_assignment(assignment: &Assignment, num_variables: usize) -> SATSolution {
        (1..=num_variables)
            .map(|id| assignment.get(&id).copied().unwrap_or(false))
            .collect()
    }

    pub fn is_sat(&self) -> bool {
        matches!(self, SATSolution::Satisfiable(_))
    }

    pub fn is_unsat(&self) -> bool {
        matches!(self, SATSolution::Unsatisfiable)
    }

    pub fn valuation(&self) -> Option<&Valuation> {
        match self {
            SATSolution::Satisfiable(valuation) => Some(valuation),
            SATSolution::Unsatisfiable => None,
        }
    }

    /// `1 -2 3` for a model, [`UNSAT_TOKEN`] otherwise. No line terminator.
    pub fn to_line(&self) -> String {
        match self {
            SATSolution::Unsatisfiable => UNSAT_TOKEN.to_string(),
            SATSolution::Satisfiable(variables) => literals(variables).join(" "),
        }
    }

    /// SAT competition output, `v` lines end with a lone `0`
    pub fn to_dimacs(&self) -> String {
        match self {
            SATSolution::Unsatisfiable => "s UNSATISFIABLE\n".to_string(),
            SATSolution::Satisfiable(variables) => {
                let mut out = String::from("s SATISFIABLE\n");
                for chunk in &literals(variables).chunks(MAX_LITERALS_PER_LINE) {
                    out.push_str(&format!("v {}\n", chunk.format(" ")));
                }
                out.push_str("v 0\n");
                out
            }
        }
    }
}

fn literals(variables: &[bool]) -> impl Iterator<Item = i64> + '_ {
    variables.iter()
        .enumerate()
        .map(|(id, &sign)| if sign { (id + 1) as i64 } else { -((id + 1) as i64) })
}

impl std::fmt::Debug for SATSolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_line())
    }
}

impl std::fmt::Display for SATSolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SATSolution::Unsatisfiable => write!(f, "Unsatisfiable"),
            SATSolution::Satisfiable(variables) => {
                writeln!(f, "Satisfiable:")?;
                for chunk in &variables.iter().enumerate().chunks(MAX_LITERALS_PER_LINE) {
                    for (id, sign) in chunk {
                        write!(f, "{}{} ",
                            if *sign { " " }
                            else { "-" },
                            id+1)?;
                    }
                    writeln!(f)?;
                }
                Ok(())
            }
        }
    }
}
