use crate::sat_solver::{check_valuation, Solver};
use crate::{SATSolution, Valuation, CNF};

/// Exhaustive search over all `2^n` valuations, starting from all false.
/// Only usable on small formulae, serves as a reference for the other solvers.
#[derive(Clone, Copy, Default)]
pub struct Bruteforce;

impl Solver for Bruteforce {
    fn solve(&self, formula: &CNF) -> SATSolution {
        let mut valuation = vec![false; formula.num_variables];
        loop {
            if check_valuation(formula, &valuation) {
                return SATSolution::Satisfiable(valuation);
            }
            if !advance(&mut valuation) {
                return SATSolution::Unsatisfiable;
            }
        }
    }
}

/// Counts the valuation up in binary, the last variable being the lowest bit.
/// Returns false once every valuation has been visited.
fn advance(valuation: &mut Valuation) -> bool {
    match valuation.iter().rposition(|&value| !value) {
        Some(index) => {
            valuation[index] = true;
            valuation[index + 1..].iter_mut().for_each(|value| *value = false);
            true
        }
        None => false,
    }
}
