use crate::{CNF, SATSolution, Valuation};
use auto_impl::auto_impl;
use rayon::prelude::*;

#[auto_impl(&, Box)]
pub trait Solver {
    fn solve(&self, formula: &CNF) -> SATSolution;
}

/// Checks that every clause of `formula` has a literal made true by `val`.
/// Variables beyond the valuation count as false, identifier 0 satisfies nothing.
pub fn check_valuation(formula: &CNF, val: &Valuation) -> bool {
    formula.clauses.par_iter()
        .all(|clause| clause.vars.iter()
            .any(|var| {
                let value = var.id().checked_sub(1)
                    .and_then(|index| val.get(index))
                    .copied()
                    .unwrap_or(false);
                var.id() != 0 && var.sign() == value
            }))
}
