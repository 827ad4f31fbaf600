use std::iter;
use tracing::{debug, trace};

use crate::branching_strategy::{BranchingStrategy, DLCS};
use crate::cnf::{CNFVar, CNF};
use crate::error::Contradiction;
use crate::formula::{Assignment, Formula};
use crate::{SATSolution, Solver};

/// Recursive DPLL solver. Every branch works on its own copy of the formula.
#[derive(Clone, Default)]
pub struct SatisfactionSolver<B: BranchingStrategy> {
    strategy: B,
}

impl<B: BranchingStrategy> Solver for SatisfactionSolver<B> {
    fn solve(&self, formula: &CNF) -> SATSolution {
        let formula = Formula::new(formula);
        let num_variables = formula.num_variables();
        debug!(clauses = formula.len(), variables = num_variables, "solving");

        match self.satisfy(formula) {
            Ok(assignment) => {
                debug!("satisfiable");
                SATSolution::from_assignment(&assignment, num_variables)
            }
            Err(Contradiction) => {
                debug!("unsatisfiable");
                SATSolution::Unsatisfiable
            }
        }
    }
}

impl SatisfactionSolver<DLCS> {
    pub fn dlcs() -> Self {
        SatisfactionSolver::new(DLCS)
    }
}

impl<B: BranchingStrategy> SatisfactionSolver<B> {
    pub fn new(strategy: B) -> Self {
        SatisfactionSolver { strategy }
    }

    /// Eliminates pure literals once and runs the search on what is left.
    /// The search result overrides the pure literal assignments.
    pub fn satisfy(&self, mut formula: Formula) -> Result<Assignment, Contradiction> {
        let pure = formula.pure_literals();
        trace!(count = pure.len(), "pure literals");
        let mut assignment = formula.propagate(pure)?;

        let mut strategy = self.strategy.clone();
        let searched = dpll(&mut formula, &mut strategy)?;
        assignment.extend(searched);
        Ok(assignment)
    }
}

fn dpll<B: BranchingStrategy>(formula: &mut Formula, strategy: &mut B) -> Result<Assignment, Contradiction> {
    let mut assignment = formula.unit_propagate()?;
    if formula.is_satisfied() {
        return Ok(assignment);
    }

    // clauses are left but none of them has a variable: they are empty
    let literal = strategy.pick_branching_variable(formula).ok_or(Contradiction)?;

    let decided = match branch(formula, literal, strategy) {
        Ok(decided) => decided,
        Err(Contradiction) => {
            trace!(variable = literal.id, value = !literal.sign, "backtracking");
            branch(formula, -literal, strategy)?
        }
    };

    assignment.extend(decided);
    Ok(assignment)
}

/// Solves a copy of `formula` with `literal` made true
fn branch<B: BranchingStrategy>(formula: &Formula, literal: CNFVar, strategy: &mut B) -> Result<Assignment, Contradiction> {
    trace!(variable = literal.id, value = literal.sign, "branching");

    let mut formula = formula.clone();
    let mut assignment = formula.propagate(iter::once((literal.id, literal.sign)))?;
    if !formula.is_satisfied() {
        assignment.extend(dpll(&mut formula, strategy)?);
    }
    Ok(assignment)
}
