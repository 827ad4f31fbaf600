/// The CNF representation of a formula and its text format
pub mod cnf;
/// Errors raised while reading formulae and the internal contradiction signal
pub mod error;
/// Clauses and formulae with live occurrence counters
pub mod formula;
/// Unit propagation, assignment propagation and pure literal elimination
mod propagation;
/// The Solver trait which has to be implemented by each solver
pub mod sat_solver;
/// Module that contains the custom DPLL solver
mod dpll;
/// Module that specifies the output of a solver
mod sat_solution;
pub mod bruteforce;
/// Branching heuristics one can choose from to customize the [`SatisfactionSolver`].
mod branching_strategy;
mod util;

pub use cnf::{CNFClause, CNFVar, VarId, CNF};
pub use error::{Contradiction, Error, Result};
pub use formula::{Assignment, Clause, Formula, Occurrences};
pub use sat_solver::{check_valuation, Solver};
pub use bruteforce::Bruteforce;
pub use branching_strategy::{BranchingStrategy, NaiveBranching, DLIS, DLCS, JeroslawWang, MOM};
pub use dpll::SatisfactionSolver;
pub use sat_solution::{SATSolution, Valuation, UNSAT_TOKEN};
