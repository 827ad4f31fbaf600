use satsolver::{SATSolution, Solver};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `1 -2 3` or `UNSAT` on a single line
    Line,
    /// SAT competition `s`/`v` lines
    Dimacs,
}

impl OutputFormat {
    pub fn encode(self, solution: &SATSolution) -> String {
        match self {
            OutputFormat::Line => solution.to_line(),
            OutputFormat::Dimacs => solution.to_dimacs(),
        }
    }
}

pub struct Config {
    pub input:       PathBuf,
    pub output:      PathBuf,
    pub format:      OutputFormat,
    pub return_code: bool,
    pub verbosity:   u64,
    pub solver:      Box<dyn Solver>,
}
