use thiserror::Error;

/// Errors raised while reading a formula or writing a solution.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed problem or clause line, `line` is 1-based.
    #[error("parse error at line {line}: {reason}")]
    Parse {
        line: usize,
        reason: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn parse(line: usize, reason: impl Into<String>) -> Error {
        Error::Parse { line, reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// The current partial assignment cannot be extended to a satisfying one.
///
/// Never reaches a user: the search either tries the other polarity of a
/// branch or hands it to its caller, and the top level turns it into
/// [`SATSolution::Unsatisfiable`](crate::SATSolution::Unsatisfiable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("contradiction")]
pub struct Contradiction;
