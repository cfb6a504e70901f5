use numsolve_solvers::linear;
use thiserror::Error;

/// Errors raised while parsing a `.lin` or `.pol` file.
///
/// Line numbers are 1-based.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("line {line}: expected {expected}, found end of input")]
    MissingLine { line: usize, expected: &'static str },

    #[error("line {line}: `{token}` is not a valid count")]
    InvalidCount { line: usize, token: String },

    #[error("line {line}: `{token}` is not a valid number")]
    InvalidNumber { line: usize, token: String },

    #[error("line {line}: expected {expected} values, found {got}")]
    WrongCount {
        line: usize,
        expected: usize,
        got: usize,
    },

    #[error("invalid linear system: {0}")]
    InvalidSystem(#[from] linear::Error),
}
