use thiserror::Error;

/// Errors that can occur when assembling a [`LinearSystem`](super::LinearSystem).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("system has no unknowns")]
    Empty,

    #[error("coefficient matrix is not square: {rows} rows, {cols} columns")]
    NotSquare { rows: usize, cols: usize },

    #[error("constant vector length mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
}
