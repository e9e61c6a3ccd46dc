use thiserror::Error;

/// Error types for the eigensolvers.
#[derive(Debug, Error, PartialEq)]
pub enum EigenError {
    /// The convergence tolerance is negative or NaN.
    #[error("Convergence tolerance must be a non-negative number, got {0}")]
    InvalidTolerance(f64),
}
