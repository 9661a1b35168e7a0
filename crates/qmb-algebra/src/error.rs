//! Error types for Gaussian-rational arithmetic and matrix algebra.

use thiserror::Error;

/// Errors that can occur in the algebra layer.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AlgebraError {
    /// Attempted to invert or divide by a zero Gaussian rational.
    #[error("division by zero Gaussian rational")]
    DivisionByZero,

    /// Two matrices (or a matrix and an operand) had incompatible shapes.
    #[error("shape mismatch: {context} (lhs {lhs_rows}x{lhs_cols}, rhs {rhs_rows}x{rhs_cols})")]
    ShapeMismatch {
        /// What operation was being attempted.
        context: &'static str,
        lhs_rows: usize,
        lhs_cols: usize,
        rhs_rows: usize,
        rhs_cols: usize,
    },

    /// An operation that requires a square matrix (e.g. `trace`) was given
    /// a non-square one.
    #[error("expected a square matrix, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// A `Value` did not have the shape the matrix-as-value codec expects.
    #[error("malformed matrix value: {0}")]
    MalformedValue(String),

    /// The value layer itself failed (encode/decode/QGID).
    #[error(transparent)]
    Value(#[from] qmb_value::ValueError),
}

/// Result type for algebra operations.
pub type AlgebraResult<T> = Result<T, AlgebraError>;
