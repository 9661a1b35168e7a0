//! Error types for the object model, circuit records, and store.

use thiserror::Error;

/// Errors that can occur while building or decoding [`crate::Circuit`]s and
/// [`crate::Object`]s.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// A primitive ordinal did not match any entry in the fixed table
    /// (`spec.md` §6). A mismatch here silently breaks every QGID that
    /// references a circuit using that primitive, so this is checked
    /// exhaustively.
    #[error("invalid primitive ordinal {0}, expected 0..=23")]
    InvalidPrimitiveOrdinal(u8),

    /// A `Value` did not have the shape the object/circuit codec expects.
    #[error("malformed {kind} value: {detail}")]
    MalformedValue {
        /// Which shape was being decoded ("object" or "circuit").
        kind: &'static str,
        detail: String,
    },

    /// A block size in an [`crate::Object`] was zero; block sizes must be
    /// positive (`spec.md` §3).
    #[error("object block size must be positive, got 0")]
    ZeroBlockSize,

    /// The value layer itself failed (encode/decode/QGID).
    #[error(transparent)]
    Value(#[from] qmb_value::ValueError),
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
