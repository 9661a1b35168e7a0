//! Error types for circuit execution.

use qmb_value::Qgid;
use thiserror::Error;

/// Errors that can occur while executing a circuit (`spec.md` §7).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExecError {
    /// A child QGID referenced by a circuit was not resolvable in the
    /// store.
    #[error("missing reference: child {index} ({qgid}) not found in store")]
    MissingReference { index: usize, qgid: Qgid },

    /// A primitive received the wrong number of children (e.g. `Compose`
    /// without exactly two).
    #[error("{prim} requires {expected} child(ren), got {got}")]
    BadChildren {
        prim: &'static str,
        expected: usize,
        got: usize,
    },

    /// A primitive's `data` field had the wrong kind (e.g. `Scale` without
    /// a `Rational`).
    #[error("{prim}: bad data field ({detail})")]
    BadData { prim: &'static str, detail: String },

    /// A primitive tag with a fixed ordinal but no execution semantics in
    /// the baseline runtime (`spec.md` §4.5, §9 reserved primitives).
    #[error("unsupported primitive: {0}")]
    UnsupportedPrimitive(&'static str),

    /// Recursion depth exceeded the configured limit (`spec.md` §9: a
    /// defensive guard against adversarial deep chains, not a functional
    /// resource bound).
    #[error("recursion depth limit ({limit}) exceeded")]
    DepthExceeded { limit: usize },

    /// A matrix or Gaussian-rational operation failed (shape mismatch,
    /// division by zero, not square, or a malformed matrix-as-value shape
    /// in `data`).
    #[error(transparent)]
    Algebra(#[from] qmb_algebra::AlgebraError),

    /// An IR-level decode failed (e.g. an invalid primitive ordinal
    /// surfacing from a stored circuit).
    #[error(transparent)]
    Ir(#[from] qmb_ir::IrError),
}

/// Result type for circuit execution.
pub type ExecResult<T> = Result<T, ExecError>;
