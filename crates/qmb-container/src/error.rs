//! Error types for the binary container format and `Runner`.

use thiserror::Error;

/// Errors that can occur while decoding a `.qmb` container or loading it
/// into a `Runner` (`spec.md` §6-§7).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContainerError {
    /// The first four bytes were not `"QMB\x01"`.
    #[error("invalid magic bytes (expected \"QMB\\x01\")")]
    InvalidMagic,

    /// The buffer was shorter than the fixed-size portion of the header
    /// requires.
    #[error("truncated header: need at least {needed} byte(s), found {found}")]
    TruncatedHeader { needed: usize, found: usize },

    /// A length-declared field (name, version, or store payload) ran past
    /// the end of the buffer.
    #[error("truncated field {field}: declared {declared} byte(s) but only {available} remain")]
    TruncatedField {
        field: &'static str,
        declared: usize,
        available: usize,
    },

    /// A name/version field's bytes were not valid UTF-8.
    #[error("field {field} is not valid UTF-8: {source}")]
    InvalidUtf8 {
        field: &'static str,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// After ingesting the store payload, the declared entrypoint QGID was
    /// not present in the store.
    #[error("entrypoint QGID not resolvable after loading the store payload")]
    EntrypointUnresolved,

    /// The value layer failed while decoding store-payload entries.
    #[error(transparent)]
    Value(#[from] qmb_value::ValueError),

    /// The IR layer failed while reconstructing a circuit from a decoded
    /// value.
    #[error(transparent)]
    Ir(#[from] qmb_ir::IrError),

    /// Execution of the entrypoint circuit failed.
    #[error(transparent)]
    Exec(#[from] qmb_exec::ExecError),
}

/// Result type for container operations.
pub type ContainerResult<T> = Result<T, ContainerError>;
