//! Error types for the value model and canonical encoding.

use thiserror::Error;

/// Errors that can occur while encoding or decoding a [`crate::Value`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ValueError {
    /// An integer or rational magnitude did not fit in the single-byte
    /// length prefix the canonical encoding reserves for it (255 bytes,
    /// i.e. up to a 2040-bit magnitude).
    #[error("integer or rational magnitude exceeds the 255-byte length-prefix field")]
    MagnitudeTooLarge,

    /// The buffer ended before a length-declared field could be read in full.
    #[error("truncated value encoding: expected {expected} more byte(s), found {found}")]
    Truncated {
        /// Number of bytes the field declared it needed.
        expected: usize,
        /// Number of bytes actually remaining in the buffer.
        found: usize,
    },

    /// The leading discriminator byte did not match any known variant.
    #[error("invalid discriminator byte 0x{0:02x}")]
    InvalidDiscriminator(u8),

    /// A `Text` payload's bytes were not valid UTF-8.
    #[error("text payload is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// A varint's continuation chain exceeded 64 bits.
    #[error("varint exceeds 64 bits")]
    VarintOverflow,

    /// A QGID was constructed from a byte slice of the wrong length.
    #[error("QGID must be exactly 32 bytes, got {0}")]
    BadQgidLength(usize),

    /// Catch-all for structurally invalid values that should be unreachable
    /// for any value built through this crate's constructors.
    #[error("malformed value: {0}")]
    Malformed(String),
}

/// Result type for value-model operations.
pub type ValueResult<T> = Result<T, ValueError>;
