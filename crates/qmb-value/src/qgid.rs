//! The content address: a 32-byte SHA-256 digest of a value's canonical encoding.

use std::fmt;

use crate::error::ValueError;

/// Quantum-Graph Identifier: the content address of a [`crate::Value`].
///
/// Two values are equal iff their QGIDs agree (`qgid(a) == qgid(b)`); see
/// [`crate::qgid`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Qgid([u8; 32]);

impl Qgid {
    /// Wrap a 32-byte digest.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Qgid(bytes)
    }

    /// Parse a QGID from an arbitrary-length byte slice.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ValueError> {
        let arr: [u8; 32] = bytes
            .try_into()
            .map_err(|_| ValueError::BadQgidLength(bytes.len()))?;
        Ok(Qgid(arr))
    }

    /// Borrow the raw 32 bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for Qgid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Qgid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Qgid({self})")
    }
}
