//! The `.qmb` binary container layout: magic, entrypoint QGID, name,
//! version, and embedded store-payload bytes (`spec.md` §6).

use qmb_value::Qgid;

use crate::error::{ContainerError, ContainerResult};

/// Magic bytes every `.qmb` container must begin with: `"QMB\x01"`.
pub const MAGIC: [u8; 4] = [0x51, 0x4D, 0x42, 0x01];

/// A decoded `.qmb` container: header fields plus the raw store payload.
/// `encode`/`decode` are pure functions over bytes; no file I/O lives here
/// (that is the CLI's concern — `spec.md` §1).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Container {
    pub entrypoint: Qgid,
    pub name: String,
    pub version: String,
    pub store_payload: Vec<u8>,
}

impl Container {
    pub fn new(
        entrypoint: Qgid,
        name: impl Into<String>,
        version: impl Into<String>,
        store_payload: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            entrypoint,
            name: name.into(),
            version: version.into(),
            store_payload: store_payload.into(),
        }
    }
}

/// Serialize a container to its on-wire byte layout (`spec.md` §6 table).
pub fn encode(container: &Container) -> Vec<u8> {
    let mut buf = Vec::with_capacity(
        44 + container.name.len() + container.version.len() + container.store_payload.len(),
    );
    buf.extend_from_slice(&MAGIC);
    buf.extend_from_slice(container.entrypoint.as_bytes());
    let name_bytes = container.name.as_bytes();
    buf.extend_from_slice(&(name_bytes.len() as u32).to_be_bytes());
    buf.extend_from_slice(name_bytes);
    let version_bytes = container.version.as_bytes();
    buf.extend_from_slice(&(version_bytes.len() as u32).to_be_bytes());
    buf.extend_from_slice(version_bytes);
    buf.extend_from_slice(&container.store_payload);
    buf
}

/// Parse the on-wire byte layout back into a [`Container`].
pub fn decode(bytes: &[u8]) -> ContainerResult<Container> {
    if bytes.len() < 4 {
        return Err(ContainerError::TruncatedHeader {
            needed: 4,
            found: bytes.len(),
        });
    }
    if bytes[0..4] != MAGIC {
        return Err(ContainerError::InvalidMagic);
    }
    if bytes.len() < 36 {
        return Err(ContainerError::TruncatedHeader {
            needed: 36,
            found: bytes.len(),
        });
    }
    let entrypoint = Qgid::from_slice(&bytes[4..36])?;

    if bytes.len() < 40 {
        return Err(ContainerError::TruncatedHeader {
            needed: 40,
            found: bytes.len(),
        });
    }
    let name_len = u32::from_be_bytes(bytes[36..40].try_into().unwrap()) as usize;
    let name_start = 40;
    let name_end = name_start + name_len;
    if name_end > bytes.len() {
        return Err(ContainerError::TruncatedField {
            field: "name",
            declared: name_len,
            available: bytes.len() - name_start.min(bytes.len()),
        });
    }
    let name = String::from_utf8(bytes[name_start..name_end].to_vec())
        .map_err(|source| ContainerError::InvalidUtf8 { field: "name", source })?;

    if bytes.len() < name_end + 4 {
        return Err(ContainerError::TruncatedHeader {
            needed: name_end + 4,
            found: bytes.len(),
        });
    }
    let version_len =
        u32::from_be_bytes(bytes[name_end..name_end + 4].try_into().unwrap()) as usize;
    let version_start = name_end + 4;
    let version_end = version_start + version_len;
    if version_end > bytes.len() {
        return Err(ContainerError::TruncatedField {
            field: "version",
            declared: version_len,
            available: bytes.len() - version_start.min(bytes.len()),
        });
    }
    let version = String::from_utf8(bytes[version_start..version_end].to_vec())
        .map_err(|source| ContainerError::InvalidUtf8 { field: "version", source })?;

    let store_payload = bytes[version_end..].to_vec();

    Ok(Container {
        entrypoint,
        name,
        version,
        store_payload,
    })
}
