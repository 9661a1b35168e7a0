//! Canonical value model and content-addressing (QGID) for `qmb`.
//!
//! This crate is the foundation of the workspace: every other crate builds
//! on [`Value`]'s canonical byte encoding and the [`Qgid`] content address it
//! produces. See `SPEC_FULL.md` §3 and §4.1.

mod decode;
mod encode;
mod error;
mod qgid;
mod value;

pub use decode::decode;
pub use encode::{encode, qgid};
pub use error::{ValueError, ValueResult};
pub use qgid::Qgid;
pub use value::Value;
