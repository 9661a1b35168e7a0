//! Block-algebra object model, circuit records, and the content-addressed
//! store for `qmb` (`SPEC_FULL.md` §4.4).

mod circuit;
mod error;
mod object;
mod primitive;
mod store;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use object::Object;
pub use primitive::PrimitiveTag;
pub use store::Store;
