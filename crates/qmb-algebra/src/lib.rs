//! Exact Gaussian-rational arithmetic and matrix algebra for `qmb`.
//!
//! Builds on [`qmb_value`]'s canonical [`qmb_value::Value`] to provide the
//! field Q(i) and dense matrices over it, plus the matrix-as-value codec
//! that circuit `data` fields use (`SPEC_FULL.md` §4.2–§4.3).

mod codec;
mod error;
mod gaussian;
mod matrix;

pub use codec::{matrix_from_value, matrix_to_value, qi_from_value, qi_to_value};
pub use error::{AlgebraError, AlgebraResult};
pub use gaussian::GaussianRational;
pub use matrix::Matrix;
