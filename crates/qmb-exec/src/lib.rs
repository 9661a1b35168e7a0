//! Recursive CP-map circuit interpreter for `qmb` (`SPEC_FULL.md` §4.5).
//!
//! `Executor` is a pure function of an immutable [`qmb_ir::Store`] plus an
//! input matrix: no suspension, no event loop, fully re-entrant
//! (`spec.md` §5).

mod error;
mod executor;

pub use error::{ExecError, ExecResult};
pub use executor::{Executor, MAX_RECURSION_DEPTH};
