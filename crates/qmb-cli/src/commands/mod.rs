//! Subcommand implementations.

pub mod info;
pub mod inspect;
pub mod matrix_io;
pub mod run;
