//! CLI command implementations.

pub mod batch;
pub mod eval;
pub mod repl;
