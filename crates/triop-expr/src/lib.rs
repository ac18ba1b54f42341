//! Expression form and operator table for triop.
//!
//! This crate provides the input side of evaluation:
//! - `Expression`: an ordered sequence of string tokens
//! - `Op`: the fixed set of binary integer operators and their table

mod expr;
mod op;

pub use expr::{EXPR_ARITY, Expression};
pub use op::{OP_TABLE, Op};
