//! Evaluator for triop expressions.
//!
//! This crate implements operator dispatch over the fixed table in
//! `triop-expr`, with a typed error per failure class and batch evaluation
//! that reports one outcome per input expression.

mod eval;
mod outcome;

pub use eval::{EvalError, Operand, evaluate};
pub use outcome::{Outcome, evaluate_all};
