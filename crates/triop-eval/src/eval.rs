//! Expression evaluation.

use std::fmt;
use std::num::ParseIntError;

use thiserror::Error;
use triop_expr::{EXPR_ARITY, Expression, Op};

/// Which operand of an expression an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Left,
    Right,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Left => f.write_str("left"),
            Operand::Right => f.write_str("right"),
        }
    }
}

/// Evaluation errors. Exactly one is reported per failed expression.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("malformed expression: expected 3 tokens, got {0}")]
    MalformedExpression(usize),

    #[error("invalid {operand} operand `{token}`: {source}")]
    InvalidOperand {
        operand: Operand,
        token: String,
        source: ParseIntError,
    },

    #[error("unknown operator: {0}")]
    UnknownOperator(String),

    #[error("division by zero")]
    DivisionByZero,

    #[error("integer overflow")]
    Overflow,
}

/// Evaluate a single expression.
///
/// Checks run in a fixed order: token count, left operand, operator, right
/// operand, then the zero-divisor guard. The first check that fails decides
/// the reported error.
pub fn evaluate(expr: &Expression) -> Result<i64, EvalError> {
    let tokens = expr.tokens();
    if tokens.len() != EXPR_ARITY {
        return Err(EvalError::MalformedExpression(tokens.len()));
    }

    let lhs = parse_operand(&tokens[0], Operand::Left)?;
    let op =
        Op::lookup(&tokens[1]).ok_or_else(|| EvalError::UnknownOperator(tokens[1].clone()))?;
    let rhs = parse_operand(&tokens[2], Operand::Right)?;

    // The zero-divisor guard comes before the operation runs.
    if op == Op::Div && rhs == 0 {
        return Err(EvalError::DivisionByZero);
    }

    op.apply(lhs, rhs).ok_or(EvalError::Overflow)
}

fn parse_operand(token: &str, operand: Operand) -> Result<i64, EvalError> {
    token.parse().map_err(|source| EvalError::InvalidOperand {
        operand,
        token: token.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval_tokens(tokens: &[&str]) -> Result<i64, EvalError> {
        evaluate(&Expression::new(tokens.iter().copied()))
    }

    #[test]
    fn test_check_order_pins_first_failure() {
        assert_eq!(eval_tokens(&["two"]), Err(EvalError::MalformedExpression(1)));
        assert!(matches!(
            eval_tokens(&["two", "%", "3"]),
            Err(EvalError::InvalidOperand {
                operand: Operand::Left,
                ..
            })
        ));
        assert!(matches!(
            eval_tokens(&["2", "%", "three"]),
            Err(EvalError::UnknownOperator(_))
        ));
    }

    #[test]
    fn test_division_by_zero_is_reported_not_trapped() {
        assert_eq!(eval_tokens(&["2", "/", "0"]), Err(EvalError::DivisionByZero));
        assert_eq!(eval_tokens(&["0", "/", "0"]), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn test_overflow_is_reported_not_trapped() {
        assert_eq!(
            eval_tokens(&["-9223372036854775808", "/", "-1"]),
            Err(EvalError::Overflow)
        );
        assert_eq!(
            eval_tokens(&["9223372036854775807", "*", "2"]),
            Err(EvalError::Overflow)
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(EvalError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            EvalError::UnknownOperator("%".to_string()).to_string(),
            "unknown operator: %"
        );
        assert_eq!(
            EvalError::MalformedExpression(1).to_string(),
            "malformed expression: expected 3 tokens, got 1"
        );
    }
}
