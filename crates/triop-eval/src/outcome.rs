//! Batch evaluation and report rendering.

use triop_expr::Expression;

use crate::{EvalError, evaluate};

/// One evaluated expression paired with its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub expr: Expression,
    pub result: Result<i64, EvalError>,
}

impl Outcome {
    /// Evaluate one expression.
    pub fn of(expr: Expression) -> Self {
        let result = evaluate(&expr);
        Outcome { expr, result }
    }

    /// Render the report line for this outcome:
    /// `[2 + 3] → 5` on success, `[2 / 0] -- division by zero` on failure.
    pub fn report(&self) -> String {
        match &self.result {
            Ok(value) => format!("{} → {}", self.expr, value),
            Err(err) => format!("{} -- {}", self.expr, err),
        }
    }
}

/// Evaluate a batch of expressions, producing one outcome per expression in
/// input order. A failed expression never stops the rest of the batch.
pub fn evaluate_all<I>(exprs: I) -> Vec<Outcome>
where
    I: IntoIterator<Item = Expression>,
{
    exprs.into_iter().map(Outcome::of).collect()
}
