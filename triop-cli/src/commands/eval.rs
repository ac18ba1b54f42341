//! The `triop eval` command.

use triop_eval::evaluate;
use triop_expr::Expression;

use crate::output;

pub fn run(tokens: &[String], verbose: bool) -> Result<(), String> {
    let expr = Expression::new(tokens.iter().cloned());

    if verbose {
        output::info(&format!("expression: {expr}"));
    }

    match evaluate(&expr) {
        Ok(value) => {
            output::success(&value.to_string());
            Ok(())
        }
        Err(e) => {
            output::error(&e.to_string());
            Err("evaluation error".to_string())
        }
    }
}
