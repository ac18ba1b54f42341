//! The `triop batch` command.

use std::fs;

use triop_eval::evaluate_all;
use triop_expr::Expression;

use crate::output;

pub fn run(file: &str, verbose: bool) -> Result<(), String> {
    let source = fs::read_to_string(file).map_err(|e| format!("{file}: {e}"))?;

    let exprs = Expression::parse_source(&source);

    if verbose {
        output::info(&format!("{} expressions", exprs.len()));
    }

    // One report line per expression; a failure never stops the batch.
    for outcome in evaluate_all(exprs) {
        println!("{}", outcome.report());
    }

    Ok(())
}
