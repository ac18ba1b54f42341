//! The three-token expression form.

use std::fmt;

/// Number of tokens in a well-formed expression: `left operator right`.
pub const EXPR_ARITY: usize = 3;

/// An expression submitted for evaluation: an ordered sequence of string
/// tokens.
///
/// A well-formed expression has exactly [`EXPR_ARITY`] tokens, but any arity
/// can be stored so the evaluator can classify malformed input instead of
/// rejecting it at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Expression {
    tokens: Vec<String>,
}

impl Expression {
    /// Create an expression from an explicit token list.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Expression {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// Split a source line on whitespace into an expression.
    pub fn parse_line(line: &str) -> Self {
        Expression::new(line.split_whitespace())
    }

    /// Split source text into expressions, one per line.
    ///
    /// Blank lines and `#` comment lines are skipped.
    pub fn parse_source(source: &str) -> Vec<Expression> {
        source
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(Expression::parse_line)
            .collect()
    }

    /// The tokens, in order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the expression has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.tokens.join(" "))
    }
}
