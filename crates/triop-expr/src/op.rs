//! Operator definitions for triop.

use std::fmt;

/// A binary integer operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Add, // +
    Sub, // -
    Mul, // *
    Div, // /
}

/// The operator table: symbol to operation, fixed at compile time.
pub const OP_TABLE: [(&str, Op); 4] = [
    ("+", Op::Add),
    ("-", Op::Sub),
    ("*", Op::Mul),
    ("/", Op::Div),
];

impl Op {
    /// Look up an operator by its symbol.
    pub fn lookup(symbol: &str) -> Option<Op> {
        OP_TABLE
            .iter()
            .find(|(sym, _)| *sym == symbol)
            .map(|&(_, op)| op)
    }

    /// The symbol this operator is written as.
    pub fn symbol(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
        }
    }

    /// Apply the operation, returning `None` on overflow. Division
    /// truncates toward zero.
    ///
    /// The caller guards against a zero divisor before calling this, so a
    /// zero divisor can report as its own error instead of folding into
    /// the overflow case of `checked_div`.
    pub fn apply(self, lhs: i64, rhs: i64) -> Option<i64> {
        match self {
            Op::Add => lhs.checked_add(rhs),
            Op::Sub => lhs.checked_sub(rhs),
            Op::Mul => lhs.checked_mul(rhs),
            Op::Div => lhs.checked_div(rhs),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_symbols() {
        assert_eq!(Op::lookup("+"), Some(Op::Add));
        assert_eq!(Op::lookup("-"), Some(Op::Sub));
        assert_eq!(Op::lookup("*"), Some(Op::Mul));
        assert_eq!(Op::lookup("/"), Some(Op::Div));
    }

    #[test]
    fn test_lookup_unknown_symbol() {
        assert_eq!(Op::lookup("%"), None);
        assert_eq!(Op::lookup("^"), None);
        assert_eq!(Op::lookup(""), None);
    }

    #[test]
    fn test_table_round_trips_symbols() {
        for (sym, op) in OP_TABLE {
            assert_eq!(op.symbol(), sym);
            assert_eq!(Op::lookup(sym), Some(op));
        }
    }

    #[test]
    fn test_division_truncates_toward_zero() {
        assert_eq!(Op::Div.apply(7, 2), Some(3));
        assert_eq!(Op::Div.apply(-7, 2), Some(-3));
        assert_eq!(Op::Div.apply(7, -2), Some(-3));
    }

    #[test]
    fn test_apply_reports_overflow_as_none() {
        assert_eq!(Op::Div.apply(i64::MIN, -1), None);
        assert_eq!(Op::Mul.apply(i64::MAX, 2), None);
        assert_eq!(Op::Add.apply(i64::MAX, 1), None);
        assert_eq!(Op::Sub.apply(i64::MIN, 1), None);
    }
}
