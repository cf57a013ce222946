use std::fmt;

use surface::NodeId;

/// Number of children a layout element is expected to have.
///
/// Tree mutations never check this; [`Document::validate`](crate::Document::validate) does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Any,
    Exactly(usize),
    AtLeast(usize),
}

impl Arity {
    #[inline]
    pub const fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Any => true,
            Arity::Exactly(n) => count == n,
            Arity::AtLeast(n) => count >= n,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Any => f.write_str("any number of children"),
            Arity::Exactly(1) => f.write_str("exactly 1 child"),
            Arity::Exactly(n) => write!(f, "exactly {n} children"),
            Arity::AtLeast(1) => f.write_str("at least 1 child"),
            Arity::AtLeast(n) => write!(f, "at least {n} children"),
        }
    }
}

/// An element whose child count does not match its tag's [`Arity`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArityViolation {
    pub node: NodeId,
    pub tag: &'static str,
    pub expected: Arity,
    pub actual: usize,
}

impl fmt::Display for ArityViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{}> {} expects {}, found {}",
            self.tag, self.node, self.expected, self.actual
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts() {
        assert!(Arity::Any.accepts(0));
        assert!(Arity::Exactly(2).accepts(2));
        assert!(!Arity::Exactly(2).accepts(3));
        assert!(Arity::AtLeast(1).accepts(4));
        assert!(!Arity::AtLeast(1).accepts(0));
    }

    #[test]
    fn display() {
        assert_eq!(Arity::Exactly(2).to_string(), "exactly 2 children");
        assert_eq!(Arity::AtLeast(1).to_string(), "at least 1 child");
    }
}
