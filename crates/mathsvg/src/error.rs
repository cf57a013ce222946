use surface::SurfaceError;
use thiserror::Error;

use crate::arity::ArityViolation;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Surface(#[from] SurfaceError),
    #[error("{0}")]
    Arity(ArityViolation),
    #[error("unknown tag <{0}>")]
    UnknownTag(Box<str>),
    #[error("expected a <{expected}> element, found <{found}>")]
    TagMismatch {
        expected: &'static str,
        found: Box<str>,
    },
}

impl Error {
    /// `true` for a bad index passed to `insert_at` or `move_to`.
    #[inline]
    pub fn is_range_error(&self) -> bool {
        matches!(self, Error::Surface(err) if err.is_range_error())
    }

    /// `true` when an operation named a node that is not a child of the given parent.
    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Surface(SurfaceError::NotAChild { .. }))
    }
}
