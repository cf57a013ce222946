use thiserror::Error;

use crate::node::NodeId;

/// Errors raised by structural operations on a [`Surface`](crate::Surface).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    #[error("node {0} does not exist")]
    UnknownNode(NodeId),
    #[error("node {0} has been deleted")]
    Deleted(NodeId),
    #[error("index {index} is out of range for {len} children")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("node {child} is not a child of node {parent}")]
    NotAChild { parent: NodeId, child: NodeId },
    #[error("<{tag}> cannot have child elements")]
    NotAContainer { tag: Box<str> },
    #[error("<{tag}> cannot hold text content")]
    NotAToken { tag: Box<str> },
    #[error("inserting node {child} into node {parent} would create a cycle")]
    HierarchyRequest { parent: NodeId, child: NodeId },
    #[error("\"{0}\" is not a valid XML name")]
    InvalidName(Box<str>),
    #[error("\"{0}\" is not a valid style value")]
    InvalidStyleValue(Box<str>),
    #[error("node {0} is already attached")]
    AlreadyAttached(NodeId),
}

impl SurfaceError {
    /// `true` for the range errors raised by index-based operations.
    #[inline]
    pub fn is_range_error(&self) -> bool {
        matches!(self, SurfaceError::IndexOutOfRange { .. })
    }
}
