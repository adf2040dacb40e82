//! fOS DOM - Document Object Model
//!
//! Arena-based DOM tree with attribute access, CSS selector queries and
//! markup serialization. The tree implements the `fos-once` host traits, so
//! elements can be marked in place.

mod attributes;
mod document;
mod host;
mod node;
mod operations;
pub mod selector;
mod tree;

pub use attributes::{Attr, NamedNodeMap};
pub use document::Document;
pub use node::{ElementData, Node, NodeData};
pub use selector::SelectorList;
pub use tree::DomTree;

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root node ID (the document node)
    pub const ROOT: NodeId = NodeId(0);
    /// Invalid/null node
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check if this is a valid node id
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// DOM operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("Node not found: {0:?}")]
    NotFound(NodeId),

    #[error("Node is not an element: {0:?}")]
    NotAnElement(NodeId),

    #[error("Invalid attribute name: {0:?}")]
    InvalidAttributeName(String),

    #[error("Invalid selector {selector:?}: {reason}")]
    InvalidSelector { selector: String, reason: &'static str },

    #[error("Hierarchy request error")]
    HierarchyRequest,
}

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;
