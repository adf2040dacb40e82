//! Host document traits
//!
//! The marking operations never own elements. They reach the host document
//! through these traits: attribute access and selector matching on single
//! nodes, plus scoped tree queries.

use std::error::Error;
use std::fmt::Debug;

/// Attribute and selector access on host nodes
pub trait ElementHost {
    /// Node handle (arena index, pointer, ...)
    type Node: Copy + Eq + Debug;
    /// Failure reported by the host, e.g. an unparsable selector
    type Error: Error + Send + Sync + 'static;

    /// Whether `node` is an element (supports attributes and matching)
    fn is_element(&self, node: Self::Node) -> bool;

    fn has_attribute(&self, element: Self::Node, name: &str) -> bool;

    fn get_attribute(&self, element: Self::Node, name: &str) -> Option<&str>;

    fn set_attribute(
        &mut self,
        element: Self::Node,
        name: &str,
        value: &str,
    ) -> Result<(), Self::Error>;

    fn remove_attribute(&mut self, element: Self::Node, name: &str) -> Result<(), Self::Error>;

    /// Test `element` against a CSS selector without querying the tree
    fn matches(&self, element: Self::Node, selector: &str) -> Result<bool, Self::Error>;
}

/// Scoped selector queries over the host tree
pub trait TreeQuery: ElementHost {
    /// Root element, the default query scope
    fn document_element(&self) -> Option<Self::Node>;

    /// All descendants of `scope` matching `selector`, in document order
    fn query_all(&self, scope: Self::Node, selector: &str) -> Result<Vec<Self::Node>, Self::Error>;
}
