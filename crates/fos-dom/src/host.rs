//! Host traits for element marking
//!
//! Lets `fos_once` mark elements of a `DomTree` in place.

use fos_once::{ElementHost, TreeQuery};

use crate::{DomError, DomTree, NodeId};

impl ElementHost for DomTree {
    type Node = NodeId;
    type Error = DomError;

    fn is_element(&self, node: NodeId) -> bool {
        DomTree::is_element(self, node)
    }

    fn has_attribute(&self, element: NodeId, name: &str) -> bool {
        DomTree::has_attribute(self, element, name)
    }

    fn get_attribute(&self, element: NodeId, name: &str) -> Option<&str> {
        DomTree::get_attribute(self, element, name)
    }

    fn set_attribute(&mut self, element: NodeId, name: &str, value: &str) -> Result<(), DomError> {
        DomTree::set_attribute(self, element, name, value)
    }

    fn remove_attribute(&mut self, element: NodeId, name: &str) -> Result<(), DomError> {
        DomTree::remove_attribute(self, element, name).map(|_| ())
    }

    fn matches(&self, element: NodeId, selector: &str) -> Result<bool, DomError> {
        DomTree::matches(self, element, selector)
    }
}

impl TreeQuery for DomTree {
    fn document_element(&self) -> Option<NodeId> {
        DomTree::document_element(self)
    }

    fn query_all(&self, scope: NodeId, selector: &str) -> Result<Vec<NodeId>, DomError> {
        self.query_selector_all(scope, selector)
    }
}
