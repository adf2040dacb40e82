//! DOM Node Operations
//!
//! Core node manipulation: appendChild, insertBefore, removeChild.

use crate::{DomError, DomResult, DomTree, NodeId};

impl DomTree {
    /// Append `child` as the last child of `parent`, detaching it first
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        self.insert_before(parent, child, None)
    }

    /// Insert `child` before `reference` (or at the end when `None`)
    pub fn insert_before(
        &mut self,
        parent: NodeId,
        child: NodeId,
        reference: Option<NodeId>,
    ) -> DomResult<NodeId> {
        self.check_insert(parent, child)?;
        let reference = match reference {
            Some(r) if r == child => Some(self.node(child)?.next_sibling).filter(|n| n.is_valid()),
            other => other,
        };
        if let Some(reference) = reference {
            if self.parent(reference) != Some(parent) {
                return Err(DomError::HierarchyRequest);
            }
        }
        self.detach(child);

        let prev = match reference {
            Some(reference) => self.node(reference)?.prev_sibling,
            None => self.node(parent)?.last_child,
        };
        let next = reference.unwrap_or(NodeId::NONE);

        {
            let node = self.node_mut(child)?;
            node.parent = parent;
            node.prev_sibling = prev;
            node.next_sibling = next;
        }
        if prev.is_valid() {
            self.node_mut(prev)?.next_sibling = child;
        } else {
            self.node_mut(parent)?.first_child = child;
        }
        if next.is_valid() {
            self.node_mut(next)?.prev_sibling = child;
        } else {
            self.node_mut(parent)?.last_child = child;
        }
        Ok(child)
    }

    /// Detach `child` from `parent`. The node stays in the arena.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        if self.parent(child) != Some(parent) {
            return Err(DomError::HierarchyRequest);
        }
        self.detach(child);
        Ok(child)
    }

    fn check_insert(&self, parent: NodeId, child: NodeId) -> DomResult<()> {
        let parent_node = self.node(parent)?;
        self.node(child)?;
        if parent_node.is_text() || child == NodeId::ROOT {
            return Err(DomError::HierarchyRequest);
        }
        // A node cannot become its own descendant
        let mut ancestor = Some(parent);
        while let Some(id) = ancestor {
            if id == child {
                return Err(DomError::HierarchyRequest);
            }
            ancestor = self.parent(id);
        }
        Ok(())
    }

    fn detach(&mut self, child: NodeId) {
        let Some(node) = self.get(child) else {
            return;
        };
        let (parent, prev, next) = (node.parent, node.prev_sibling, node.next_sibling);
        if !parent.is_valid() {
            return;
        }

        if let Some(p) = self.get_mut(prev) {
            p.next_sibling = next;
        } else if let Some(p) = self.get_mut(parent) {
            p.first_child = next;
        }
        if let Some(n) = self.get_mut(next) {
            n.prev_sibling = prev;
        } else if let Some(p) = self.get_mut(parent) {
            p.last_child = prev;
        }
        if let Some(node) = self.get_mut(child) {
            node.parent = NodeId::NONE;
            node.prev_sibling = NodeId::NONE;
            node.next_sibling = NodeId::NONE;
        }
    }

    fn node(&self, id: NodeId) -> DomResult<&crate::Node> {
        self.get(id).ok_or(DomError::NotFound(id))
    }

    fn node_mut(&mut self, id: NodeId) -> DomResult<&mut crate::Node> {
        self.get_mut(id).ok_or(DomError::NotFound(id))
    }
}
