//! DOM Tree (arena-based allocation)

use crate::attributes::is_valid_name;
use crate::selector::SelectorList;
use crate::{DomError, DomResult, ElementData, Node, NodeData, NodeId};

/// Arena-based DOM tree. Node 0 is the document node.
#[derive(Debug, Clone)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
        }
    }

    /// The document node
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Number of nodes in the tree, detached ones included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree has nothing but the document node
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(Node::element(tag))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.push(Node::text(content))
    }

    /// Create a detached comment node
    pub fn create_comment(&mut self, content: &str) -> NodeId {
        self.push(Node::comment(content))
    }

    /// Create an element and append it to `parent`
    pub fn append_element(&mut self, parent: NodeId, tag: &str) -> DomResult<NodeId> {
        let id = self.create_element(tag);
        self.append_child(parent, id)?;
        Ok(id)
    }

    /// Create a text node and append it to `parent`
    pub fn append_text(&mut self, parent: NodeId, content: &str) -> DomResult<NodeId> {
        let id = self.create_text(content);
        self.append_child(parent, id)?;
        Ok(id)
    }

    /// Parent of a node, if attached
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).map(|n| n.parent).filter(|p| p.is_valid())
    }

    /// Iterate over direct children
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.get(id).map_or(NodeId::NONE, |n| n.first_child),
        }
    }

    /// Iterate over descendants in document order, excluding `id` itself
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        Descendants {
            tree: self,
            root: id,
            next: self.get(id).map_or(NodeId::NONE, |n| n.first_child),
        }
    }

    /// Element data of a node
    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(Node::as_element)
    }

    fn element_mut(&mut self, id: NodeId) -> DomResult<&mut ElementData> {
        let node = self.nodes.get_mut(id.index()).ok_or(DomError::NotFound(id))?;
        node.as_element_mut().ok_or(DomError::NotAnElement(id))
    }

    /// Check if a node exists and is an element
    pub fn is_element(&self, id: NodeId) -> bool {
        self.element(id).is_some()
    }

    /// Tag name of an element
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|e| e.tag.as_str())
    }

    /// First element child of the document node
    pub fn document_element(&self) -> Option<NodeId> {
        self.children(NodeId::ROOT).find(|&id| self.is_element(id))
    }

    /// Get an attribute value
    pub fn get_attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id)?.get_attr(&name.to_ascii_lowercase())
    }

    /// Check if an attribute is present
    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.get_attribute(id, name).is_some()
    }

    /// Set an attribute. Names are ASCII-lowercased.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> DomResult<()> {
        if !is_valid_name(name) {
            return Err(DomError::InvalidAttributeName(name.to_string()));
        }
        let name = name.to_ascii_lowercase();
        self.element_mut(id)?.attrs.set_attribute(&name, value);
        Ok(())
    }

    /// Remove an attribute; returns whether it was present
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> DomResult<bool> {
        let name = name.to_ascii_lowercase();
        Ok(self.element_mut(id)?.attrs.remove_named_item(&name).is_some())
    }

    /// Check if an element matches a selector
    pub fn matches(&self, id: NodeId, selector: &str) -> DomResult<bool> {
        if !self.is_element(id) {
            return Err(DomError::NotAnElement(id));
        }
        let list = SelectorList::parse(selector)?;
        Ok(list.matches(self, id))
    }

    /// All element descendants of `scope` matching `selector`, in document order
    pub fn query_selector_all(&self, scope: NodeId, selector: &str) -> DomResult<Vec<NodeId>> {
        if self.get(scope).is_none() {
            return Err(DomError::NotFound(scope));
        }
        let list = SelectorList::parse(selector)?;
        let found: Vec<NodeId> = self
            .descendants(scope)
            .filter(|&id| self.is_element(id) && list.matches(self, id))
            .collect();
        tracing::trace!("querySelectorAll({}) found {} elements", selector, found.len());
        Ok(found)
    }

    /// First element descendant of `scope` matching `selector`
    pub fn query_selector(&self, scope: NodeId, selector: &str) -> DomResult<Option<NodeId>> {
        let list = SelectorList::parse(selector)?;
        Ok(self
            .descendants(scope)
            .find(|&id| self.is_element(id) && list.matches(self, id)))
    }

    /// Serialize a node and its subtree
    pub fn outer_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.serialize(id, &mut out);
        out
    }

    /// Serialize the children of a node
    pub fn inner_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        for child in self.children(id) {
            self.serialize(child, &mut out);
        }
        out
    }

    fn serialize(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.get(id) else {
            return;
        };
        match &node.data {
            NodeData::Document => {
                for child in self.children(id) {
                    self.serialize(child, out);
                }
            }
            NodeData::Element(elem) => {
                out.push('<');
                out.push_str(&elem.tag);
                for attr in elem.attrs.iter() {
                    out.push(' ');
                    out.push_str(&attr.name);
                    out.push_str("=\"");
                    escape_into(&attr.value, true, out);
                    out.push('"');
                }
                out.push('>');
                if is_void(&elem.tag) {
                    return;
                }
                for child in self.children(id) {
                    self.serialize(child, out);
                }
                out.push_str("</");
                out.push_str(&elem.tag);
                out.push('>');
            }
            NodeData::Text(text) => escape_into(text, false, out),
            NodeData::Comment(text) => {
                out.push_str("<!--");
                out.push_str(text);
                out.push_str("-->");
            }
        }
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

fn is_void(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "source"
            | "track"
            | "wbr"
    )
}

fn escape_into(text: &str, attribute: bool, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '\u{A0}' => out.push_str("&nbsp;"),
            '"' if attribute => out.push_str("&quot;"),
            '<' if !attribute => out.push_str("&lt;"),
            '>' if !attribute => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

/// Iterator over direct children
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next;
        let node = self.tree.get(current)?;
        self.next = node.next_sibling;
        Some(current)
    }
}

/// Pre-order iterator over a subtree
pub struct Descendants<'a> {
    tree: &'a DomTree,
    root: NodeId,
    next: NodeId,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next;
        let node = self.tree.get(current)?;

        self.next = if node.first_child.is_valid() {
            node.first_child
        } else {
            // Climb until a node with a next sibling, stopping at the root
            let mut id = current;
            loop {
                if id == self.root {
                    break NodeId::NONE;
                }
                let Some(n) = self.tree.get(id) else {
                    break NodeId::NONE;
                };
                if n.next_sibling.is_valid() {
                    break n.next_sibling;
                }
                id = n.parent;
            }
        };
        Some(current)
    }
}
