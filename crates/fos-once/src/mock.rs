//! Minimal host document for unit tests
//!
//! Nodes are stored in document order. Selectors are limited to a bare tag
//! name or one `[attr~="value"]` test.

use crate::{ElementHost, TreeQuery};

#[derive(Debug, thiserror::Error)]
#[error("unsupported selector: {0}")]
pub struct MockError(String);

#[derive(Debug, Default)]
struct MockNode {
    element: bool,
    tag: String,
    attrs: Vec<(String, String)>,
    parent: Option<usize>,
}

#[derive(Debug, Default)]
pub struct MockHost {
    nodes: Vec<MockNode>,
    pub html: usize,
    pub paragraph: usize,
    pub inner_span: usize,
    pub outer_span: usize,
    pub text: usize,
    /// Attribute writes fail while set
    pub read_only: bool,
}

enum Test<'s> {
    Tag(&'s str),
    Includes(&'s str, String),
}

impl MockHost {
    /// `<html><body><p><span>test</span></p><span></span></body></html>`
    pub fn sample() -> Self {
        let mut host = Self::default();
        host.html = host.push(true, "html", None);
        let body = host.push(true, "body", Some(host.html));
        host.paragraph = host.push(true, "p", Some(body));
        host.inner_span = host.push(true, "span", Some(host.paragraph));
        host.text = host.push(false, "#text", Some(host.inner_span));
        host.outer_span = host.push(true, "span", Some(body));
        host
    }

    fn push(&mut self, element: bool, tag: &str, parent: Option<usize>) -> usize {
        self.nodes.push(MockNode {
            element,
            tag: tag.to_string(),
            attrs: Vec::new(),
            parent,
        });
        self.nodes.len() - 1
    }

    fn is_descendant(&self, node: usize, ancestor: usize) -> bool {
        let mut current = self.nodes[node].parent;
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = self.nodes[parent].parent;
        }
        false
    }

    fn parse(selector: &str) -> Result<Test<'_>, MockError> {
        if let Some(inner) = selector.strip_prefix('[').and_then(|s| s.strip_suffix("\"]")) {
            if let Some((name, value)) = inner.split_once("~=\"") {
                let mut unescaped = String::new();
                let mut chars = value.chars();
                while let Some(c) = chars.next() {
                    match c {
                        '\\' => unescaped.extend(chars.next()),
                        _ => unescaped.push(c),
                    }
                }
                return Ok(Test::Includes(name, unescaped));
            }
        }
        if !selector.is_empty() && selector.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Ok(Test::Tag(selector));
        }
        Err(MockError(selector.to_string()))
    }
}

impl ElementHost for MockHost {
    type Node = usize;
    type Error = MockError;

    fn is_element(&self, node: usize) -> bool {
        self.nodes.get(node).is_some_and(|n| n.element)
    }

    fn has_attribute(&self, element: usize, name: &str) -> bool {
        self.get_attribute(element, name).is_some()
    }

    fn get_attribute(&self, element: usize, name: &str) -> Option<&str> {
        self.nodes[element]
            .attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    fn set_attribute(&mut self, element: usize, name: &str, value: &str) -> Result<(), MockError> {
        if self.read_only {
            return Err(MockError("read only".to_string()));
        }
        let attrs = &mut self.nodes[element].attrs;
        match attrs.iter_mut().find(|(n, _)| n == name) {
            Some(attr) => attr.1 = value.to_string(),
            None => attrs.push((name.to_string(), value.to_string())),
        }
        Ok(())
    }

    fn remove_attribute(&mut self, element: usize, name: &str) -> Result<(), MockError> {
        self.nodes[element].attrs.retain(|(n, _)| n != name);
        Ok(())
    }

    fn matches(&self, element: usize, selector: &str) -> Result<bool, MockError> {
        let node = &self.nodes[element];
        Ok(match Self::parse(selector)? {
            Test::Tag(tag) => node.tag == tag,
            Test::Includes(name, value) => self
                .get_attribute(element, name)
                .is_some_and(|v| v.split_ascii_whitespace().any(|t| t == value)),
        })
    }
}

impl TreeQuery for MockHost {
    fn document_element(&self) -> Option<usize> {
        (!self.nodes.is_empty()).then_some(self.html)
    }

    fn query_all(&self, scope: usize, selector: &str) -> Result<Vec<usize>, MockError> {
        let mut found = Vec::new();
        for node in 0..self.nodes.len() {
            if self.is_element(node)
                && self.is_descendant(node, scope)
                && self.matches(node, selector)?
            {
                found.push(node);
            }
        }
        Ok(found)
    }
}
