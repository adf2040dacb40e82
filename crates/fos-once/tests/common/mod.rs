//! Shared fixtures for fos-once integration tests

#![allow(dead_code)]

use fos_dom::{Document, DomTree, NodeId};
use tracing_subscriber::EnvFilter;

/// Route `tracing` output through the test harness; `RUST_LOG` picks the level
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();
}

/// `<body><p><span>test</span></p><span></span></body>`
pub struct Page {
    pub doc: Document,
    pub paragraph: NodeId,
    pub inner: NodeId,
    pub outer: NodeId,
    pub text: NodeId,
}

impl Page {
    pub fn new() -> anyhow::Result<Self> {
        init_tracing();
        let mut doc = Document::default();
        let body = doc.body();
        let tree = doc.tree_mut();
        let paragraph = tree.append_element(body, "p")?;
        let inner = tree.append_element(paragraph, "span")?;
        let text = tree.append_text(inner, "test")?;
        let outer = tree.append_element(body, "span")?;
        Ok(Self {
            doc,
            paragraph,
            inner,
            outer,
            text,
        })
    }

    pub fn tree(&self) -> &DomTree {
        self.doc.tree()
    }

    pub fn tree_mut(&mut self) -> &mut DomTree {
        self.doc.tree_mut()
    }

    pub fn html(&self, node: NodeId) -> String {
        self.doc.tree().outer_html(node)
    }

    pub fn spans(&self) -> Vec<NodeId> {
        vec![self.inner, self.outer]
    }
}
