//! Element selection
//!
//! Turns the accepted input shapes into one ordered list of nodes.

use std::borrow::Cow;

use crate::{OnceError, TreeQuery};

/// Input to a marking operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<'a, N: Clone> {
    /// CSS selector, queried within the scope
    Selector(&'a str),
    /// A single node
    Element(N),
    /// Nodes in caller order; each item is checked when filtered
    Elements(Cow<'a, [N]>),
    /// The whole document (or window), aliased to the document element
    Document,
}

impl<'a, N: Clone> From<&'a str> for Selection<'a, N> {
    fn from(selector: &'a str) -> Self {
        Self::Selector(selector)
    }
}

impl<'a, N: Clone> From<&'a [N]> for Selection<'a, N> {
    fn from(nodes: &'a [N]) -> Self {
        Self::Elements(Cow::Borrowed(nodes))
    }
}

impl<'a, N: Clone> From<&'a Vec<N>> for Selection<'a, N> {
    fn from(nodes: &'a Vec<N>) -> Self {
        Self::Elements(Cow::Borrowed(nodes.as_slice()))
    }
}

impl<N: Clone> From<Vec<N>> for Selection<'_, N> {
    fn from(nodes: Vec<N>) -> Self {
        Self::Elements(Cow::Owned(nodes))
    }
}

/// Resolve `input` into the nodes an operation visits.
///
/// `scope` only applies to [`Selection::Selector`] and defaults to the
/// document element. Explicit node lists pass through unchecked.
pub fn resolve<'a, H: TreeQuery>(
    host: &H,
    input: Selection<'a, H::Node>,
    scope: Option<H::Node>,
) -> Result<Cow<'a, [H::Node]>, OnceError> {
    match input {
        Selection::Selector(selector) => {
            let scope = query_scope(host, scope)?;
            let found = host.query_all(scope, selector).map_err(OnceError::host)?;
            tracing::trace!("Selector {:?} matched {} nodes", selector, found.len());
            Ok(Cow::Owned(found))
        }
        Selection::Element(node) => Ok(Cow::Owned(vec![node])),
        Selection::Elements(nodes) => Ok(nodes),
        Selection::Document => {
            let root = host.document_element().ok_or(OnceError::NoDocumentElement)?;
            Ok(Cow::Owned(vec![root]))
        }
    }
}

/// Scope for a tree query: the given node or the document element, which
/// must be an element either way.
pub(crate) fn query_scope<H: TreeQuery>(
    host: &H,
    scope: Option<H::Node>,
) -> Result<H::Node, OnceError> {
    let scope = match scope {
        Some(node) => node,
        None => host.document_element().ok_or(OnceError::NoDocumentElement)?,
    };
    if !host.is_element(scope) {
        return Err(OnceError::InvalidScope);
    }
    Ok(scope)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockHost;
    use crate::ErrorKind;

    #[test]
    fn test_selector_queries_document() -> Result<(), OnceError> {
        let host = MockHost::sample();
        let found = resolve(&host, Selection::from("span"), None)?;
        assert_eq!(found.to_vec(), vec![host.inner_span, host.outer_span]);
        Ok(())
    }

    #[test]
    fn test_selector_respects_scope() -> Result<(), OnceError> {
        let host = MockHost::sample();
        let found = resolve(&host, Selection::from("span"), Some(host.paragraph))?;
        assert_eq!(found.to_vec(), vec![host.inner_span]);
        Ok(())
    }

    #[test]
    fn test_selector_scope_must_be_element() {
        let host = MockHost::sample();
        let err = resolve(&host, Selection::from("span"), Some(host.text));
        assert!(matches!(err, Err(OnceError::InvalidScope)));
    }

    #[test]
    fn test_single_element() -> Result<(), OnceError> {
        let host = MockHost::sample();
        let found = resolve(&host, Selection::Element(host.outer_span), Some(host.text))?;
        assert_eq!(found.to_vec(), vec![host.outer_span]);
        Ok(())
    }

    #[test]
    fn test_list_passes_through_unchecked() -> Result<(), OnceError> {
        let host = MockHost::sample();
        let nodes = vec![host.text, host.outer_span, host.text];
        let found = resolve(&host, Selection::from(&nodes), None)?;
        assert!(matches!(found, Cow::Borrowed(_)));
        assert_eq!(found.to_vec(), nodes);
        Ok(())
    }

    #[test]
    fn test_document_alias() -> Result<(), OnceError> {
        let host = MockHost::sample();
        let found = resolve(&host, Selection::Document, None)?;
        assert_eq!(found.to_vec(), vec![host.html]);
        Ok(())
    }

    #[test]
    fn test_missing_document_element() {
        let host = MockHost::default();
        let err = resolve(&host, Selection::<usize>::Document, None).map(|_| ());
        assert_eq!(err.map_err(|e| e.kind()), Err(ErrorKind::InvalidElement));
    }

    #[test]
    fn test_host_error_propagates() {
        let host = MockHost::sample();
        let err = resolve(&host, Selection::from("!!"), None).map(|_| ());
        assert_eq!(err.map_err(|e| e.kind()), Err(ErrorKind::Host));
    }
}
