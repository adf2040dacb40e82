//! Once - marking operations
//!
//! Every operation validates its id before touching anything, resolves its
//! input, then walks the nodes in order. Each node is checked when it is
//! reached, and a mutation commits as soon as it is applied: an error on a
//! later node leaves earlier nodes updated.

use crate::codec::{self, MarkerList};
use crate::selection::{query_scope, resolve};
use crate::{Config, ElementHost, MarkerId, OnceError, Selection, TreeQuery};

/// Marking engine for one marker attribute
#[derive(Debug, Clone, Default)]
pub struct Once {
    config: Config,
}

impl Once {
    /// Create an engine, rejecting unusable attribute names
    pub fn new(config: Config) -> Result<Self, OnceError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Name of the marker attribute
    pub fn attribute(&self) -> &str {
        &self.config.attribute
    }

    /// Mark every input element not yet marked with `id`.
    ///
    /// Returns those elements, in input order. Already-marked elements are
    /// skipped and left untouched.
    pub fn mark<H: TreeQuery>(
        &self,
        host: &mut H,
        id: &str,
        input: Selection<'_, H::Node>,
        scope: Option<H::Node>,
    ) -> Result<Vec<H::Node>, OnceError> {
        let id = MarkerId::new(id)?;
        let selector = id.selector(self.attribute());
        let elements = resolve(&*host, input, scope)?;
        let attr = self.attribute();

        let marked = filter_and_modify(host, &elements, &selector, false, |host, element| {
            let value = if host.has_attribute(element, attr) {
                let existing = host.get_attribute(element, attr).unwrap_or_default();
                codec::update(existing, Some(id.as_str()), None)
            } else {
                id.as_str().to_string()
            };
            host.set_attribute(element, attr, &value)
        })?;

        tracing::debug!(
            "once({}) marked {} of {} elements",
            id,
            marked.len(),
            elements.len()
        );
        Ok(marked)
    }

    /// Remove `id` from every input element marked with it.
    ///
    /// Returns those elements, in input order. The attribute is removed once
    /// its last marker goes.
    pub fn unmark<H: TreeQuery>(
        &self,
        host: &mut H,
        id: &str,
        input: Selection<'_, H::Node>,
        scope: Option<H::Node>,
    ) -> Result<Vec<H::Node>, OnceError> {
        let id = MarkerId::new(id)?;
        let selector = id.selector(self.attribute());
        let elements = resolve(&*host, input, scope)?;
        let attr = self.attribute();

        let unmarked = filter_and_modify(host, &elements, &selector, true, |host, element| {
            let mut list = MarkerList::parse(host.get_attribute(element, attr).unwrap_or_default());
            list.remove(id.as_str());
            match list.to_attribute() {
                Some(value) => host.set_attribute(element, attr, &value),
                None => host.remove_attribute(element, attr),
            }
        })?;

        tracing::debug!(
            "once({}) unmarked {} of {} elements",
            id,
            unmarked.len(),
            elements.len()
        );
        Ok(unmarked)
    }

    /// Keep the elements already marked with `id`. Nothing is modified.
    pub fn filter_marked<H: ElementHost>(
        &self,
        host: &H,
        id: &str,
        elements: &[H::Node],
    ) -> Result<Vec<H::Node>, OnceError> {
        let id = MarkerId::new(id)?;
        let selector = id.selector(self.attribute());

        let mut selected = Vec::new();
        for (index, &element) in elements.iter().enumerate() {
            check_element(host, element, index)?;
            if host.matches(element, &selector).map_err(OnceError::host)? {
                selected.push(element);
            }
        }
        tracing::debug!(
            "once({}) filtered {} of {} elements",
            id,
            selected.len(),
            elements.len()
        );
        Ok(selected)
    }

    /// Query `scope` for descendants marked with `id`, in document order.
    ///
    /// `scope` defaults to the document element and must be an element.
    pub fn find_marked<H: TreeQuery>(
        &self,
        host: &H,
        id: &str,
        scope: Option<H::Node>,
    ) -> Result<Vec<H::Node>, OnceError> {
        let id = MarkerId::new(id)?;
        let scope = query_scope(host, scope)?;
        let found = host
            .query_all(scope, &id.selector(self.attribute()))
            .map_err(OnceError::host)?;
        tracing::debug!("once({}) found {} marked elements", id, found.len());
        Ok(found)
    }
}

fn check_element<H: ElementHost>(host: &H, node: H::Node, index: usize) -> Result<(), OnceError> {
    if host.is_element(node) {
        Ok(())
    } else {
        Err(OnceError::NotAnElement { index })
    }
}

/// Apply `modify` to each element whose match against `selector` equals
/// `when_matching`, collecting those elements.
fn filter_and_modify<H, F>(
    host: &mut H,
    elements: &[H::Node],
    selector: &str,
    when_matching: bool,
    mut modify: F,
) -> Result<Vec<H::Node>, OnceError>
where
    H: ElementHost,
    F: FnMut(&mut H, H::Node) -> Result<(), H::Error>,
{
    let mut selected = Vec::new();
    for (index, &element) in elements.iter().enumerate() {
        let step = check_element(&*host, element, index)
            .and_then(|()| host.matches(element, selector).map_err(OnceError::host))
            .and_then(|matched| {
                if matched != when_matching {
                    return Ok(false);
                }
                modify(host, element).map_err(OnceError::host)?;
                Ok(true)
            });

        match step {
            Ok(true) => {
                tracing::trace!("Updated {:?}", element);
                selected.push(element);
            }
            Ok(false) => {}
            Err(err) => {
                if !selected.is_empty() {
                    tracing::warn!(
                        "Aborted at item {} after updating {} elements: {}",
                        index,
                        selected.len(),
                        err
                    );
                }
                return Err(err);
            }
        }
    }
    Ok(selected)
}
