//! fOS Once - Idempotent element marking
//!
//! Marks elements so an initialization routine runs on each element at most
//! once per marker id, across repeated scans of overlapping element sets.
//!
//! State is not kept in a registry: every element carries its own marker set
//! in a single space-separated attribute (`data-once` by default), and every
//! call re-reads that attribute.
//!
//! # Example
//! ```rust,ignore
//! use fos_once::{Selection, mark, find_marked};
//!
//! // First scan initializes both spans.
//! let fresh = mark(&mut tree, "tooltip", Selection::from("span"), None)?;
//! // A later scan skips them.
//! assert!(mark(&mut tree, "tooltip", Selection::from("span"), None)?.is_empty());
//! assert_eq!(find_marked(&tree, "tooltip", None)?, fresh);
//! ```

pub mod codec;
mod config;
mod error;
mod host;
mod marker;
#[cfg(test)]
mod mock;
mod once;
mod selection;

pub use codec::MarkerList;
pub use config::{Config, DEFAULT_ATTRIBUTE};
pub use error::{ErrorKind, IdError, OnceError};
pub use host::{ElementHost, TreeQuery};
pub use marker::MarkerId;
pub use once::Once;
pub use selection::{Selection, resolve};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Mark elements with `id` using the default configuration.
///
/// Returns the elements that were not marked before this call.
pub fn mark<H: TreeQuery>(
    host: &mut H,
    id: &str,
    input: Selection<'_, H::Node>,
    scope: Option<H::Node>,
) -> Result<Vec<H::Node>, OnceError> {
    Once::default().mark(host, id, input, scope)
}

/// Remove `id` from elements using the default configuration.
///
/// Returns the elements that were marked before this call.
pub fn unmark<H: TreeQuery>(
    host: &mut H,
    id: &str,
    input: Selection<'_, H::Node>,
    scope: Option<H::Node>,
) -> Result<Vec<H::Node>, OnceError> {
    Once::default().unmark(host, id, input, scope)
}

/// Keep only the elements already marked with `id`.
pub fn filter_marked<H: ElementHost>(
    host: &H,
    id: &str,
    elements: &[H::Node],
) -> Result<Vec<H::Node>, OnceError> {
    Once::default().filter_marked(host, id, elements)
}

/// Query `scope` (the document element by default) for elements marked with `id`.
pub fn find_marked<H: TreeQuery>(
    host: &H,
    id: &str,
    scope: Option<H::Node>,
) -> Result<Vec<H::Node>, OnceError> {
    Once::default().find_marked(host, id, scope)
}
