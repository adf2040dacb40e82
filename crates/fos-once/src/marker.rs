//! Marker ids
//!
//! A marker id names one logical initialization routine. It is a non-empty
//! string without HTML whitespace, so it survives being stored as one token
//! of a space-separated attribute.

use std::fmt;

use crate::IdError;

/// HTML whitespace: TAB, LF, FF, CR and SPACE.
///
/// Matches `char::is_ascii_whitespace`; vertical tab is not included.
#[inline]
pub(crate) fn is_marker_whitespace(c: char) -> bool {
    c.is_ascii_whitespace()
}

/// A validated marker id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerId<'a>(&'a str);

impl<'a> MarkerId<'a> {
    /// Validate `id`
    pub fn new(id: &'a str) -> Result<Self, IdError> {
        if id.is_empty() {
            return Err(IdError::Empty);
        }
        if id.contains(is_marker_whitespace) {
            return Err(IdError::ContainsWhitespace { id: id.to_string() });
        }
        Ok(Self(id))
    }

    /// Validate an id that may be absent, e.g. one read from script or config
    pub fn from_optional(id: Option<&'a str>) -> Result<Self, IdError> {
        id.ok_or(IdError::Missing).and_then(Self::new)
    }

    /// The raw id
    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// Attribute selector matching elements whose `attribute` lists this id.
    ///
    /// Renders `[attribute~="id"]` with `"` and `\` escaped.
    pub fn selector(&self, attribute: &str) -> String {
        let mut out = String::with_capacity(attribute.len() + self.0.len() + 6);
        out.push('[');
        out.push_str(attribute);
        out.push_str("~=\"");
        for c in self.0.chars() {
            if c == '"' || c == '\\' {
                out.push('\\');
            }
            out.push(c);
        }
        out.push_str("\"]");
        out
    }
}

impl fmt::Display for MarkerId<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl AsRef<str> for MarkerId<'_> {
    fn as_ref(&self) -> &str {
        self.0
    }
}
