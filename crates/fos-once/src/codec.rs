//! Marker set codec
//!
//! Encodes the per-element marker set as one attribute value: an ordered,
//! de-duplicated list of tokens joined by single spaces. Decoding tolerates
//! any run of HTML whitespace between tokens, so hand-edited or malformed
//! attribute values never fail.

use std::fmt;

use crate::marker::is_marker_whitespace;

/// Split a raw attribute value into tokens.
///
/// Leading and trailing whitespace is ignored and empty tokens are dropped.
/// Duplicates are kept; see [`MarkerList::parse`] for the de-duplicated form.
pub fn decode(raw: &str) -> Vec<&str> {
    raw.split(is_marker_whitespace)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Rewrite a raw attribute value, optionally adding and removing one token.
///
/// Existing tokens keep their first-occurrence order, later duplicates and
/// the token equal to `remove` are dropped, then `add` is appended as is.
/// The caller only passes `add` for a token it knows is absent. Returns an
/// empty string when no tokens remain.
pub fn update(raw: &str, add: Option<&str>, remove: Option<&str>) -> String {
    let mut list = MarkerList::parse(raw);
    if let Some(remove) = remove {
        list.remove(remove);
    }
    let mut out = list.to_string();
    if let Some(add) = add {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(add);
    }
    out
}

/// Ordered set of marker tokens, the parsed form of one marker attribute.
///
/// [`update`] rewrites attribute values through it. Callers that inspect or
/// edit a marker set directly use it the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerList {
    tokens: Vec<String>,
}

impl MarkerList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an attribute value, dropping duplicate tokens
    pub fn parse(raw: &str) -> Self {
        let mut list = Self::new();
        for token in decode(raw) {
            list.insert(token);
        }
        list
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Check if a token is present
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Append a token if absent; returns whether it was added
    pub fn insert(&mut self, token: &str) -> bool {
        if token.is_empty() || self.contains(token) {
            return false;
        }
        self.tokens.push(token.to_string());
        true
    }

    /// Remove a token; returns whether it was present
    pub fn remove(&mut self, token: &str) -> bool {
        let before = self.tokens.len();
        self.tokens.retain(|t| t != token);
        self.tokens.len() != before
    }

    /// Iterate over tokens in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|s| s.as_str())
    }

    /// Attribute value for this list, `None` when empty
    pub fn to_attribute(&self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.tokens.join(" "))
        }
    }
}

impl fmt::Display for MarkerList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_decode_whitespace_runs() {
        assert_eq!(decode("  a\t\tb\nc\u{0C}d\re  "), vec!["a", "b", "c", "d", "e"]);
        assert!(decode("").is_empty());
        assert!(decode(" \t\n ").is_empty());
    }

    #[test]
    fn test_decode_keeps_vertical_tab() {
        assert_eq!(decode("a\u{0B}b c"), vec!["a\u{0B}b", "c"]);
    }

    #[test]
    fn test_update_add() {
        assert_eq!(update("test51", Some("test52"), None), "test51 test52");
        assert_eq!(update("", Some("a"), None), "a");
        assert_eq!(update("   ", Some("a"), None), "a");
    }

    #[test]
    fn test_update_remove() {
        assert_eq!(update("test61 test62", None, Some("test62")), "test61");
        assert_eq!(update("test61", None, Some("test61")), "");
        assert_eq!(update("a b", None, Some("missing")), "a b");
    }

    #[test]
    fn test_update_dedups_malformed_value() {
        assert_eq!(update("a  b\ta\n\nc b", None, None), "a b c");
        assert_eq!(update("a b a", Some("c"), Some("b")), "a c");
    }

    #[test]
    fn test_marker_list() {
        let mut list = MarkerList::parse("one two one");
        assert_eq!(list.len(), 2);
        assert!(list.contains("two"));

        assert!(list.insert("three"));
        assert!(!list.insert("one"));
        assert_eq!(list.to_string(), "one two three");

        assert!(list.remove("one"));
        assert!(!list.remove("one"));
        assert_eq!(list.to_attribute().as_deref(), Some("two three"));

        list.remove("two");
        list.remove("three");
        assert_eq!(list.to_attribute(), None);
    }

    fn token() -> impl Strategy<Value = String> {
        "[a-d]{1,2}"
    }

    fn separator() -> impl Strategy<Value = String> {
        "[ \t\n\r\u{0C}]{1,3}"
    }

    fn raw_value() -> impl Strategy<Value = String> {
        prop::collection::vec((token(), separator()), 0..8)
            .prop_map(|parts| parts.into_iter().map(|(t, s)| t + &s).collect())
    }

    proptest! {
        #[test]
        fn prop_update_has_no_duplicates(raw in raw_value()) {
            let out = update(&raw, None, None);
            let tokens = decode(&out);
            for (i, token) in tokens.iter().enumerate() {
                prop_assert!(!tokens[..i].contains(token));
            }
        }

        #[test]
        fn prop_update_keeps_first_occurrence_order(raw in raw_value()) {
            let mut expected: Vec<&str> = Vec::new();
            for token in decode(&raw) {
                if !expected.contains(&token) {
                    expected.push(token);
                }
            }
            prop_assert_eq!(update(&raw, None, None), expected.join(" "));
        }

        #[test]
        fn prop_update_removes_token(raw in raw_value(), gone in token()) {
            let out = update(&raw, None, Some(&gone));
            prop_assert!(!decode(&out).contains(&gone.as_str()));
        }

        #[test]
        fn prop_add_after_remove_is_last(raw in raw_value(), id in token()) {
            let out = update(&raw, Some(&id), Some(&id));
            prop_assert_eq!(decode(&out).last().copied(), Some(id.as_str()));
            prop_assert_eq!(MarkerList::parse(&out).to_string(), out.clone());
        }
    }
}
