//! Element Attributes
//!
//! Attribute manipulation: get, set, remove, has.

/// Named node map (attribute collection)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamedNodeMap {
    attributes: Vec<Attr>,
}

/// Single attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub name: String,
    pub value: String,
}

impl Attr {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl NamedNodeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get number of attributes
    pub fn length(&self) -> usize {
        self.attributes.len()
    }

    /// Get attribute by index
    pub fn item(&self, index: usize) -> Option<&Attr> {
        self.attributes.get(index)
    }

    /// Get attribute by name
    pub fn get_named_item(&self, name: &str) -> Option<&Attr> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Get attribute value
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.get_named_item(name).map(|a| a.value.as_str())
    }

    /// Set attribute, keeping its position if it already exists
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        match self.attributes.iter_mut().find(|a| a.name == name) {
            Some(attr) => attr.value = value.to_string(),
            None => self.attributes.push(Attr::new(name, value)),
        }
    }

    /// Remove attribute by name
    pub fn remove_named_item(&mut self, name: &str) -> Option<Attr> {
        let index = self.attributes.iter().position(|a| a.name == name)?;
        Some(self.attributes.remove(index))
    }

    /// Check if attribute exists
    pub fn has_attribute(&self, name: &str) -> bool {
        self.get_named_item(name).is_some()
    }

    /// Iterate over attributes
    pub fn iter(&self) -> impl Iterator<Item = &Attr> {
        self.attributes.iter()
    }
}

/// Check an attribute name the way `setAttribute` does for HTML documents:
/// non-empty, no whitespace, controls, quotes, `>`, `/` or `=`.
pub(crate) fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name
            .chars()
            .any(|c| {
                c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '>' | '/' | '=')
            })
}
