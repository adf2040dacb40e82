//! Once Configuration

use serde::{Deserialize, Serialize};

use crate::OnceError;

/// Attribute used when none is configured
pub const DEFAULT_ATTRIBUTE: &str = "data-once";

/// Marking configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name of the attribute holding each element's marker set
    pub attribute: String,
}

impl Config {
    /// Configuration storing markers in `attribute`
    pub fn with_attribute(attribute: &str) -> Result<Self, OnceError> {
        let config = Self { attribute: attribute.to_string() };
        config.validate()?;
        Ok(config)
    }

    /// Check that the attribute name is a CSS identifier, so it can be
    /// embedded in a selector without escaping.
    ///
    /// Deserialized configs are not checked until they reach [`crate::Once::new`].
    pub fn validate(&self) -> Result<(), OnceError> {
        if !is_css_identifier(&self.attribute) {
            return Err(OnceError::InvalidAttributeName {
                name: self.attribute.clone(),
            });
        }
        Ok(())
    }
}

/// `[A-Za-z0-9_-]` and non-ASCII name characters, not starting with a digit
/// or with `-` followed by a digit.
fn is_css_identifier(name: &str) -> bool {
    let is_name_char = |c: char| {
        c.is_ascii_alphanumeric()
            || matches!(c, '-' | '_')
            || (!c.is_ascii() && !c.is_whitespace() && !c.is_control())
    };
    let mut chars = name.chars();
    let start_ok = match chars.next() {
        None => false,
        Some('-') => chars.next().is_some_and(|c| is_name_char(c) && !c.is_ascii_digit()),
        Some(c) => is_name_char(c) && !c.is_ascii_digit(),
    };
    start_ok && name.chars().all(is_name_char)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            attribute: DEFAULT_ATTRIBUTE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_attribute() {
        assert_eq!(Config::default().attribute, "data-once");
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_custom_attribute() {
        let config = Config::with_attribute("data-drupal-once");
        assert_eq!(config.map(|c| c.attribute).ok().as_deref(), Some("data-drupal-once"));
    }

    #[test]
    fn test_accepts_identifiers() {
        for name in ["data-once", "data-drupal-once", "_x", "--x", "-x", "data_once2", "données"] {
            assert!(Config::with_attribute(name).is_ok(), "{name:?} should be accepted");
        }
    }

    #[test]
    fn test_rejects_unusable_names() {
        let names = [
            "", "data once", "data-once]", "a=b", "x\"y", "tab\t", r"data\once", "data.once",
            "data:once", "a,b", "1data", "-1data", "-",
        ];
        for name in names {
            assert!(
                matches!(Config::with_attribute(name), Err(OnceError::InvalidAttributeName { .. })),
                "{name:?} should be rejected"
            );
        }
    }
}
