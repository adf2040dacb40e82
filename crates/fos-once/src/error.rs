//! Once errors

use std::error::Error;

/// Why a marker id was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    #[error("once id must be a string")]
    Missing,

    #[error("once id must not be empty")]
    Empty,

    #[error("once id must not contain spaces: {id:?}")]
    ContainsWhitespace { id: String },
}

/// Error raised by a marking operation
#[derive(Debug, thiserror::Error)]
pub enum OnceError {
    #[error(transparent)]
    InvalidId(#[from] IdError),

    #[error("item {index} is not an element")]
    NotAnElement { index: usize },

    #[error("the query scope must be an element")]
    InvalidScope,

    #[error("document has no root element")]
    NoDocumentElement,

    #[error("invalid marker attribute name: {name:?}")]
    InvalidAttributeName { name: String },

    #[error("host operation failed: {0}")]
    Host(#[source] Box<dyn Error + Send + Sync>),
}

/// Error classes callers branch on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The marker id failed validation; nothing was touched
    InvalidId,
    /// An input item or the scope is not an element
    InvalidElement,
    /// The marker attribute name is unusable
    Config,
    /// The host tree reported a failure
    Host,
}

impl OnceError {
    /// Wrap a host tree failure
    pub fn host(err: impl Error + Send + Sync + 'static) -> Self {
        Self::Host(Box::new(err))
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidId(_) => ErrorKind::InvalidId,
            Self::NotAnElement { .. } | Self::InvalidScope | Self::NoDocumentElement => {
                ErrorKind::InvalidElement
            }
            Self::InvalidAttributeName { .. } => ErrorKind::Config,
            Self::Host(_) => ErrorKind::Host,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("selector parse failed")]
    struct ParseFailure;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(OnceError::from(IdError::Empty).kind(), ErrorKind::InvalidId);
        assert_eq!(OnceError::NotAnElement { index: 1 }.kind(), ErrorKind::InvalidElement);
        assert_eq!(OnceError::InvalidScope.kind(), ErrorKind::InvalidElement);
        assert_eq!(OnceError::host(ParseFailure).kind(), ErrorKind::Host);
    }

    #[test]
    fn test_host_source_is_kept() {
        let err = OnceError::host(ParseFailure);
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("selector parse failed"));
    }

    #[test]
    fn test_messages() {
        let err = OnceError::from(IdError::ContainsWhitespace { id: "bad id".into() });
        assert_eq!(err.to_string(), "once id must not contain spaces: \"bad id\"");
        assert_eq!(OnceError::NotAnElement { index: 2 }.to_string(), "item 2 is not an element");
    }
}
