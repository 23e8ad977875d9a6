//! Error types for the restock library.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

/// Main error type for restock operations.
#[derive(Debug, Error)]
pub enum RestockError {
    /// A source document could not be retrieved.
    #[error("Could not load '{resource}': {reason}")]
    ResourceUnavailable { resource: String, reason: String },

    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A failed load, handed to every caller that waited on it.
    #[error(transparent)]
    Shared(Arc<RestockError>),
}

impl RestockError {
    /// Build a `ResourceUnavailable` error.
    pub fn unavailable(resource: impl Into<String>, reason: impl ToString) -> Self {
        RestockError::ResourceUnavailable {
            resource: resource.into(),
            reason: reason.to_string(),
        }
    }

    /// Returns true if this error means a source document could not be fetched.
    pub fn is_unavailable(&self) -> bool {
        matches!(self.root(), RestockError::ResourceUnavailable { .. })
    }

    /// The underlying error, looking through [`RestockError::Shared`].
    pub fn root(&self) -> &RestockError {
        match self {
            RestockError::Shared(inner) => inner.root(),
            other => other,
        }
    }
}

/// Result type alias for restock operations.
pub type Result<T> = std::result::Result<T, RestockError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_error_keeps_its_cause() {
        let err = RestockError::Shared(Arc::new(RestockError::unavailable("STOCKWEB.csv", "timed out")));
        assert!(err.is_unavailable());
        assert!(matches!(err.root(), RestockError::ResourceUnavailable { .. }));
        assert_eq!(err.to_string(), "Could not load 'STOCKWEB.csv': timed out");
    }

    #[test]
    fn test_config_error_is_not_unavailable() {
        assert!(!RestockError::Config("bad".to_string()).is_unavailable());
    }
}
