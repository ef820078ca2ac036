//! Error types for the vector search store.

use aidb_embeddings::EmbeddingError;
use thiserror::Error;

/// Result type alias for vector search operations.
pub type Result<T> = std::result::Result<T, VectorError>;

/// Errors raised by [`VectorSearch`](crate::VectorSearch).
///
/// Public operations wrap their failure exactly once, so the outermost
/// variant names the operation and [`std::error::Error::source`] yields the
/// cause.
#[derive(Error, Debug)]
pub enum VectorError {
    /// Document has no identifier.
    #[error("Document must have an ID")]
    Validation,

    /// The embedding provider call failed.
    #[error("Embedding generation failed: {0}")]
    Embedding(#[from] EmbeddingError),

    /// `add_document` failed.
    #[error("Failed to add document: {0}")]
    Insert(#[source] Box<VectorError>),

    /// `search` failed.
    #[error("Vector search failed: {0}")]
    Search(#[source] Box<VectorError>),
}

impl VectorError {
    /// The innermost error this one wraps, or itself.
    pub fn root_cause(&self) -> &VectorError {
        match self {
            Self::Insert(inner) | Self::Search(inner) => inner.root_cause(),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::error::Error as _;

    #[test]
    fn test_insert_message_preserves_cause() {
        let err = VectorError::Insert(Box::new(VectorError::Validation));
        assert_eq!(err.to_string(), "Failed to add document: Document must have an ID");
        assert!(matches!(err.root_cause(), VectorError::Validation));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_search_message_preserves_cause() {
        let cause = EmbeddingError::ApiRequest("API Error".to_string());
        let err = VectorError::Search(Box::new(VectorError::Embedding(cause)));
        assert_eq!(
            err.to_string(),
            "Vector search failed: Embedding generation failed: API request failed: API Error"
        );
    }
}
