//! Error types for the embeddings system.

use thiserror::Error;

/// Result type alias for embedding operations.
pub type Result<T> = std::result::Result<T, EmbeddingError>;

/// Errors that can occur while producing an embedding.
///
/// Every variant keeps the provider's own message so callers can surface it
/// unchanged.
#[derive(Error, Debug)]
pub enum EmbeddingError {
    /// Provider has no credential to authenticate with.
    #[error("embedding provider not configured")]
    ProviderNotConfigured,

    /// API request was rejected by the provider.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// Provider answered, but not with an embedding.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded.
    #[error("rate limit exceeded, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP error.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}
