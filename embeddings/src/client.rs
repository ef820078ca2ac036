//! Embedding client.
//!
//! [`EmbeddingClient`] is the single entry point the rest of the store uses
//! to turn text into vectors.

use std::sync::Arc;

use tracing::debug;

use crate::Embedding;
use crate::error::Result;
use crate::provider::{EmbeddingProvider, EmbeddingRequest};

/// Converts text into embeddings through an [`EmbeddingProvider`].
///
/// Each call to [`EmbeddingClient::embed`] performs exactly one provider
/// request. Identical inputs are not cached and failures are not retried;
/// both are left to the caller.
#[derive(Clone)]
pub struct EmbeddingClient {
    provider: Arc<dyn EmbeddingProvider>,

    /// Model used when a call does not name one.
    default_model: String,

    /// Output dimensions forwarded with every request.
    dimensions: Option<usize>,
}

impl EmbeddingClient {
    /// Create a client that uses the provider's own default model.
    pub fn new(provider: Arc<dyn EmbeddingProvider>) -> Self {
        let default_model = provider.default_model().to_string();
        Self {
            provider,
            default_model,
            dimensions: None,
        }
    }

    /// Override the default model.
    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    /// Request embeddings of a fixed dimension.
    pub fn with_dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    /// The model used when [`EmbeddingClient::embed`] gets no override.
    pub fn default_model(&self) -> &str {
        &self.default_model
    }

    /// Embed `text`, using `model` instead of the default when given.
    pub async fn embed(&self, text: &str, model: Option<&str>) -> Result<Embedding> {
        let model = model.unwrap_or(&self.default_model);
        debug!(
            provider = self.provider.name(),
            "Embedding {} characters with {model}",
            text.len()
        );

        let mut request = EmbeddingRequest::new(text).with_model(model);
        if let Some(dimensions) = self.dimensions {
            request = request.with_dimensions(dimensions);
        }

        let response = self.provider.embed(request).await?;
        Ok(response.embedding)
    }
}

impl std::fmt::Debug for EmbeddingClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddingClient")
            .field("provider", &self.provider.name())
            .field("default_model", &self.default_model)
            .field("dimensions", &self.dimensions)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EmbeddingError;
    use crate::provider::EmbeddingResponse;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    /// Records every request and answers with a fixed vector.
    #[derive(Default)]
    struct RecordingProvider {
        requests: Mutex<Vec<EmbeddingRequest>>,
        fail: bool,
    }

    #[async_trait]
    impl EmbeddingProvider for RecordingProvider {
        fn name(&self) -> &str {
            "recording"
        }

        fn default_model(&self) -> &str {
            "recording-model"
        }

        async fn embed(&self, request: EmbeddingRequest) -> crate::Result<EmbeddingResponse> {
            let model = request.model.clone().unwrap_or_default();
            self.requests.lock().unwrap().push(request);
            if self.fail {
                return Err(EmbeddingError::ApiRequest("API Error".to_string()));
            }
            Ok(EmbeddingResponse {
                embedding: vec![0.1, 0.2, 0.3],
                model,
                dimension: 3,
                tokens_used: None,
            })
        }

        fn is_available(&self) -> bool {
            true
        }
    }

    #[tokio::test]
    async fn test_embed_uses_provider_default_model() {
        let provider = Arc::new(RecordingProvider::default());
        let client = EmbeddingClient::new(provider.clone());

        let embedding = client.embed("hello", None).await.unwrap();

        assert_eq!(embedding, vec![0.1, 0.2, 0.3]);
        let requests = provider.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].text, "hello");
        assert_eq!(requests[0].model.as_deref(), Some("recording-model"));
    }

    #[tokio::test]
    async fn test_embed_model_override_and_dimensions() {
        let provider = Arc::new(RecordingProvider::default());
        let client = EmbeddingClient::new(provider.clone())
            .with_default_model("configured")
            .with_dimensions(3);

        client.embed("a", None).await.unwrap();
        client.embed("b", Some("override")).await.unwrap();

        let requests = provider.requests.lock().unwrap();
        assert_eq!(requests[0].model.as_deref(), Some("configured"));
        assert_eq!(requests[1].model.as_deref(), Some("override"));
        assert_eq!(requests[1].dimensions, Some(3));
    }

    #[tokio::test]
    async fn test_repeated_text_is_not_cached() {
        let provider = Arc::new(RecordingProvider::default());
        let client = EmbeddingClient::new(provider.clone());

        client.embed("same", None).await.unwrap();
        client.embed("same", None).await.unwrap();

        assert_eq!(provider.requests.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_provider_error_passes_through() {
        let provider = Arc::new(RecordingProvider {
            fail: true,
            ..Default::default()
        });
        let client = EmbeddingClient::new(provider.clone());

        let err = client.embed("hello", None).await.unwrap_err();

        assert_eq!(err.to_string(), "API request failed: API Error");
        assert_eq!(provider.requests.lock().unwrap().len(), 1);
    }
}
