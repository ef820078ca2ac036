//! Embedding providers.
//!
//! A provider turns one text into one vector by calling out to a model.
//! Credentials and model choice are handed to the provider when it is built.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{EmbeddingError, Result};
use crate::{DEFAULT_MODEL, Embedding};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Seconds to wait when a 429 carries no usable `retry-after` header.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Request for generating an embedding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingRequest {
    /// Text to embed.
    pub text: String,

    /// Model to use (provider-specific).
    pub model: Option<String>,

    /// Dimensions for the output (if supported by provider).
    pub dimensions: Option<usize>,
}

impl EmbeddingRequest {
    /// Create a new embedding request.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            model: None,
            dimensions: None,
        }
    }

    /// Set the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the output dimensions.
    pub fn with_dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions = Some(dimensions);
        self
    }
}

/// Response from embedding generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingResponse {
    /// The generated embedding.
    pub embedding: Embedding,

    /// Model used to generate the embedding.
    pub model: String,

    /// Dimension of the embedding.
    pub dimension: usize,

    /// Token usage (if available).
    pub tokens_used: Option<u64>,
}

/// Trait for embedding providers.
///
/// Implementations perform exactly one outbound request per call to
/// [`EmbeddingProvider::embed`]. Nothing is cached or retried.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Get the name of this provider.
    fn name(&self) -> &str;

    /// Get the default model for this provider.
    fn default_model(&self) -> &str;

    /// Generate an embedding for the given text.
    async fn embed(&self, request: EmbeddingRequest) -> Result<EmbeddingResponse>;

    /// Check if the provider is available (API key set, etc.).
    fn is_available(&self) -> bool;
}

/// OpenAI embedding provider.
///
/// Also works against any server exposing the OpenAI `/embeddings` route,
/// see [`OpenAIProvider::with_base_url`].
pub struct OpenAIProvider {
    /// API key.
    api_key: String,

    /// API base URL.
    base_url: String,

    /// HTTP client.
    client: reqwest::Client,

    /// Default model.
    default_model: String,

    /// Output dimensions requested when a request leaves them unset.
    dimensions: Option<usize>,
}

impl OpenAIProvider {
    /// Create a new OpenAI provider authenticated with `api_key`.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            client: reqwest::Client::new(),
            default_model: DEFAULT_MODEL.to_string(),
            dimensions: None,
        }
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the default model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    /// Request embeddings of this many dimensions by default.
    pub fn with_dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions = Some(dimensions);
        self
    }
}

#[async_trait]
impl EmbeddingProvider for OpenAIProvider {
    fn name(&self) -> &str {
        "openai"
    }

    fn default_model(&self) -> &str {
        &self.default_model
    }

    async fn embed(&self, request: EmbeddingRequest) -> Result<EmbeddingResponse> {
        if !self.is_available() {
            return Err(EmbeddingError::ProviderNotConfigured);
        }

        let model = request
            .model
            .unwrap_or_else(|| self.default_model.clone());

        debug!("Generating embedding with model: {model}");

        // The API takes a batch; this provider always sends a batch of one.
        let mut body = serde_json::json!({
            "input": [request.text],
            "model": model
        });

        if let Some(dims) = request.dimensions.or(self.dimensions) {
            body["dimensions"] = serde_json::json!(dims);
        }

        let response = self
            .client
            .post(format!("{}/embeddings", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_RETRY_AFTER_SECS);

            return Err(EmbeddingError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(EmbeddingError::ApiRequest(format!(
                "{status}: {error_text}"
            )));
        }

        let raw = response.text().await?;
        let result: OpenAIEmbeddingResponse = serde_json::from_str(&raw)?;

        let embedding = result
            .data
            .into_iter()
            .next()
            .ok_or_else(|| EmbeddingError::InvalidResponse("No embedding in response".to_string()))?
            .embedding;

        if embedding.is_empty() {
            return Err(EmbeddingError::InvalidResponse(
                "Empty embedding in response".to_string(),
            ));
        }

        let dimension = embedding.len();
        let tokens_used = result.usage.map(|u| u.total_tokens);

        info!("Generated embedding with {dimension} dimensions");

        Ok(EmbeddingResponse {
            embedding,
            model: result.model,
            dimension,
            tokens_used,
        })
    }

    fn is_available(&self) -> bool {
        !self.api_key.is_empty()
    }
}

/// OpenAI API response format.
#[derive(Debug, Deserialize)]
struct OpenAIEmbeddingResponse {
    data: Vec<OpenAIEmbeddingData>,
    model: String,
    usage: Option<OpenAIUsage>,
}

#[derive(Debug, Deserialize)]
struct OpenAIEmbeddingData {
    embedding: Vec<f32>,
}

#[derive(Debug, Deserialize)]
struct OpenAIUsage {
    total_tokens: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn embedding_body(values: &[f32]) -> serde_json::Value {
        serde_json::json!({
            "object": "list",
            "data": [{ "object": "embedding", "index": 0, "embedding": values }],
            "model": "text-embedding-3-small",
            "usage": { "prompt_tokens": 3, "total_tokens": 3 }
        })
    }

    #[test]
    fn test_embedding_request() {
        let request = EmbeddingRequest::new("Hello world")
            .with_model("text-embedding-3-small")
            .with_dimensions(512);

        assert_eq!(request.text, "Hello world");
        assert_eq!(request.model, Some("text-embedding-3-small".to_string()));
        assert_eq!(request.dimensions, Some(512));
    }

    #[tokio::test]
    async fn test_embed_sends_single_input_with_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/embeddings"))
            .and(header("authorization", "Bearer test-api-key"))
            .and(body_partial_json(serde_json::json!({
                "input": ["Test content"],
                "model": "text-embedding-3-small"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(embedding_body(&[0.1, 0.2, 0.3])))
            .expect(1)
            .mount(&server)
            .await;

        let provider = OpenAIProvider::new("test-api-key").with_base_url(server.uri());
        let response = provider
            .embed(EmbeddingRequest::new("Test content"))
            .await
            .unwrap();

        assert_eq!(response.embedding, vec![0.1, 0.2, 0.3]);
        assert_eq!(response.dimension, 3);
        assert_eq!(response.tokens_used, Some(3));
    }

    #[tokio::test]
    async fn test_embed_forwards_model_and_dimensions() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/embeddings"))
            .and(body_partial_json(serde_json::json!({
                "model": "text-embedding-3-large",
                "dimensions": 256
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(embedding_body(&[1.0, 0.0])))
            .expect(1)
            .mount(&server)
            .await;

        let provider = OpenAIProvider::new("key")
            .with_base_url(server.uri())
            .with_dimensions(256);
        let request = EmbeddingRequest::new("text").with_model("text-embedding-3-large");

        assert!(provider.embed(request).await.is_ok());
    }

    #[tokio::test]
    async fn test_embed_reports_api_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Incorrect API key provided"))
            .mount(&server)
            .await;

        let provider = OpenAIProvider::new("bad-key").with_base_url(server.uri());
        let err = provider.embed(EmbeddingRequest::new("text")).await.unwrap_err();

        assert!(matches!(err, EmbeddingError::ApiRequest(_)));
        assert!(err.to_string().contains("Incorrect API key provided"));
    }

    #[tokio::test]
    async fn test_embed_rate_limited() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "7"))
            .mount(&server)
            .await;

        let provider = OpenAIProvider::new("key").with_base_url(server.uri());
        let err = provider.embed(EmbeddingRequest::new("text")).await.unwrap_err();

        assert!(matches!(
            err,
            EmbeddingError::RateLimited {
                retry_after_secs: 7
            }
        ));
    }

    #[tokio::test]
    async fn test_embed_rejects_empty_data() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [],
                "model": "text-embedding-3-small"
            })))
            .mount(&server)
            .await;

        let provider = OpenAIProvider::new("key").with_base_url(server.uri());
        let err = provider.embed(EmbeddingRequest::new("text")).await.unwrap_err();

        assert!(matches!(err, EmbeddingError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_embed_rejects_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let provider = OpenAIProvider::new("key").with_base_url(server.uri());
        let err = provider.embed(EmbeddingRequest::new("text")).await.unwrap_err();

        assert!(matches!(err, EmbeddingError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_missing_api_key() {
        let provider = OpenAIProvider::new("");
        assert!(!provider.is_available());

        let err = provider.embed(EmbeddingRequest::new("text")).await.unwrap_err();
        assert!(matches!(err, EmbeddingError::ProviderNotConfigured));
    }
}
