//! # Embeddings
//!
//! Text-to-vector conversion and similarity scoring for the aidb document
//! store.
//!
//! ## Features
//!
//! - **Embedding Client**: one provider request per text, with an optional
//!   per-call model override
//! - **Providers**: an OpenAI-compatible HTTP provider behind the
//!   [`EmbeddingProvider`] trait, so tests and other backends can plug in
//! - **Similarity**: cosine similarity with a defined score for degenerate
//!   vectors
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Embeddings                                   │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  text ──► EmbeddingClient ──► EmbeddingProvider ──► Embedding   │
//! │                                     │                           │
//! │                                     ▼                           │
//! │                              OpenAI /embeddings                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod client;
pub mod error;
pub mod provider;
pub mod similarity;

pub use client::EmbeddingClient;
pub use error::{EmbeddingError, Result};
pub use provider::{EmbeddingProvider, EmbeddingRequest, EmbeddingResponse, OpenAIProvider};
pub use similarity::cosine_similarity;

/// A dense vector embedding.
pub type Embedding = Vec<f32>;

/// Model used when neither the caller nor the configuration names one.
pub const DEFAULT_MODEL: &str = "text-embedding-3-small";
