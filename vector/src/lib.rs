//! # Vector Search
//!
//! A minimal in-process document store with exact-match filtering and
//! brute-force cosine similarity search.
//!
//! Documents are embedded once on insert through an
//! [`EmbeddingClient`](aidb_embeddings::EmbeddingClient) and kept in memory
//! next to their vectors. A query is embedded the same way and scored
//! against every stored vector; there is no approximate index.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use aidb_vector::{Document, SearchOptions, VectorSearch};
//!
//! let search = VectorSearch::with_api_key(api_key);
//! search
//!     .add_document(Document::new("doc-1", "Rust ownership rules", "note"))
//!     .await?;
//!
//! let results = search
//!     .search("borrow checker", &SearchOptions::new().with_limit(3))
//!     .await?;
//! ```

pub mod document;
pub mod error;
pub mod options;
pub mod search;

pub use document::{Document, DocumentMetadata, ToolCall};
pub use error::{Result, VectorError};
pub use options::{Filter, SearchOptions};
pub use search::{VectorSearch, VectorSearchProvider};
