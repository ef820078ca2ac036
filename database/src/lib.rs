//! # Database
//!
//! Document database facade over a pluggable [`DatabaseProvider`].
//!
//! Two providers ship with the crate:
//!
//! - [`MemoryProvider`]: an insertion-ordered map answering queries with an
//!   attribute-filtered linear scan, no embeddings involved
//! - [`VectorProvider`]: delegates to [`aidb_vector::VectorSearch`] and ranks
//!   by cosine similarity to the query text
//!
//! [`Database`] picks one from its [`DatabaseConfig`] and prefixes every
//! failure with the operation that raised it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use aidb_database::{Database, DatabaseConfig, QueryOptions};
//!
//! let config = DatabaseConfig::load("aidb.toml").await?;
//! let db = Database::from_config(config, Some(embedding_provider))?;
//!
//! db.insert(document).await?;
//! let hits = db.query(&QueryOptions::text("rust async")).await?;
//! ```

pub mod config;
pub mod database;
pub mod error;
pub mod provider;

pub use config::{DatabaseConfig, SyntheticConfig, VectorSearchConfig};
pub use database::Database;
pub use error::{DatabaseError, Result};
pub use provider::{DatabaseProvider, MemoryProvider, QueryOptions, VectorProvider};

pub use aidb_vector::{Document, SearchOptions};
