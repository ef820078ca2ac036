//! The database facade.

use std::sync::Arc;

use aidb_embeddings::{EmbeddingClient, EmbeddingProvider};
use aidb_vector::{Document, VectorSearch};
use tracing::{debug, info};

use crate::config::DatabaseConfig;
use crate::error::{DatabaseError, Result};
use crate::provider::{DatabaseProvider, MemoryProvider, QueryOptions, VectorProvider};

/// Document database with a pluggable provider.
///
/// Every failure leaving [`Database::query`] or [`Database::insert`] is
/// wrapped once as [`DatabaseError::Query`] or [`DatabaseError::Insert`].
pub struct Database {
    config: DatabaseConfig,
    provider: Arc<dyn DatabaseProvider>,
}

impl Database {
    /// Create a database over an arbitrary provider.
    ///
    /// Fails with [`DatabaseError::Config`] when `config` does not validate.
    pub fn new(config: DatabaseConfig, provider: Arc<dyn DatabaseProvider>) -> Result<Self> {
        config.validate()?;
        info!(
            "Opening database '{}' with {} provider",
            config.name,
            provider.name()
        );
        Ok(Self { config, provider })
    }

    /// Create a database backed by [`MemoryProvider`].
    pub fn in_memory(config: DatabaseConfig) -> Result<Self> {
        Self::new(config, Arc::new(MemoryProvider::new()))
    }

    /// Create a database backed by [`VectorProvider`], embedding through
    /// `embedding_provider` with the model and dimensions from
    /// `config.vector_search`.
    pub fn with_vector_search(
        config: DatabaseConfig,
        embedding_provider: Arc<dyn EmbeddingProvider>,
    ) -> Result<Self> {
        let mut client =
            EmbeddingClient::new(embedding_provider).with_default_model(config.embedding_model());
        if let Some(dimensions) = config.vector_search.as_ref().and_then(|v| v.dimensions) {
            client = client.with_dimensions(dimensions);
        }

        let search = Arc::new(VectorSearch::new(client));
        Self::new(config, Arc::new(VectorProvider::new(search)))
    }

    /// Pick the provider the configuration asks for.
    ///
    /// A `vector_search` section requires an embedding provider; without the
    /// section the database is in-memory and `embedding_provider` is unused.
    pub fn from_config(
        config: DatabaseConfig,
        embedding_provider: Option<Arc<dyn EmbeddingProvider>>,
    ) -> Result<Self> {
        config.validate()?;

        if config.vector_search.is_none() {
            return Self::in_memory(config);
        }

        match embedding_provider {
            Some(provider) => Self::with_vector_search(config, provider),
            None => Err(DatabaseError::Config(
                "vector_search is configured but no embedding provider was given".to_string(),
            )),
        }
    }

    /// The configuration this database was opened with.
    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Name of the active provider.
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Query documents.
    pub async fn query(&self, options: &QueryOptions) -> Result<Vec<Document>> {
        debug!("Querying database '{}'", self.config.name);
        self.provider
            .query(options)
            .await
            .map_err(|e| DatabaseError::Query(Box::new(e)))
    }

    /// Insert a document, replacing any document with the same id.
    pub async fn insert(&self, document: Document) -> Result<()> {
        self.provider
            .insert(document)
            .await
            .map_err(|e| DatabaseError::Insert(Box::new(e)))
    }
}
