//! Storage providers behind [`Database`](crate::Database).

use std::sync::Arc;

use aidb_vector::{Document, SearchOptions, VectorSearchProvider};
use async_trait::async_trait;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{DatabaseError, Result};

/// A database query.
///
/// `query` is the text to rank against; the remaining fields are the
/// [`SearchOptions`] shared with the vector store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    #[serde(flatten)]
    pub search: SearchOptions,
}

impl QueryOptions {
    /// A query ranking against `text` with default options.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            query: Some(text.into()),
            search: SearchOptions::default(),
        }
    }

    /// Replace the search options.
    pub fn with_search(mut self, search: SearchOptions) -> Self {
        self.search = search;
        self
    }
}

/// Query and insert capability of a document store.
#[async_trait]
pub trait DatabaseProvider: Send + Sync {
    /// Get the name of this provider.
    fn name(&self) -> &str;

    /// Find documents matching `options`.
    async fn query(&self, options: &QueryOptions) -> Result<Vec<Document>>;

    /// Store `document`, replacing any document with the same id.
    async fn insert(&self, document: Document) -> Result<()>;
}

/// Plain in-memory provider without embeddings.
///
/// Queries are a linear scan that ignores the query text, `min_score` and
/// `limit`. They return every document whose `data` attributes strictly
/// equal every filter pair, in insertion order.
#[derive(Default)]
pub struct MemoryProvider {
    documents: RwLock<IndexMap<String, Document>>,
}

impl MemoryProvider {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DatabaseProvider for MemoryProvider {
    fn name(&self) -> &str {
        "memory"
    }

    async fn query(&self, options: &QueryOptions) -> Result<Vec<Document>> {
        let documents = self.documents.read().await;
        let results: Vec<Document> = documents
            .values()
            .filter(|doc| {
                options
                    .search
                    .filter
                    .as_ref()
                    .is_none_or(|filter| doc.matches_attributes(filter))
            })
            .cloned()
            .collect();

        debug!("Memory query matched {} documents", results.len());
        Ok(results)
    }

    async fn insert(&self, document: Document) -> Result<()> {
        if document.id.is_empty() {
            return Err(DatabaseError::Validation);
        }

        debug!("Inserting document: {}", document.id);
        self.documents
            .write()
            .await
            .insert(document.id.clone(), document);
        Ok(())
    }
}

/// Provider ranking documents by embedding similarity.
pub struct VectorProvider {
    search: Arc<dyn VectorSearchProvider>,
}

impl VectorProvider {
    /// Wrap a vector search store.
    pub fn new(search: Arc<dyn VectorSearchProvider>) -> Self {
        Self { search }
    }
}

#[async_trait]
impl DatabaseProvider for VectorProvider {
    fn name(&self) -> &str {
        "vector"
    }

    async fn query(&self, options: &QueryOptions) -> Result<Vec<Document>> {
        let text = options
            .query
            .as_deref()
            .filter(|text| !text.is_empty())
            .ok_or(DatabaseError::MissingQuery)?;

        Ok(self.search.search(text, &options.search).await?)
    }

    async fn insert(&self, document: Document) -> Result<()> {
        Ok(self.search.add_document(document).await?)
    }
}
