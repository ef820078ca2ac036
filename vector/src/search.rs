//! The similarity index: storage plus linear-scan ranking.

use std::cmp::Reverse;
use std::sync::Arc;

use aidb_embeddings::{
    Embedding, EmbeddingClient, EmbeddingProvider, OpenAIProvider, cosine_similarity,
};
use async_trait::async_trait;
use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::document::Document;
use crate::error::{Result, VectorError};
use crate::options::SearchOptions;

/// Search and embedding capability of a vector-backed store.
#[async_trait]
pub trait VectorSearchProvider: Send + Sync {
    /// Rank stored documents against `query`.
    async fn search(&self, query: &str, options: &SearchOptions) -> Result<Vec<Document>>;

    /// Embed and store a document, replacing any entry with the same id.
    async fn add_document(&self, document: Document) -> Result<()>;

    /// Embed arbitrary text.
    async fn generate_embeddings(&self, text: &str, model: Option<&str>) -> Result<Embedding>;
}

/// A document paired with its embedding. Never modified after insert.
#[derive(Debug)]
struct IndexedEntry {
    embedding: Embedding,
    document: Document,
}

/// In-memory document store ranked by cosine similarity.
///
/// Entries live in insertion order. Re-adding an id replaces the entry in
/// place, so it keeps its original position; this order breaks ties
/// between equal scores.
///
/// Embedding calls run outside the entry lock. Concurrent inserts of the same
/// id resolve by which embedding call finishes last.
pub struct VectorSearch {
    client: EmbeddingClient,
    entries: RwLock<IndexMap<String, IndexedEntry>>,
}

impl VectorSearch {
    /// Create an empty store that embeds through `client`.
    pub fn new(client: EmbeddingClient) -> Self {
        info!(
            "Creating vector search with model {}",
            client.default_model()
        );
        Self {
            client,
            entries: RwLock::new(IndexMap::new()),
        }
    }

    /// Create an empty store backed by `provider` with its default model.
    pub fn with_provider(provider: Arc<dyn EmbeddingProvider>) -> Self {
        Self::new(EmbeddingClient::new(provider))
    }

    /// Create an empty store backed by the OpenAI embeddings API.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self::with_provider(Arc::new(OpenAIProvider::new(api_key)))
    }

    /// Number of stored documents.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether nothing has been stored yet.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Get a stored document by id.
    pub async fn get(&self, id: &str) -> Option<Document> {
        self.entries
            .read()
            .await
            .get(id)
            .map(|entry| entry.document.clone())
    }

    /// Embed `document.content` with the default model and store it.
    ///
    /// Fails with [`VectorError::Insert`] wrapping either
    /// [`VectorError::Validation`] (empty id, checked before any embedding
    /// call) or [`VectorError::Embedding`]. On failure the store is
    /// unchanged.
    pub async fn add_document(&self, document: Document) -> Result<()> {
        self.insert(document)
            .await
            .map_err(|e| VectorError::Insert(Box::new(e)))
    }

    async fn insert(&self, document: Document) -> Result<()> {
        if document.id.is_empty() {
            return Err(VectorError::Validation);
        }

        let embedding = self.generate_embeddings(&document.content, None).await?;

        let id = document.id.clone();
        let previous = self
            .entries
            .write()
            .await
            .insert(id.clone(), IndexedEntry { embedding, document });

        if previous.is_some() {
            debug!("Replaced document: {id}");
        } else {
            debug!("Added document: {id}");
        }
        Ok(())
    }

    /// Return the stored documents most similar to `query`, best first.
    ///
    /// The query is embedded once, then every entry is scored. Entries
    /// scoring below `min_score` or failing the filter are dropped, the rest
    /// are sorted by descending score (stable, so ties keep insertion order)
    /// and cut to `limit`.
    ///
    /// Any failure is reported as [`VectorError::Search`] and no results are
    /// returned. An empty store yields an empty list.
    pub async fn search(&self, query: &str, options: &SearchOptions) -> Result<Vec<Document>> {
        self.rank(query, options)
            .await
            .map_err(|e| VectorError::Search(Box::new(e)))
    }

    async fn rank(&self, query: &str, options: &SearchOptions) -> Result<Vec<Document>> {
        let query_embedding = self
            .generate_embeddings(query, options.model.as_deref())
            .await?;

        let entries = self.entries.read().await;

        let mut scored: Vec<(OrderedFloat<f32>, &Document)> = entries
            .values()
            .filter_map(|entry| {
                let score = cosine_similarity(&query_embedding, &entry.embedding);
                if score < options.min_score {
                    return None;
                }
                let filtered_out = options
                    .filter
                    .as_ref()
                    .is_some_and(|filter| !entry.document.matches_fields(filter));
                if filtered_out {
                    return None;
                }
                Some((OrderedFloat(score), &entry.document))
            })
            .collect();

        scored.sort_by_key(|(score, _)| Reverse(*score));

        let results: Vec<Document> = scored
            .into_iter()
            .take(options.limit)
            .map(|(_, document)| document.clone())
            .collect();

        debug!(
            "Search matched {} of {} documents",
            results.len(),
            entries.len()
        );
        Ok(results)
    }

    /// Embed `text`, with `model` overriding the default when given.
    pub async fn generate_embeddings(&self, text: &str, model: Option<&str>) -> Result<Embedding> {
        Ok(self.client.embed(text, model).await?)
    }
}

#[async_trait]
impl VectorSearchProvider for VectorSearch {
    async fn search(&self, query: &str, options: &SearchOptions) -> Result<Vec<Document>> {
        VectorSearch::search(self, query, options).await
    }

    async fn add_document(&self, document: Document) -> Result<()> {
        VectorSearch::add_document(self, document).await
    }

    async fn generate_embeddings(&self, text: &str, model: Option<&str>) -> Result<Embedding> {
        VectorSearch::generate_embeddings(self, text, model).await
    }
}
