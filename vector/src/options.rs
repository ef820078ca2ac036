//! Query options.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Attribute name to required value.
pub type Filter = Map<String, Value>;

/// Number of results returned when no limit is given.
pub const DEFAULT_LIMIT: usize = 10;

/// Options for [`VectorSearch::search`](crate::VectorSearch::search).
///
/// Every field is optional on the wire; missing ones take the defaults
/// (no filter, limit 10, the client's default model, no score threshold).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchOptions {
    /// Exact-match constraints on the document's top-level fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Filter>,

    /// Maximum number of results.
    pub limit: usize,

    /// Embedding model override for the query text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Results scoring strictly below this are dropped.
    pub min_score: f32,
}

impl SearchOptions {
    /// Options with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `key` to equal `value`.
    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter
            .get_or_insert_with(Filter::new)
            .insert(key.into(), value.into());
        self
    }

    /// Set the maximum number of results.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Embed the query with `model` instead of the default.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the minimum similarity score.
    pub fn with_min_score(mut self, min_score: f32) -> Self {
        self.min_score = min_score;
        self
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            filter: None,
            limit: DEFAULT_LIMIT,
            model: None,
            min_score: 0.0,
        }
    }
}
