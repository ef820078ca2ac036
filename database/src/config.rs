//! Configuration for the database.
//!
//! Everything a provider needs (model, dimensions) is carried here and
//! handed to constructors explicitly. The embedding API credential is not
//! part of the file; it goes into the embedding provider.
//!
//! ```toml
//! name = "notes"
//!
//! [vector_search]
//! model = "text-embedding-3-small"
//! dimensions = 512
//!
//! [synthetic]
//! model = "gpt-4o-mini"
//! ```

use std::path::Path;

use aidb_embeddings::DEFAULT_MODEL;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::info;

use crate::error::{DatabaseError, Result};

/// Configuration for a [`Database`](crate::Database).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database name or identifier.
    pub name: String,

    /// Enables the vector-backed provider when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vector_search: Option<VectorSearchConfig>,

    /// Synthetic data generation settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synthetic: Option<SyntheticConfig>,
}

/// Vector search settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorSearchConfig {
    /// Dimensions for vector embeddings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<usize>,

    /// Model to use for embeddings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// Synthetic data generation settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntheticConfig {
    /// Model to use for synthetic data generation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl DatabaseConfig {
    /// Create a configuration with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vector_search: None,
            synthetic: None,
        }
    }

    /// Enable vector search.
    pub fn with_vector_search(mut self, config: VectorSearchConfig) -> Self {
        self.vector_search = Some(config);
        self
    }

    /// Set the synthetic data configuration.
    pub fn with_synthetic(mut self, config: SyntheticConfig) -> Self {
        self.synthetic = Some(config);
        self
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await?;
        let config = Self::from_toml_str(&content)?;
        info!("Loaded database config '{}' from {}", config.name, path.display());
        Ok(config)
    }

    /// Check the invariants serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(DatabaseError::Config(
                "database name must not be empty".to_string(),
            ));
        }
        if let Some(VectorSearchConfig {
            dimensions: Some(0),
            ..
        }) = self.vector_search
        {
            return Err(DatabaseError::Config(
                "vector_search.dimensions must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// The embedding model documents and queries default to.
    pub fn embedding_model(&self) -> &str {
        self.vector_search
            .as_ref()
            .and_then(|v| v.model.as_deref())
            .unwrap_or(DEFAULT_MODEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_full_config() {
        let config = DatabaseConfig::from_toml_str(
            r#"
            name = "notes"

            [vector_search]
            model = "text-embedding-3-large"
            dimensions = 256

            [synthetic]
            model = "gpt-4o-mini"
            "#,
        )
        .unwrap();

        assert_eq!(
            config,
            DatabaseConfig::new("notes")
                .with_vector_search(VectorSearchConfig {
                    dimensions: Some(256),
                    model: Some("text-embedding-3-large".to_string()),
                })
                .with_synthetic(SyntheticConfig {
                    model: Some("gpt-4o-mini".to_string()),
                })
        );
        assert_eq!(config.embedding_model(), "text-embedding-3-large");
    }

    #[test]
    fn test_minimal_config_defaults() {
        let config = DatabaseConfig::from_toml_str(r#"name = "plain""#).unwrap();

        assert!(config.vector_search.is_none());
        assert!(config.synthetic.is_none());
        assert_eq!(config.embedding_model(), "text-embedding-3-small");
    }

    #[test]
    fn test_rejects_empty_name() {
        let err = DatabaseConfig::from_toml_str(r#"name = " ""#).unwrap_err();
        assert!(matches!(err, DatabaseError::Config(_)));
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        let err = DatabaseConfig::from_toml_str(
            r#"
            name = "notes"
            [vector_search]
            dimensions = 0
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, DatabaseError::Config(_)));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = DatabaseConfig::from_toml_str("name = ").unwrap_err();
        assert!(matches!(err, DatabaseError::ConfigParse(_)));
    }
}
