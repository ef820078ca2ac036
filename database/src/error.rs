//! Error types for the database facade.

use aidb_vector::VectorError;
use thiserror::Error;

/// Result type alias for database operations.
pub type Result<T> = std::result::Result<T, DatabaseError>;

/// Errors that can occur in the database.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Configuration is unusable.
    #[error("configuration error: {0}")]
    Config(String),

    /// Configuration file is not valid TOML.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Document has no identifier.
    #[error("Document must have an id")]
    Validation,

    /// A vector-backed query was issued without query text.
    #[error("vector search requires query text")]
    MissingQuery,

    /// Vector search store error.
    #[error(transparent)]
    Vector(#[from] VectorError),

    /// `query` failed.
    #[error("Query failed: {0}")]
    Query(#[source] Box<DatabaseError>),

    /// `insert` failed.
    #[error("Insert failed: {0}")]
    Insert(#[source] Box<DatabaseError>),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
