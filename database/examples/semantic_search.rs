//! Demo of vector search over a handful of notes.
//!
//! Usage: OPENAI_API_KEY=... cargo run -p aidb-database --example semantic_search
//!
//! Without an API key the demo opens a plain in-memory database. That
//! provider ignores the query text and filters on `data` attributes, so the
//! demo filters on the `lang` attribute there instead of the `type` field.

use std::sync::Arc;

use aidb_database::{
    Database, DatabaseConfig, Document, QueryOptions, SearchOptions, VectorSearchConfig,
};
use aidb_embeddings::{EmbeddingProvider, OpenAIProvider};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let (db, filter_key) = match std::env::var("OPENAI_API_KEY") {
        Ok(key) => {
            let config =
                DatabaseConfig::new("notes").with_vector_search(VectorSearchConfig::default());
            let provider: Arc<dyn EmbeddingProvider> = Arc::new(OpenAIProvider::new(key));
            // Vector search filters on top-level fields.
            (Database::from_config(config, Some(provider))?, "type")
        }
        Err(_) => (Database::in_memory(DatabaseConfig::new("notes"))?, "lang"),
    };
    println!("Using the {} provider\n", db.provider_name());

    let notes = [
        ("ownership", "Each value in Rust has a single owner", "rust"),
        ("borrowing", "References borrow a value without taking ownership", "rust"),
        ("gil", "The global interpreter lock serializes Python bytecode", "python"),
        ("tokio", "Tokio is an asynchronous runtime for Rust", "rust"),
    ];
    for (id, content, lang) in notes {
        db.insert(Document::new(id, content, lang).with_data("lang", lang))
            .await?;
    }

    let query = QueryOptions::text("who owns a value?")
        .with_search(SearchOptions::new().with_filter(filter_key, "rust").with_limit(2));
    for doc in db.query(&query).await? {
        println!("{:>10}  {}", doc.id, doc.content);
    }

    Ok(())
}
