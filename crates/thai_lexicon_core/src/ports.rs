//! Capability traits for the synchronization pipeline.
//! Storage adapters and corpus backends implement these; the resolver,
//! loader and pipeline depend only on them.

use async_trait::async_trait;

use crate::error::{Result, StoreError};

/// Supplies the raw candidate stopword list.
///
/// Duplicates are tolerated; the resolver collapses them.
#[async_trait]
pub trait CorpusSource: Send + Sync {
    /// Fetch every candidate in source order.
    ///
    /// Fails with [`crate::SyncError::SourceUnavailable`] when the linguistic
    /// resource cannot be loaded.
    async fn fetch_candidates(&self) -> Result<Vec<String>>;

    /// Short human-readable description used in logs.
    fn describe(&self) -> String;
}

/// A read-only set of words that must never be inserted.
#[async_trait]
pub trait ExclusionSource: Send + Sync {
    fn label(&self) -> &str;

    async fn load(&self) -> Result<Vec<String>>;
}

/// Destination store for stopword records.
///
/// Implementations must give `insert_chunk` insert-or-ignore semantics under a
/// case-insensitive unique key, and run each call as a single transaction that
/// either commits completely or rolls back completely.
#[async_trait]
pub trait StopwordStore: Send + Sync {
    /// Name of the destination table, used in diagnostics.
    fn table_name(&self) -> &str;

    async fn table_exists(&self) -> std::result::Result<bool, StoreError>;

    async fn existing_stopwords(&self) -> std::result::Result<Vec<String>, StoreError>;

    /// Text of every negative keyword whose active flag is set.
    async fn active_negative_keywords(&self) -> std::result::Result<Vec<String>, StoreError>;

    /// Insert one chunk in its own transaction. Returns the number of rows
    /// actually inserted (duplicates are skipped, not counted).
    async fn insert_chunk(&self, words: &[String]) -> std::result::Result<u64, StoreError>;

    async fn count(&self) -> std::result::Result<u64, StoreError>;

    /// First `limit` stopwords in text order.
    async fn sample(&self, limit: usize) -> std::result::Result<Vec<String>, StoreError>;
}
