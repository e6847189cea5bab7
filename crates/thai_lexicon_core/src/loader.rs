//! Batch loader - idempotent, chunked insertion into the stopword store.
//!
//! Without a batch size (or when everything fits in one batch) the words go
//! in as one transaction. Otherwise they are split into consecutive chunks of
//! at most `batch_size`, each committed on its own, with a fixed pause
//! between chunks. A failed chunk is rolled back by the store and stops the
//! load; chunks committed before it stay committed.

use std::num::NonZeroUsize;
use std::ops::Range;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Result, SyncError};
use crate::ports::StopwordStore;

/// Pause between chunks.
pub const DEFAULT_CHUNK_PAUSE: Duration = Duration::from_secs(1);

const SCHEMA_HINT: &str =
    "apply crates/thai_lexicon_mysql/sql/stopwords.sql to the database before syncing";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChunkOutcome {
    /// 1-based chunk number.
    pub index: usize,
    pub submitted: usize,
    pub inserted: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InsertSummary {
    pub inserted_count: u64,
    pub total_candidates: usize,
    pub chunks: Vec<ChunkOutcome>,
}

/// Split `total` items into consecutive ranges of at most `batch_size`.
///
/// No batch size, or a total that fits in one batch, yields a single range.
/// Zero items yield no ranges.
pub fn plan_chunks(total: usize, batch_size: Option<NonZeroUsize>) -> Vec<Range<usize>> {
    if total == 0 {
        return Vec::new();
    }
    let size = match batch_size {
        Some(size) if size.get() < total => size.get(),
        _ => return vec![0..total],
    };
    (0..total)
        .step_by(size)
        .map(|start| start..(start + size).min(total))
        .collect()
}

#[derive(Debug, Clone)]
pub struct BatchLoader {
    batch_size: Option<NonZeroUsize>,
    pause: Duration,
}

impl Default for BatchLoader {
    fn default() -> Self {
        Self::new(None)
    }
}

impl BatchLoader {
    pub fn new(batch_size: Option<NonZeroUsize>) -> Self {
        Self {
            batch_size,
            pause: DEFAULT_CHUNK_PAUSE,
        }
    }

    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    /// Fail with `SchemaMissing` unless the destination table exists.
    pub async fn verify_schema(&self, store: &dyn StopwordStore) -> Result<()> {
        if store.table_exists().await? {
            Ok(())
        } else {
            Err(SyncError::SchemaMissing {
                table: store.table_name().to_string(),
                hint: SCHEMA_HINT.to_string(),
            })
        }
    }

    /// Verify the schema once, then insert every word.
    pub async fn load(&self, store: &dyn StopwordStore, words: &[String]) -> Result<InsertSummary> {
        self.verify_schema(store).await?;
        self.insert_chunks(store, words).await
    }

    /// Insert every word, chunk by chunk. The caller has already verified
    /// the schema.
    pub async fn insert_chunks(
        &self,
        store: &dyn StopwordStore,
        words: &[String],
    ) -> Result<InsertSummary> {
        let plan = plan_chunks(words.len(), self.batch_size);
        let mut summary = InsertSummary {
            total_candidates: words.len(),
            ..Default::default()
        };

        if plan.len() > 1 {
            info!(
                "Inserting {} stopwords in {} chunks of at most {}",
                words.len(),
                plan.len(),
                self.batch_size.map_or(words.len(), NonZeroUsize::get)
            );
        } else if !plan.is_empty() {
            info!("Inserting {} stopwords in a single transaction", words.len());
        }

        let last = plan.len();
        for (i, range) in plan.into_iter().enumerate() {
            let index = i + 1;
            let chunk = &words[range];

            let inserted =
                store
                    .insert_chunk(chunk)
                    .await
                    .map_err(|source| SyncError::LoadFailure {
                        chunk: index,
                        committed: summary.inserted_count,
                        source,
                    })?;

            debug!(
                "Chunk {}/{}: inserted {} of {} stopwords",
                index,
                last,
                inserted,
                chunk.len()
            );
            summary.inserted_count += inserted;
            summary.chunks.push(ChunkOutcome {
                index,
                submitted: chunk.len(),
                inserted,
            });

            if index < last && !self.pause.is_zero() {
                tokio::time::sleep(self.pause).await;
            }
        }

        Ok(summary)
    }
}
