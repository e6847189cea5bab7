//! In-memory [`StopwordStore`] for tests.
//!
//! Mirrors the relational contract: a case-insensitive unique key on the
//! stopword text, insert-or-ignore inserts, and all-or-nothing chunks.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::error::StoreError;
use crate::exclusion::normalize;
use crate::ports::StopwordStore;

#[derive(Debug)]
struct MemoryState {
    table_present: bool,
    stopwords: Vec<String>,
    negative_keywords: Vec<(String, bool)>,
    chunk_sizes: Vec<usize>,
    fail_on_chunk: Option<usize>,
}

#[derive(Debug)]
pub struct MemoryStopwordStore {
    state: Mutex<MemoryState>,
}

impl Default for MemoryStopwordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStopwordStore {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MemoryState {
                table_present: true,
                stopwords: Vec::new(),
                negative_keywords: Vec::new(),
                chunk_sizes: Vec::new(),
                fail_on_chunk: None,
            }),
        }
    }

    /// Seed existing rows. Seeding bypasses the unique key check.
    pub fn with_stopwords<I, S>(self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lock().stopwords.extend(words.into_iter().map(Into::into));
        self
    }

    pub fn with_negative_keyword(self, word: impl Into<String>, active: bool) -> Self {
        self.lock().negative_keywords.push((word.into(), active));
        self
    }

    /// Simulate a database without the destination table.
    pub fn without_table(self) -> Self {
        self.lock().table_present = false;
        self
    }

    /// Make the `n`th `insert_chunk` call (1-based) fail and roll back.
    pub fn fail_on_chunk(self, n: usize) -> Self {
        self.lock().fail_on_chunk = Some(n);
        self
    }

    pub fn stopwords(&self) -> Vec<String> {
        self.lock().stopwords.clone()
    }

    /// Sizes of every `insert_chunk` call so far, including failed ones.
    pub fn chunk_sizes(&self) -> Vec<usize> {
        self.lock().chunk_sizes.clone()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn require_table(state: &MemoryState) -> Result<(), StoreError> {
        if state.table_present {
            Ok(())
        } else {
            Err(StoreError::new("query Stopwords", "table does not exist"))
        }
    }
}

#[async_trait]
impl StopwordStore for MemoryStopwordStore {
    fn table_name(&self) -> &str {
        "Stopwords"
    }

    async fn table_exists(&self) -> Result<bool, StoreError> {
        Ok(self.lock().table_present)
    }

    async fn existing_stopwords(&self) -> Result<Vec<String>, StoreError> {
        let state = self.lock();
        Self::require_table(&state)?;
        Ok(state.stopwords.clone())
    }

    async fn active_negative_keywords(&self) -> Result<Vec<String>, StoreError> {
        Ok(self
            .lock()
            .negative_keywords
            .iter()
            .filter(|(_, active)| *active)
            .map(|(word, _)| word.clone())
            .collect())
    }

    async fn insert_chunk(&self, words: &[String]) -> Result<u64, StoreError> {
        let mut state = self.lock();
        Self::require_table(&state)?;
        state.chunk_sizes.push(words.len());

        if state.fail_on_chunk == Some(state.chunk_sizes.len()) {
            return Err(StoreError::new(
                "insert chunk",
                "injected failure, transaction rolled back",
            ));
        }

        let mut keys: HashSet<String> = state.stopwords.iter().map(|w| normalize(w)).collect();
        let staged: Vec<String> = words
            .iter()
            .filter(|w| keys.insert(normalize(w)))
            .cloned()
            .collect();

        let inserted = staged.len() as u64;
        state.stopwords.extend(staged);
        Ok(inserted)
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let state = self.lock();
        Self::require_table(&state)?;
        Ok(state.stopwords.len() as u64)
    }

    async fn sample(&self, limit: usize) -> Result<Vec<String>, StoreError> {
        let state = self.lock();
        Self::require_table(&state)?;
        let mut words = state.stopwords.clone();
        words.sort();
        words.truncate(limit);
        Ok(words)
    }
}
