//! Corpus sources - where candidate stopwords come from.
//!
//! - [`EmbeddedCorpus`] - the bundled Thai stopword list compiled into the binary
//! - [`FileCorpus`] - a one-word-per-line file on disk
//! - [`LoadedCorpus`] - candidates already fetched from another source
//!
//! Both share the same line format: UTF-8, surrounding whitespace trimmed,
//! blank lines and `#` comments skipped.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::error::{Result, SyncError};
use crate::ports::CorpusSource;

const BUNDLED_THAI_STOPWORDS: &str = include_str!("thai_stopwords.txt");

/// Parse the corpus line format.
pub fn parse_word_list(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// The bundled PyThaiNLP-derived stopword list.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedCorpus;

impl EmbeddedCorpus {
    pub fn new() -> Self {
        Self
    }

    pub fn words() -> Vec<String> {
        parse_word_list(BUNDLED_THAI_STOPWORDS)
    }
}

#[async_trait]
impl CorpusSource for EmbeddedCorpus {
    async fn fetch_candidates(&self) -> Result<Vec<String>> {
        let words = Self::words();
        info!("Loaded {} stopwords from bundled corpus", words.len());
        Ok(words)
    }

    fn describe(&self) -> String {
        "bundled thai stopword corpus".to_string()
    }
}

/// A corpus read from a word-list file.
#[derive(Debug, Clone)]
pub struct FileCorpus {
    path: PathBuf,
}

impl FileCorpus {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CorpusSource for FileCorpus {
    async fn fetch_candidates(&self) -> Result<Vec<String>> {
        debug!("Reading corpus file {}", self.path.display());
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            SyncError::SourceUnavailable(format!("cannot read {}: {}", self.path.display(), e))
        })?;

        let words = parse_word_list(&raw);
        if words.is_empty() {
            return Err(SyncError::SourceUnavailable(format!(
                "{} contains no words",
                self.path.display()
            )));
        }

        info!(
            "Loaded {} stopwords from {}",
            words.len(),
            self.path.display()
        );
        Ok(words)
    }

    fn describe(&self) -> String {
        format!("corpus file {}", self.path.display())
    }
}

/// Candidates fetched ahead of the run, so an unavailable corpus fails
/// before anything connects to the store.
#[derive(Debug, Clone)]
pub struct LoadedCorpus {
    description: String,
    words: Vec<String>,
}

impl LoadedCorpus {
    pub async fn fetch(source: &dyn CorpusSource) -> Result<Self> {
        Ok(Self {
            description: source.describe(),
            words: source.fetch_candidates().await?,
        })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[async_trait]
impl CorpusSource for LoadedCorpus {
    async fn fetch_candidates(&self) -> Result<Vec<String>> {
        Ok(self.words.clone())
    }

    fn describe(&self) -> String {
        self.description.clone()
    }
}
