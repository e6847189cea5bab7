//! The corpus to store synchronization run.
//!
//! Stages run strictly in order: fetch corpus, verify schema, read
//! exclusions, resolve, load, report. Any fatal error stops the remaining
//! stages.

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

use tracing::{info, warn};

use crate::error::Result;
use crate::exclusion::{load_best_effort, resolve};
use crate::loader::{BatchLoader, InsertSummary, DEFAULT_CHUNK_PAUSE};
use crate::ports::{CorpusSource, ExclusionSource, StopwordStore};
use crate::report::{NonStandardReport, RunReport, SAMPLE_SIZE};

/// Stored words named in the non-standard warning.
const NON_STANDARD_PREVIEW: usize = 10;

#[derive(Debug, Clone)]
pub struct SyncOptions {
    pub batch_size: Option<NonZeroUsize>,
    pub pause: Duration,
    /// Resolve and report without inserting.
    pub dry_run: bool,
    /// Where to export stored words that the corpus lacks.
    pub export_path: Option<PathBuf>,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            batch_size: None,
            pause: DEFAULT_CHUNK_PAUSE,
            dry_run: false,
            export_path: None,
        }
    }
}

pub async fn run_sync(
    corpus: &dyn CorpusSource,
    store: &dyn StopwordStore,
    removed_report: &dyn ExclusionSource,
    options: &SyncOptions,
) -> Result<RunReport> {
    info!("Fetching candidates from {}", corpus.describe());
    let candidates = corpus.fetch_candidates().await?;

    let loader = BatchLoader::new(options.batch_size).with_pause(options.pause);
    loader.verify_schema(store).await?;

    let existing = store.existing_stopwords().await?;
    info!("Found {} existing stopwords in store", existing.len());
    let negative = store.active_negative_keywords().await?;
    info!("Found {} active negative keywords", negative.len());
    let removed = load_best_effort(removed_report).await?;
    if removed.degraded.is_none() {
        info!(
            "Found {} previously removed stopwords in {}",
            removed.words.len(),
            removed_report.label()
        );
    }

    let mut resolution = resolve(&candidates, &existing, &negative, &removed.words);
    resolution.diagnostics.removed_report_degraded = removed.degraded;
    info!(
        "{} of {} candidates qualify for insertion",
        resolution.insertable.len(),
        candidates.len()
    );

    let non_standard = NonStandardReport::from_words(&existing, &candidates);
    if non_standard.count > 0 {
        warn!(
            "{} stored stopwords are not in the corpus, e.g. {}",
            non_standard.count,
            non_standard.all[..non_standard.count.min(NON_STANDARD_PREVIEW)].join(", ")
        );
    }
    if let Some(path) = &options.export_path {
        if let Err(e) = non_standard.write_to(path).await {
            warn!("Could not write export file {}: {}", path.display(), e);
        }
    }

    let summary = if options.dry_run {
        info!("Dry run, skipping insertion");
        InsertSummary {
            total_candidates: resolution.insertable.len(),
            ..Default::default()
        }
    } else if resolution.insertable.is_empty() {
        info!("All stopwords are already in the store");
        InsertSummary::default()
    } else {
        loader.insert_chunks(store, &resolution.insertable).await?
    };

    let final_count = store.count().await?;
    let sample = store.sample(SAMPLE_SIZE).await?;

    Ok(RunReport {
        corpus: corpus.describe(),
        dry_run: options.dry_run,
        insertable: resolution.insertable.len(),
        diagnostics: resolution.diagnostics,
        non_standard: non_standard.count,
        summary,
        final_count,
        sample,
    })
}
