//! Command-line arguments for `stopword_sync`.

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use thai_lexicon_core::{SyncOptions, DEFAULT_REMOVED_REPORT};

/// Chunk size for `--daily` when no `--daily-limit` is given.
pub const DEFAULT_DAILY_LIMIT: usize = 100;

/// Synchronize the Thai stopword corpus into the Stopwords table
#[derive(Parser, Debug)]
#[command(name = "stopword_sync")]
#[command(about = "Insert standard Thai stopwords the store does not have yet")]
pub struct Args {
    /// Rows per chunk; each chunk commits on its own
    #[arg(long, env = "STOPWORD_BATCH_SIZE")]
    pub batch_size: Option<NonZeroUsize>,

    /// Rows per chunk for a daily run; --batch-size overrides it
    #[arg(long)]
    pub daily_limit: Option<NonZeroUsize>,

    /// Insert in chunks of --daily-limit (default 100)
    #[arg(long)]
    pub daily: bool,

    /// Read candidates from a word list file instead of the bundled corpus
    #[arg(long)]
    pub corpus_file: Option<PathBuf>,

    /// Report of words removed earlier as non-standard
    #[arg(long, default_value = DEFAULT_REMOVED_REPORT)]
    pub removed_report: PathBuf,

    /// Write stored words that the corpus lacks to this file
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Resolve and report without inserting
    #[arg(long, short = 'n')]
    pub dry_run: bool,

    /// Output the run report as JSON
    #[arg(long)]
    pub json: bool,

    /// Pause between chunks, in milliseconds
    #[arg(long, default_value = "1000")]
    pub pause_ms: u64,
}

impl Args {
    /// `--batch-size` wins, then an explicit `--daily-limit`, then `--daily`
    /// with the default limit; otherwise one bulk insert.
    pub fn effective_batch_size(&self) -> Option<NonZeroUsize> {
        match (self.batch_size, self.daily_limit, self.daily) {
            (Some(size), _, _) => Some(size),
            (None, Some(limit), _) => Some(limit),
            (None, None, true) => NonZeroUsize::new(DEFAULT_DAILY_LIMIT),
            (None, None, false) => None,
        }
    }

    pub fn sync_options(&self) -> SyncOptions {
        SyncOptions {
            batch_size: self.effective_batch_size(),
            pause: Duration::from_millis(self.pause_ms),
            dry_run: self.dry_run,
            export_path: self.export.clone(),
        }
    }
}
