//! thai_lexicon_core - Thai stopword synchronization and word segmentation.
//!
//! ## Synchronization pipeline
//!
//! ```text
//! CorpusSource --> resolve(existing, negative keywords, removed report) --> BatchLoader --> RunReport
//! ```
//!
//! The pipeline is additive-only: it inserts stopwords the store does not
//! yet have, never updates or deletes. Re-running it with unchanged inputs
//! inserts nothing.
//!
//! Storage and corpus backends plug in through the traits in [`ports`];
//! [`store::MemoryStopwordStore`] backs the tests, the MySQL adapter lives
//! in `thai_lexicon_mysql`.
//!
//! ## Segmentation
//!
//! [`segment::MaximalMatchSegmenter`] splits raw Thai text into tokens for
//! the tokenization endpoint.

pub mod corpus;
pub mod error;
pub mod exclusion;
pub mod loader;
pub mod pipeline;
pub mod ports;
pub mod report;
pub mod segment;
pub mod store;

pub use corpus::{EmbeddedCorpus, FileCorpus, LoadedCorpus};
pub use error::{Result, StoreError, SyncError};
pub use exclusion::{
    resolve, ExclusionDiagnostics, RemovedReportFile, Resolution, StaticExclusions,
    DEFAULT_REMOVED_REPORT,
};
pub use loader::{plan_chunks, BatchLoader, ChunkOutcome, InsertSummary, DEFAULT_CHUNK_PAUSE};
pub use pipeline::{run_sync, SyncOptions};
pub use ports::{CorpusSource, ExclusionSource, StopwordStore};
pub use report::{NonStandardReport, RunReport};
pub use segment::{MaximalMatchSegmenter, Segmenter};
pub use store::MemoryStopwordStore;
