//! Error taxonomy for the stopword synchronization pipeline.
//!
//! Every variant except [`SyncError::ExclusionSourceDegraded`] is fatal for a
//! run. The degraded case is recovered inside the pipeline and only surfaces
//! through the run diagnostics.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SyncError>;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("corpus source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("store unreachable: {0}")]
    StoreUnreachable(String),

    #[error("table `{table}` does not exist; {hint}")]
    SchemaMissing { table: String, hint: String },

    #[error("exclusion source `{source_name}` degraded: {reason}")]
    ExclusionSourceDegraded { source_name: String, reason: String },

    #[error("load failed on chunk {chunk} ({committed} row(s) committed before it): {source}")]
    LoadFailure {
        chunk: usize,
        committed: u64,
        #[source]
        source: StoreError,
    },

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl SyncError {
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::ExclusionSourceDegraded { .. })
    }
}

/// Error raised by a [`crate::ports::StopwordStore`] backend.
///
/// Adapters wrap their driver error together with a short description of
/// the operation that failed.
#[derive(Debug, Error)]
#[error("{context}: {cause}")]
pub struct StoreError {
    context: String,
    #[source]
    cause: Box<dyn std::error::Error + Send + Sync + 'static>,
}

impl StoreError {
    pub fn new(
        context: impl Into<String>,
        cause: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    ) -> Self {
        Self {
            context: context.into(),
            cause: cause.into(),
        }
    }
}
