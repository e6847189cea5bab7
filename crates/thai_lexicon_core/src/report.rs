//! Run reporting. Purely observational: nothing here touches the store.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::exclusion::{normalize, ExclusionDiagnostics};
use crate::loader::InsertSummary;

/// Number of stored words listed at the end of a run.
pub const SAMPLE_SIZE: usize = 20;

/// Words kept in the `sample` member of an exported report.
pub const EXPORT_SAMPLE_SIZE: usize = 50;

/// Summary of one synchronization run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub corpus: String,
    pub dry_run: bool,
    pub diagnostics: ExclusionDiagnostics,
    /// Words that survived exclusion and were submitted (or would be, on a dry run).
    pub insertable: usize,
    /// Stored stopwords that the corpus does not contain.
    pub non_standard: usize,
    pub summary: InsertSummary,
    pub final_count: u64,
    pub sample: Vec<String>,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.diagnostics;
        writeln!(f, "Stopword sync summary")?;
        writeln!(
            f,
            "  candidates from {:<24} {}",
            format!("{}:", self.corpus),
            d.total_candidates
        )?;
        writeln!(f, "  excluded, already stored:        {}", d.excluded_existing)?;
        writeln!(f, "  excluded, negative keyword:      {}", d.excluded_negative)?;
        write!(f, "  excluded, previously removed:    {}", d.excluded_removed)?;
        match &d.removed_report_degraded {
            Some(reason) => writeln!(f, " (report unavailable: {reason})")?,
            None => writeln!(f)?,
        }
        if d.duplicates > 0 || d.blank > 0 {
            writeln!(
                f,
                "  skipped, duplicate / blank:      {} / {}",
                d.duplicates, d.blank
            )?;
        }
        if self.dry_run {
            writeln!(f, "  would insert (dry run):          {}", self.insertable)?;
        } else {
            writeln!(
                f,
                "  inserted:                        {} of {} in {} chunk(s)",
                self.summary.inserted_count,
                self.summary.total_candidates,
                self.summary.chunks.len()
            )?;
        }
        if self.non_standard > 0 {
            writeln!(f, "  stored, not in corpus:           {}", self.non_standard)?;
        }
        write!(f, "  total stopwords in store:        {}", self.final_count)?;

        if !self.sample.is_empty() {
            writeln!(f)?;
            write!(f, "  sample:")?;
            for word in &self.sample {
                write!(f, "\n    - {word}")?;
            }
        }
        Ok(())
    }
}

/// Stored words that the corpus does not contain.
///
/// Uses the same shape the removed-report reader consumes, so a curated copy
/// of an export can be fed back as the removed report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NonStandardReport {
    pub generated_at: DateTime<Utc>,
    pub count: usize,
    pub sample: Vec<String>,
    pub all: Vec<String>,
}

impl NonStandardReport {
    pub fn from_words(stored: &[String], corpus: &[String]) -> Self {
        let standard: HashSet<String> = corpus.iter().map(|w| normalize(w)).collect();
        let all: Vec<String> = stored
            .iter()
            .filter(|w| !standard.contains(&normalize(w)))
            .cloned()
            .collect();

        Self {
            generated_at: Utc::now(),
            count: all.len(),
            sample: all.iter().take(EXPORT_SAMPLE_SIZE).cloned().collect(),
            all,
        }
    }

    pub async fn write_to(&self, path: &Path) -> Result<()> {
        let body = serde_json::to_string_pretty(self).map_err(std::io::Error::from)?;
        tokio::fs::write(path, body).await?;
        info!(
            "Exported {} non-standard stopwords to {}",
            self.count,
            path.display()
        );
        Ok(())
    }
}
