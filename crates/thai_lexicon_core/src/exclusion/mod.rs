//! Exclusion sources and the resolver that applies them.

pub mod resolver;

pub use resolver::{normalize, resolve, ExclusionDiagnostics, Resolution};

use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{Result, SyncError};
use crate::ports::ExclusionSource;

/// Default location of the removed-stopwords report.
pub const DEFAULT_REMOVED_REPORT: &str = "nonstandard_stopwords_report.json";

/// Words previously removed by curation, read from a JSON report.
///
/// The report is an object whose `"all"` member is an array of words. Other
/// members are ignored, as are non-string array entries.
#[derive(Debug, Clone)]
pub struct RemovedReportFile {
    path: PathBuf,
}

impl RemovedReportFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn degraded(&self, reason: impl Into<String>) -> SyncError {
        SyncError::ExclusionSourceDegraded {
            source_name: self.label().to_string(),
            reason: reason.into(),
        }
    }
}

/// Extract the word list from a parsed report document.
pub fn words_from_report(doc: &Value) -> Option<Vec<String>> {
    let all = doc.get("all")?.as_array()?;
    Some(
        all.iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
    )
}

#[async_trait]
impl ExclusionSource for RemovedReportFile {
    fn label(&self) -> &str {
        "removed-report"
    }

    async fn load(&self) -> Result<Vec<String>> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| self.degraded(format!("cannot read {}: {}", self.path.display(), e)))?;

        let doc: Value = serde_json::from_str(&raw)
            .map_err(|e| self.degraded(format!("invalid JSON in {}: {}", self.path.display(), e)))?;

        let words = words_from_report(&doc).ok_or_else(|| {
            self.degraded(format!(
                "{} has no \"all\" array of words",
                self.path.display()
            ))
        })?;

        debug!(
            "Read {} removed stopwords from {}",
            words.len(),
            self.path.display()
        );
        Ok(words)
    }
}

/// A fixed exclusion list.
#[derive(Debug, Clone, Default)]
pub struct StaticExclusions {
    label: String,
    words: Vec<String>,
}

impl StaticExclusions {
    pub fn new(label: impl Into<String>, words: Vec<String>) -> Self {
        Self {
            label: label.into(),
            words,
        }
    }
}

#[async_trait]
impl ExclusionSource for StaticExclusions {
    fn label(&self) -> &str {
        &self.label
    }

    async fn load(&self) -> Result<Vec<String>> {
        Ok(self.words.clone())
    }
}

/// Outcome of a best-effort exclusion load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BestEffortExclusions {
    pub words: Vec<String>,
    pub degraded: Option<String>,
}

/// Load an exclusion source, degrading a non-fatal failure to an empty
/// contribution.
///
/// A degraded source is logged and reported in `degraded`. Fatal errors
/// propagate.
pub async fn load_best_effort(source: &dyn ExclusionSource) -> Result<BestEffortExclusions> {
    match source.load().await {
        Ok(words) => Ok(BestEffortExclusions {
            words,
            degraded: None,
        }),
        Err(e) if e.is_fatal() => Err(e),
        Err(e) => {
            warn!(
                "Exclusion source `{}` unavailable, treating as empty: {}",
                source.label(),
                e
            );
            Ok(BestEffortExclusions {
                words: Vec::new(),
                degraded: Some(e.to_string()),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn report_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn reads_all_member_and_ignores_the_rest() {
        let file = report_file(
            r#"{"generatedAt":"2025-01-01T00:00:00Z","count":3,"sample":["x"],"all":["ที่",42,"ไม่เอา",null]}"#,
        );
        let words = RemovedReportFile::new(file.path()).load().await.unwrap();
        assert_eq!(words, vec!["ที่", "ไม่เอา"]);
    }

    #[tokio::test]
    async fn missing_file_degrades() {
        let dir = tempfile::tempdir().unwrap();
        let source = RemovedReportFile::new(dir.path().join(DEFAULT_REMOVED_REPORT));

        let err = source.load().await.unwrap_err();
        assert!(matches!(err, SyncError::ExclusionSourceDegraded { .. }));

        let outcome = load_best_effort(&source).await.unwrap();
        assert!(outcome.words.is_empty());
        assert!(outcome.degraded.unwrap().contains("cannot read"));
    }

    #[tokio::test]
    async fn corrupted_json_degrades() {
        let file = report_file("{\"all\": [\"ที่\"");
        let outcome = load_best_effort(&RemovedReportFile::new(file.path()))
            .await
            .unwrap();
        assert!(outcome.words.is_empty());
        assert!(outcome.degraded.unwrap().contains("invalid JSON"));
    }

    #[tokio::test]
    async fn unexpected_structure_degrades() {
        for body in [r#"["ที่"]"#, r#"{"all":"ที่"}"#, r#"{"words":["ที่"]}"#] {
            let file = report_file(body);
            let outcome = load_best_effort(&RemovedReportFile::new(file.path()))
                .await
                .unwrap();
            assert!(outcome.words.is_empty(), "{body}");
            assert!(outcome.degraded.is_some(), "{body}");
        }
    }

    #[tokio::test]
    async fn static_exclusions_never_degrade() {
        let source = StaticExclusions::new("cli", vec!["คือ".into()]);
        let outcome = load_best_effort(&source).await.unwrap();
        assert_eq!(outcome.words, vec!["คือ"]);
        assert_eq!(outcome.degraded, None);
    }

    struct BrokenSource;

    #[async_trait]
    impl ExclusionSource for BrokenSource {
        fn label(&self) -> &str {
            "broken"
        }

        async fn load(&self) -> Result<Vec<String>> {
            Err(SyncError::StoreUnreachable("connection reset".into()))
        }
    }

    #[tokio::test]
    async fn fatal_source_errors_propagate() {
        let err = load_best_effort(&BrokenSource).await.unwrap_err();
        assert!(err.is_fatal());
        assert!(matches!(err, SyncError::StoreUnreachable(_)));
    }
}
