//! Exclusion resolver - decides which candidates may be inserted.
//!
//! Pure function of its inputs. Comparison keys are trimmed and lower-cased;
//! the output keeps the first occurrence of each candidate in input order.

use std::collections::HashSet;

use serde::Serialize;

/// Comparison key for a word.
pub fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}

fn key_set(words: &[String]) -> HashSet<String> {
    words
        .iter()
        .map(|w| normalize(w))
        .filter(|k| !k.is_empty())
        .collect()
}

/// Why candidates were dropped, per source.
///
/// A candidate matching several sources is attributed to the first match in
/// the order existing, negative, removed. The counts therefore partition
/// `total_candidates` together with the insertable words.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExclusionDiagnostics {
    pub total_candidates: usize,
    pub excluded_existing: usize,
    pub excluded_negative: usize,
    pub excluded_removed: usize,
    pub duplicates: usize,
    pub blank: usize,
    /// Set when the removed-report could not be read and contributed nothing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub removed_report_degraded: Option<String>,
}

impl ExclusionDiagnostics {
    pub fn excluded_total(&self) -> usize {
        self.excluded_existing + self.excluded_negative + self.excluded_removed
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub insertable: Vec<String>,
    pub diagnostics: ExclusionDiagnostics,
}

/// Filter `candidates` against the three exclusion sources.
pub fn resolve(
    candidates: &[String],
    existing: &[String],
    negative_keywords: &[String],
    removed_report: &[String],
) -> Resolution {
    let existing = key_set(existing);
    let negative = key_set(negative_keywords);
    let removed = key_set(removed_report);

    let mut diagnostics = ExclusionDiagnostics {
        total_candidates: candidates.len(),
        ..Default::default()
    };
    let mut seen = HashSet::new();
    let mut insertable = Vec::new();

    for candidate in candidates {
        let key = normalize(candidate);
        if key.is_empty() {
            diagnostics.blank += 1;
        } else if !seen.insert(key.clone()) {
            diagnostics.duplicates += 1;
        } else if existing.contains(&key) {
            diagnostics.excluded_existing += 1;
        } else if negative.contains(&key) {
            diagnostics.excluded_negative += 1;
        } else if removed.contains(&key) {
            diagnostics.excluded_removed += 1;
        } else {
            insertable.push(candidate.trim().to_string());
        }
    }

    Resolution {
        insertable,
        diagnostics,
    }
}
