//! Batch classification reports.
//!
//! A [`BatchReport`] is the record of one batch run: every title with its
//! category and rendered trace, in input order. Reports are plain values
//! owned by the caller. They can be persisted as JSON (readable) or
//! binary (compact) and restored later, so a driver can keep the last run
//! without the engine holding any state.

use crate::core::TRACE_SEPARATOR;
use crate::engine::{Engine, UNKNOWN_CATEGORY};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;
use uuid::Uuid;

pub mod error;

pub use error::ReportError;

/// Version identifier for report format
pub const REPORT_VERSION: u32 = 1;

/// One classified title.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub title: String,
    pub category: String,
    pub trace: String,
}

impl ReportRow {
    /// Whether this title fell through to the unknown category.
    pub fn needs_review(&self) -> bool {
        self.category == UNKNOWN_CATEGORY
    }
}

/// Serializable record of a batch run.
///
/// # Example
///
/// ```rust
/// use shelfsort::engine::Engine;
/// use shelfsort::report::BatchReport;
/// use serde_json::json;
///
/// let engine = Engine::from_value(&json!({
///     "start_state": "s0",
///     "states": {
///         "s0": {"transitions": {"python": "s_py"}},
///         "s_py": {"type": "accept", "category": "Computer Science"}
///     }
/// }))
/// .unwrap();
///
/// let report = BatchReport::run(&engine, ["Learning Python", "History of Rome"]);
/// assert_eq!(report.rows.len(), 2);
/// assert_eq!(report.review_queue().count(), 1);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BatchReport {
    /// Report format version
    pub version: u32,

    /// Unique report identifier
    pub id: Uuid,

    /// When the batch was classified
    pub created_at: DateTime<Utc>,

    /// Start state of the rule set used, the first entry of every trace
    pub start_state: String,

    /// Classified titles in input order
    pub rows: Vec<ReportRow>,
}

impl BatchReport {
    /// Classify every title and collect the results in input order.
    pub fn run<I>(engine: &Engine, titles: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let rows: Vec<ReportRow> = titles
            .into_iter()
            .map(|title| {
                let title = title.as_ref();
                let result = engine.classify(title);
                ReportRow {
                    title: title.to_string(),
                    category: result.category().to_string(),
                    trace: result.trace_text(),
                }
            })
            .collect();

        let report = Self {
            version: REPORT_VERSION,
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            start_state: engine.rules().start_state().to_string(),
            rows,
        };

        info!(
            id = %report.id,
            titles = report.rows.len(),
            unresolved = report.review_queue().count(),
            "batch classified"
        );
        report
    }

    /// Number of titles per category.
    pub fn category_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for row in &self.rows {
            *counts.entry(row.category.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Titles that reached no accept state and need manual review.
    pub fn review_queue(&self) -> impl Iterator<Item = &ReportRow> {
        self.rows.iter().filter(|row| row.needs_review())
    }

    /// Check the report is internally consistent.
    pub fn validate(&self) -> Result<(), ReportError> {
        if self.version != REPORT_VERSION {
            return Err(ReportError::UnsupportedVersion {
                found: self.version,
                supported: REPORT_VERSION,
            });
        }

        for (index, row) in self.rows.iter().enumerate() {
            // State names are opaque and may contain the separator themselves.
            let from_start = row
                .trace
                .strip_prefix(self.start_state.as_str())
                .is_some_and(|rest| rest.starts_with(TRACE_SEPARATOR));
            if !from_start {
                return Err(ReportError::ForeignTrace {
                    row: index,
                    title: row.title.clone(),
                    start_state: self.start_state.clone(),
                });
            }
        }

        Ok(())
    }

    pub fn to_json(&self) -> Result<String, ReportError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ReportError::Encode(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, ReportError> {
        let report: Self = serde_json::from_str(json)
            .map_err(|e| ReportError::Decode(e.to_string()))?;
        report.validate()?;
        Ok(report)
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, ReportError> {
        bincode::serialize(self).map_err(|e| ReportError::Encode(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, ReportError> {
        let report: Self = bincode::deserialize(bytes)
            .map_err(|e| ReportError::Decode(e.to_string()))?;
        report.validate()?;
        Ok(report)
    }
}
