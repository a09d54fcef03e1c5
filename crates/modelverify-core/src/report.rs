//! Report rendering and the versioned JSON envelope (report.json v1)

use crate::summary::Summary;
use serde::{Deserialize, Serialize};

const ONE_TAB: &str = "\n    ";
const TWO_TABS: &str = "\n        ";

/// Render a sequence of summaries into a human-readable message.
///
/// An empty sequence means the model matched; otherwise every summary that
/// has missing columns (or missing tables riding in the same field)
/// contributes one indented block under an error header. Summaries with
/// nothing missing are skipped.
pub fn build_message(title: &str, database: &str, summaries: &[Summary]) -> String {
    if summaries.is_empty() {
        return format!("{title} matches the database schema {database}");
    }

    let details = summaries
        .iter()
        .filter(|s| s.has_missing_columns())
        .map(|s| format!("{}: {}{}", s.entity, TWO_TABS, s.missing_columns.join(TWO_TABS)))
        .collect::<Vec<_>>()
        .join(ONE_TAB);

    format!("{title} - {database} Has some errors: {ONE_TAB}{details}")
}

/// Report schema version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportVersion {
    /// Major version (breaking changes)
    pub major: u32,

    /// Minor version (backward-compatible additions)
    pub minor: u32,
}

impl ReportVersion {
    /// Current report schema version
    pub const CURRENT: ReportVersion = ReportVersion { major: 1, minor: 0 };
}

impl std::fmt::Display for ReportVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Verification report (report.json v1)
///
/// The stable machine-readable output format, for persisting a run's
/// results or shipping them to a build pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Schema version
    pub version: ReportVersion,

    /// Timestamp (ISO 8601)
    pub generated_at: String,

    /// Label of the database the model was verified against
    pub database: String,

    /// Filtered summaries: only entries with something missing
    pub summaries: Vec<Summary>,
}

impl Report {
    /// Create a report from verification summaries.
    pub fn from_summaries(database: impl Into<String>, summaries: Vec<Summary>) -> Self {
        Self {
            version: ReportVersion::CURRENT,
            generated_at: chrono::Utc::now().to_rfc3339(),
            database: database.into(),
            summaries,
        }
    }

    /// Whether the run found no drift at all.
    pub fn is_clean(&self) -> bool {
        self.summaries
            .iter()
            .all(|s| !s.table_missing && !s.has_missing_columns())
    }

    /// Human-readable rendering of this report's summaries.
    pub fn message(&self, title: &str) -> String {
        build_message(title, &self.database, &self.summaries)
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Save to file
    pub fn save_to_file(&self, path: &std::path::Path) -> Result<(), ReportError> {
        let json = self.to_json()?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Report error types
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Serialize error: {0}")]
    SerializeError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
