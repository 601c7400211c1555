use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

/// A locally seeded issue that no department has picked up yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnassignedIssue {
    pub id: String,
    pub title: String,
    pub category: String,
    pub priority: Priority,
    pub created_at: NaiveDate,
}

/// Lifecycle status of a fetched report.
///
/// Unknown strings from the reports service are kept verbatim in `Other`
/// so they round-trip and never match a specific status filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum ReportStatus {
    Pending,
    InProgress,
    Solved,
    Critical,
    Other(String),
}

impl ReportStatus {
    /// The four statuses the dashboard knows about, in display order.
    pub const KNOWN: [ReportStatus; 4] = [
        ReportStatus::Pending,
        ReportStatus::InProgress,
        ReportStatus::Solved,
        ReportStatus::Critical,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            ReportStatus::Pending => "pending",
            ReportStatus::InProgress => "in-progress",
            ReportStatus::Solved => "solved",
            ReportStatus::Critical => "critical",
            ReportStatus::Other(raw) => raw,
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, ReportStatus::Solved)
    }
}

impl Default for ReportStatus {
    fn default() -> Self {
        ReportStatus::Other(String::new())
    }
}

impl From<String> for ReportStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "pending" => ReportStatus::Pending,
            "in-progress" => ReportStatus::InProgress,
            "solved" => ReportStatus::Solved,
            "critical" => ReportStatus::Critical,
            _ => ReportStatus::Other(raw),
        }
    }
}

impl From<Option<String>> for ReportStatus {
    fn from(raw: Option<String>) -> Self {
        raw.map(ReportStatus::from).unwrap_or_default()
    }
}

impl From<ReportStatus> for String {
    fn from(status: ReportStatus) -> Self {
        match status {
            ReportStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A report loaded from the remote reports service.
///
/// Text fields are optional on the wire; absence is treated as empty,
/// never as an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: ReportStatus,
    #[serde(default)]
    pub images: Option<Vec<String>>,
}

/// Per-status tallies over the whole fetched pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub solved: usize,
    pub critical: usize,
}

/// Progress of the one-shot reports load for a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadState {
    #[default]
    Loading,
    Loaded,
    Failed,
}
