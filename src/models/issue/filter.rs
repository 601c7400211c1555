use serde::{Serialize, Serializer};

use super::types::{Report, ReportStatus};

/// Sentinel accepted in place of a status to disable status filtering.
pub const ALL_STATUSES: &str = "all";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ReportStatus),
}

impl StatusFilter {
    /// Parse `"all"` or one of the known status names. Anything else is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw == ALL_STATUSES {
            return Some(StatusFilter::All);
        }
        let status = ReportStatus::from(raw.to_string());
        ReportStatus::KNOWN
            .contains(&status)
            .then_some(StatusFilter::Only(status))
    }

    pub fn as_str(&self) -> &str {
        match self {
            StatusFilter::All => ALL_STATUSES,
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    pub fn matches(&self, status: &ReportStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(ReportStatus::Other(_)) => false,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }
}

impl Serialize for StatusFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// The operator's current status + text filter over fetched reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IssueFilter {
    pub status: StatusFilter,
    pub search: String,
}

impl IssueFilter {
    pub fn matches(&self, report: &Report) -> bool {
        self.status.matches(&report.status) && self.matches_search(report)
    }

    fn matches_search(&self, report: &Report) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        let contains = |field: &Option<String>| {
            field
                .as_deref()
                .is_some_and(|text| text.to_lowercase().contains(&needle))
        };
        contains(&report.title) || contains(&report.description)
    }

    /// Recompute the visible subsequence of `reports`, preserving source order.
    pub fn apply<'a>(&self, reports: &'a [Report]) -> Vec<&'a Report> {
        reports.iter().filter(|r| self.matches(r)).collect()
    }
}
