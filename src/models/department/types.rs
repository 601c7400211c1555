use serde::{Deserialize, Serialize};

/// Aggregate record for one civic department.
///
/// Departments never hold issue identifiers, only counters. The counters
/// always satisfy `total_issues == solved_issues + pending_issues`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: String,
    /// Unique; assignment looks departments up by exact name.
    pub name: String,
    pub manager: String,
    pub employees: u32,
    pub description: String,
    pub total_issues: u32,
    pub solved_issues: u32,
    pub pending_issues: u32,
}

impl Department {
    pub fn is_consistent(&self) -> bool {
        self.total_issues == self.solved_issues + self.pending_issues
    }

    pub fn efficiency(&self) -> u32 {
        super::efficiency(self.solved_issues, self.total_issues)
    }

    /// Count one newly assigned issue against this department.
    pub(crate) fn record_assigned_issue(&mut self) {
        self.total_issues += 1;
        self.pending_issues += 1;
    }
}

/// Display band for a department's efficiency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EfficiencyTier {
    Excellent,
    Good,
    NeedsAttention,
}

impl EfficiencyTier {
    pub fn from_efficiency(pct: u32) -> Self {
        match pct {
            70.. => EfficiencyTier::Excellent,
            50..=69 => EfficiencyTier::Good,
            _ => EfficiencyTier::NeedsAttention,
        }
    }
}

/// Registry-wide totals for the departments page header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegistryTotals {
    pub departments: usize,
    pub employees: u32,
    pub total_issues: u32,
    pub solved_issues: u32,
    pub pending_issues: u32,
}
