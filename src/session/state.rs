use std::time::Instant;

use crate::models::assignment::{self, AssignError, Assignment, AssignmentSelection};
use crate::models::dashboard::{self, DashboardSummary, DepartmentOverview, Scoreboard};
use crate::models::department::{DepartmentRegistry, RegistryTotals};
use crate::models::issue::{
    IssueFilter, LoadState, Report, ReportPool, SolveOutcome, StatusCounts, StatusFilter,
    UnassignedIssue, UnassignedPool,
};
use crate::models::seed;

/// Everything one operator session owns. Nothing here is shared across sessions.
#[derive(Debug, Clone)]
pub struct DashboardSession {
    pub departments: DepartmentRegistry,
    pub unassigned: UnassignedPool,
    pub reports: ReportPool,
    pub filter: IssueFilter,
    pub selection: AssignmentSelection,
    last_seen: Instant,
}

/// The filtered issues page: visible reports plus whole-pool context.
#[derive(Debug, Clone, serde::Serialize)]
pub struct IssueView {
    pub load_state: LoadState,
    pub filter: IssueFilter,
    pub counts: StatusCounts,
    pub issues: Vec<Report>,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct DepartmentsView {
    pub totals: RegistryTotals,
    pub departments: Vec<DepartmentOverview>,
    pub unassigned: Vec<UnassignedIssue>,
    pub selection: AssignmentSelection,
}

impl DashboardSession {
    /// A fresh session with the seeded departments and unassigned issues.
    /// The report pool starts empty and loading.
    pub fn seeded() -> Self {
        DashboardSession {
            departments: DepartmentRegistry::new(seed::departments()),
            unassigned: UnassignedPool::new(seed::unassigned_issues()),
            reports: ReportPool::default(),
            filter: IssueFilter::default(),
            selection: AssignmentSelection::default(),
            last_seen: Instant::now(),
        }
    }

    pub fn touch(&mut self) {
        self.touch_at(Instant::now());
    }

    pub(crate) fn touch_at(&mut self, now: Instant) {
        self.last_seen = now;
    }

    pub fn last_seen(&self) -> Instant {
        self.last_seen
    }

    // ---------- Issues ----------

    pub fn issue_view(&self) -> IssueView {
        IssueView {
            load_state: self.reports.load_state(),
            filter: self.filter.clone(),
            counts: self.reports.status_counts(),
            issues: self.filter.apply(self.reports.all()).into_iter().cloned().collect(),
        }
    }

    /// Update the status and/or search predicate. Fields left `None` keep their value.
    /// Returns an error message for an unknown status and leaves the filter unchanged.
    pub fn set_filter(&mut self, status: Option<&str>, search: Option<String>) -> Result<(), String> {
        let status = status
            .map(|raw| StatusFilter::parse(raw).ok_or_else(|| format!("Unknown status filter '{raw}'")))
            .transpose()?;
        if let Some(status) = status {
            self.filter.status = status;
        }
        if let Some(search) = search {
            self.filter.search = search;
        }
        Ok(())
    }

    pub fn mark_solved(&mut self, report_id: &str) -> Option<SolveOutcome> {
        self.reports.mark_solved(report_id)
    }

    /// Apply the result of the one-shot reports load.
    pub fn apply_load(&mut self, result: Option<Vec<Report>>) {
        match result {
            Some(reports) => self.reports.replace(reports),
            None => self.reports.mark_failed(),
        }
    }

    // ---------- Departments ----------

    pub fn departments_view(&self) -> DepartmentsView {
        DepartmentsView {
            totals: self.departments.totals(),
            departments: dashboard::overview(&self.departments),
            unassigned: self.unassigned.all().to_vec(),
            selection: self.selection.clone(),
        }
    }

    pub fn select(&mut self, update: AssignmentSelection) {
        self.selection.merge(update);
    }

    /// Commit the current selection, overlaid with `overrides`.
    ///
    /// On success the selection is cleared. On failure nothing changes,
    /// including the stored selection.
    pub fn commit_assignment(
        &mut self,
        overrides: AssignmentSelection,
    ) -> Result<Assignment, Vec<AssignError>> {
        let mut selection = self.selection.clone();
        selection.merge(overrides);

        let done = assignment::assign(
            &mut self.unassigned,
            &mut self.departments,
            selection.issue_id.as_deref(),
            selection.department.as_deref(),
        )?;
        self.selection.clear();
        Ok(done)
    }

    // ---------- Overview ----------

    pub fn summary(&self) -> DashboardSummary {
        dashboard::summary(&self.departments, &self.reports, self.unassigned.len())
    }

    pub fn scoreboard(&self) -> Scoreboard {
        dashboard::scoreboard(&self.departments)
    }
}
