use super::types::{LoadState, Report, ReportStatus, StatusCounts, UnassignedIssue};

/// Issues waiting for a department. Each one leaves the pool exactly once.
#[derive(Debug, Clone, Default)]
pub struct UnassignedPool {
    issues: Vec<UnassignedIssue>,
}

impl UnassignedPool {
    pub fn new(issues: Vec<UnassignedIssue>) -> Self {
        UnassignedPool { issues }
    }

    pub fn all(&self) -> &[UnassignedIssue] {
        &self.issues
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&UnassignedIssue> {
        self.issues.iter().find(|i| i.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Remove and return the issue with `id`, preserving the order of the rest.
    pub(crate) fn take(&mut self, id: &str) -> Option<UnassignedIssue> {
        let idx = self.issues.iter().position(|i| i.id == id)?;
        Some(self.issues.remove(idx))
    }
}

/// Outcome of marking a report solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveOutcome {
    Solved,
    AlreadySolved,
}

/// Reports fetched from the remote service for one session.
#[derive(Debug, Clone, Default)]
pub struct ReportPool {
    reports: Vec<Report>,
    load_state: LoadState,
}

impl ReportPool {
    pub fn all(&self) -> &[Report] {
        &self.reports
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub fn find(&self, id: &str) -> Option<&Report> {
        self.reports.iter().find(|r| r.id == id)
    }

    /// Replace the whole pool with a completed load.
    pub fn replace(&mut self, reports: Vec<Report>) {
        self.reports = reports;
        self.load_state = LoadState::Loaded;
    }

    /// Record a failed load. Whatever the pool holds is left untouched.
    pub fn mark_failed(&mut self) {
        self.load_state = LoadState::Failed;
    }

    /// One-way transition to solved. Returns `None` when no report has `id`.
    pub fn mark_solved(&mut self, id: &str) -> Option<SolveOutcome> {
        let report = self.reports.iter_mut().find(|r| r.id == id)?;
        if report.status.is_solved() {
            return Some(SolveOutcome::AlreadySolved);
        }
        report.status = ReportStatus::Solved;
        Some(SolveOutcome::Solved)
    }

    pub fn status_counts(&self) -> StatusCounts {
        let mut counts = StatusCounts {
            total: self.reports.len(),
            ..StatusCounts::default()
        };
        for report in &self.reports {
            match report.status {
                ReportStatus::Pending => counts.pending += 1,
                ReportStatus::InProgress => counts.in_progress += 1,
                ReportStatus::Solved => counts.solved += 1,
                ReportStatus::Critical => counts.critical += 1,
                ReportStatus::Other(_) => {}
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::issue::Priority;
    use chrono::NaiveDate;

    fn report(id: &str, status: ReportStatus) -> Report {
        Report {
            id: id.to_string(),
            title: Some(format!("title {id}")),
            description: None,
            category: None,
            status,
            images: None,
        }
    }

    fn unassigned(id: &str) -> UnassignedIssue {
        UnassignedIssue {
            id: id.to_string(),
            title: format!("issue {id}"),
            category: "Others".to_string(),
            priority: Priority::Low,
            created_at: NaiveDate::from_ymd_opt(2024, 1, 13).unwrap(),
        }
    }

    #[test]
    fn take_removes_once_and_keeps_order() {
        let mut pool = UnassignedPool::new(vec![unassigned("a"), unassigned("b"), unassigned("c")]);
        assert_eq!(pool.take("b").map(|i| i.id), Some("b".to_string()));
        assert!(pool.take("b").is_none());
        let ids: Vec<&str> = pool.all().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn mark_solved_is_idempotent() {
        let mut pool = ReportPool::default();
        pool.replace(vec![report("1", ReportStatus::Pending), report("2", ReportStatus::Solved)]);

        assert_eq!(pool.mark_solved("1"), Some(SolveOutcome::Solved));
        let after_first = pool.all().to_vec();
        assert_eq!(pool.mark_solved("1"), Some(SolveOutcome::AlreadySolved));
        assert_eq!(pool.all(), after_first.as_slice());

        assert_eq!(pool.mark_solved("2"), Some(SolveOutcome::AlreadySolved));
        assert_eq!(pool.mark_solved("missing"), None);
    }

    #[test]
    fn mark_solved_accepts_unknown_status() {
        let mut pool = ReportPool::default();
        pool.replace(vec![report("1", ReportStatus::Other("on-hold".into()))]);
        assert_eq!(pool.mark_solved("1"), Some(SolveOutcome::Solved));
        assert!(pool.find("1").unwrap().status.is_solved());
    }

    #[test]
    fn failed_load_keeps_pool() {
        let mut pool = ReportPool::default();
        assert_eq!(pool.load_state(), LoadState::Loading);
        pool.mark_failed();
        assert_eq!(pool.load_state(), LoadState::Failed);
        assert!(pool.is_empty());
    }

    #[test]
    fn status_counts_cover_whole_pool() {
        let mut pool = ReportPool::default();
        pool.replace(vec![
            report("1", ReportStatus::Pending),
            report("2", ReportStatus::Solved),
            report("3", ReportStatus::Solved),
            report("4", ReportStatus::InProgress),
            report("5", ReportStatus::Critical),
            report("6", ReportStatus::Other("weird".into())),
        ]);
        let c = pool.status_counts();
        assert_eq!(c.total, 6);
        assert_eq!(c.pending, 1);
        assert_eq!(c.solved, 2);
        assert_eq!(c.in_progress, 1);
        assert_eq!(c.critical, 1);
    }
}
