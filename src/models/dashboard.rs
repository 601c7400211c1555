use serde::Serialize;

use crate::models::department::{efficiency, Department, DepartmentRegistry, EfficiencyTier, RegistryTotals};
use crate::models::issue::{ReportPool, StatusCounts};

// ---------- Types ----------

/// Share of fetched reports in one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryShare {
    pub category: String,
    pub count: usize,
    pub percent: u32,
}

/// Headline numbers for the landing page.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub total_issues: u32,
    pub solved_issues: u32,
    pub pending_issues: u32,
    pub resolution_rate: u32,
    pub unassigned_issues: usize,
    pub reports: StatusCounts,
    pub categories: Vec<CategoryShare>,
    pub departments: Vec<DepartmentOverview>,
}

/// A department with its derived efficiency figures.
#[derive(Debug, Clone, Serialize)]
pub struct DepartmentOverview {
    #[serde(flatten)]
    pub department: Department,
    pub efficiency: u32,
    pub tier: EfficiencyTier,
}

impl From<&Department> for DepartmentOverview {
    fn from(d: &Department) -> Self {
        let efficiency = d.efficiency();
        DepartmentOverview {
            department: d.clone(),
            efficiency,
            tier: EfficiencyTier::from_efficiency(efficiency),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreboardEntry {
    pub rank: usize,
    #[serde(flatten)]
    pub overview: DepartmentOverview,
}

#[derive(Debug, Clone, Serialize)]
pub struct Scoreboard {
    pub totals: RegistryTotals,
    pub entries: Vec<ScoreboardEntry>,
}

// ---------- Builders ----------

/// Fetched reports grouped by category, in first-seen order.
/// Reports without a category are grouped under "Uncategorized".
pub fn category_breakdown(reports: &ReportPool) -> Vec<CategoryShare> {
    let mut shares: Vec<CategoryShare> = Vec::new();
    for report in reports.all() {
        let category = report
            .category
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or("Uncategorized");
        match shares.iter_mut().find(|s| s.category == category) {
            Some(share) => share.count += 1,
            None => shares.push(CategoryShare {
                category: category.to_string(),
                count: 1,
                percent: 0,
            }),
        }
    }
    let total = u32::try_from(reports.len()).unwrap_or(u32::MAX);
    for share in &mut shares {
        let count = u32::try_from(share.count).unwrap_or(u32::MAX);
        share.percent = efficiency(count, total);
    }
    shares
}

pub fn overview(registry: &DepartmentRegistry) -> Vec<DepartmentOverview> {
    registry.all().iter().map(DepartmentOverview::from).collect()
}

pub fn summary(
    registry: &DepartmentRegistry,
    reports: &ReportPool,
    unassigned_issues: usize,
) -> DashboardSummary {
    let totals = registry.totals();
    DashboardSummary {
        total_issues: totals.total_issues,
        solved_issues: totals.solved_issues,
        pending_issues: totals.pending_issues,
        resolution_rate: efficiency(totals.solved_issues, totals.solved_issues + totals.pending_issues),
        unassigned_issues,
        reports: reports.status_counts(),
        categories: category_breakdown(reports),
        departments: overview(registry),
    }
}

pub fn scoreboard(registry: &DepartmentRegistry) -> Scoreboard {
    let entries = registry
        .ranked_by_solved()
        .into_iter()
        .enumerate()
        .map(|(idx, d)| ScoreboardEntry {
            rank: idx + 1,
            overview: DepartmentOverview::from(d),
        })
        .collect();
    Scoreboard {
        totals: registry.totals(),
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::issue::{Report, ReportStatus};
    use crate::models::seed;

    fn report(id: &str, category: Option<&str>) -> Report {
        Report {
            id: id.to_string(),
            title: None,
            description: None,
            category: category.map(String::from),
            status: ReportStatus::Pending,
            images: None,
        }
    }

    #[test]
    fn categories_in_first_seen_order_with_percentages() {
        let mut pool = ReportPool::default();
        pool.replace(vec![
            report("1", Some("Garbage")),
            report("2", Some("Water Supply")),
            report("3", Some("Garbage")),
            report("4", None),
        ]);
        let shares = category_breakdown(&pool);
        let names: Vec<&str> = shares.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(names, vec!["Garbage", "Water Supply", "Uncategorized"]);
        assert_eq!(shares[0].count, 2);
        assert_eq!(shares[0].percent, 50);
        assert_eq!(shares[1].percent, 25);
    }

    #[test]
    fn empty_pool_has_no_categories() {
        assert!(category_breakdown(&ReportPool::default()).is_empty());
    }

    #[test]
    fn summary_over_seed_data() {
        let reg = DepartmentRegistry::new(seed::departments());
        let s = summary(&reg, &ReportPool::default(), 4);
        assert_eq!(s.total_issues, 163);
        assert_eq!(s.solved_issues, 107);
        assert_eq!(s.pending_issues, 56);
        assert_eq!(s.resolution_rate, 66);
        assert_eq!(s.unassigned_issues, 4);
        assert_eq!(s.departments.len(), 4);
    }

    #[test]
    fn scoreboard_ranks_by_solved() {
        let reg = DepartmentRegistry::new(seed::departments());
        let board = scoreboard(&reg);
        let ranked: Vec<(usize, &str)> = board
            .entries
            .iter()
            .map(|e| (e.rank, e.overview.department.name.as_str()))
            .collect();
        assert_eq!(
            ranked,
            vec![
                (1, "Public Works Department (PWD)"),
                (2, "Electricity Department"),
                (3, "Water Department"),
                (4, "Sanitation Department"),
            ]
        );
        assert_eq!(board.entries[1].overview.efficiency, 71);
        assert_eq!(board.entries[1].overview.tier, EfficiencyTier::Excellent);
        assert_eq!(board.entries[0].overview.tier, EfficiencyTier::Good);
    }
}
