use super::types::{Department, RegistryTotals};

/// The fixed set of departments owned by one dashboard session.
#[derive(Debug, Clone, Default)]
pub struct DepartmentRegistry {
    departments: Vec<Department>,
}

impl DepartmentRegistry {
    pub fn new(departments: Vec<Department>) -> Self {
        DepartmentRegistry { departments }
    }

    pub fn all(&self) -> &[Department] {
        &self.departments
    }

    pub fn len(&self) -> usize {
        self.departments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.departments.is_empty()
    }

    /// Exact, case-sensitive lookup by department name.
    pub fn find_by_name(&self, name: &str) -> Option<&Department> {
        self.departments.iter().find(|d| d.name == name)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.find_by_name(name).is_some()
    }

    /// Increment total and pending counters of the named department.
    /// Returns false (and changes nothing) when no department has that name.
    pub(crate) fn record_assignment(&mut self, name: &str) -> bool {
        match self.departments.iter_mut().find(|d| d.name == name) {
            Some(dept) => {
                dept.record_assigned_issue();
                true
            }
            None => false,
        }
    }

    pub fn totals(&self) -> RegistryTotals {
        self.departments.iter().fold(
            RegistryTotals {
                departments: self.departments.len(),
                ..RegistryTotals::default()
            },
            |mut acc, d| {
                acc.employees += d.employees;
                acc.total_issues += d.total_issues;
                acc.solved_issues += d.solved_issues;
                acc.pending_issues += d.pending_issues;
                acc
            },
        )
    }

    /// Departments ranked by solved issues, highest first. Ties keep registry order.
    pub fn ranked_by_solved(&self) -> Vec<&Department> {
        let mut ranked: Vec<&Department> = self.departments.iter().collect();
        ranked.sort_by(|a, b| b.solved_issues.cmp(&a.solved_issues));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dept(name: &str, solved: u32, pending: u32) -> Department {
        Department {
            id: format!("dept-{name}"),
            name: name.to_string(),
            manager: "M".to_string(),
            employees: 10,
            description: String::new(),
            total_issues: solved + pending,
            solved_issues: solved,
            pending_issues: pending,
        }
    }

    #[test]
    fn record_assignment_bumps_total_and_pending() {
        let mut reg = DepartmentRegistry::new(vec![dept("Water", 2, 1), dept("Roads", 0, 0)]);
        assert!(reg.record_assignment("Water"));
        let water = reg.find_by_name("Water").unwrap();
        assert_eq!(water.total_issues, 4);
        assert_eq!(water.pending_issues, 2);
        assert_eq!(water.solved_issues, 2);
        assert!(water.is_consistent());
        assert_eq!(reg.find_by_name("Roads").unwrap().total_issues, 0);
    }

    #[test]
    fn record_assignment_unknown_name_is_noop() {
        let mut reg = DepartmentRegistry::new(vec![dept("Water", 2, 1)]);
        let before = reg.all().to_vec();
        assert!(!reg.record_assignment("water"));
        assert!(!reg.record_assignment(""));
        assert_eq!(reg.all(), before.as_slice());
    }

    #[test]
    fn totals_sum_every_department() {
        let reg = DepartmentRegistry::new(vec![dept("A", 3, 1), dept("B", 5, 2)]);
        let t = reg.totals();
        assert_eq!(t.departments, 2);
        assert_eq!(t.employees, 20);
        assert_eq!(t.total_issues, 11);
        assert_eq!(t.solved_issues, 8);
        assert_eq!(t.pending_issues, 3);
    }

    #[test]
    fn ranking_is_stable_on_ties() {
        let reg = DepartmentRegistry::new(vec![dept("A", 3, 0), dept("B", 9, 0), dept("C", 3, 4)]);
        let names: Vec<&str> = reg.ranked_by_solved().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }
}
