//! Moving an unassigned issue onto a department.
//!
//! Both the issue and the department must resolve before either collection
//! is touched, so a failed assignment never loses an issue or skews counters.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::department::DepartmentRegistry;
use crate::models::issue::{UnassignedIssue, UnassignedPool};

/// The operator's in-progress pick of an issue and a target department.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentSelection {
    #[serde(default)]
    pub issue_id: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
}

impl AssignmentSelection {
    /// Overlay the fields present in `other` on top of this selection.
    pub fn merge(&mut self, other: AssignmentSelection) {
        if other.issue_id.is_some() {
            self.issue_id = other.issue_id;
        }
        if other.department.is_some() {
            self.department = other.department;
        }
    }

    pub fn clear(&mut self) {
        *self = AssignmentSelection::default();
    }

    pub fn is_empty(&self) -> bool {
        self.issue_id.is_none() && self.department.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignError {
    MissingIssue,
    MissingDepartment,
    UnknownIssue(String),
    UnknownDepartment(String),
}

impl fmt::Display for AssignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssignError::MissingIssue => write!(f, "An issue must be selected"),
            AssignError::MissingDepartment => write!(f, "A department must be selected"),
            AssignError::UnknownIssue(id) => write!(f, "Issue '{id}' is not in the unassigned pool"),
            AssignError::UnknownDepartment(name) => write!(f, "No department named '{name}'"),
        }
    }
}

impl std::error::Error for AssignError {}

/// A completed assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pub issue: UnassignedIssue,
    pub department: String,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Validate a selection against the current pools without mutating anything.
/// Returns every unmet precondition.
pub fn validate(
    unassigned: &UnassignedPool,
    registry: &DepartmentRegistry,
    issue_id: Option<&str>,
    department: Option<&str>,
) -> Vec<AssignError> {
    let mut errors = Vec::new();
    match non_empty(issue_id) {
        None => errors.push(AssignError::MissingIssue),
        Some(id) if !unassigned.contains(id) => errors.push(AssignError::UnknownIssue(id.to_string())),
        Some(_) => {}
    }
    match non_empty(department) {
        None => errors.push(AssignError::MissingDepartment),
        Some(name) if !registry.contains_name(name) => {
            errors.push(AssignError::UnknownDepartment(name.to_string()))
        }
        Some(_) => {}
    }
    errors
}

/// Remove `issue_id` from the unassigned pool and count it against `department`.
///
/// On error neither collection changes.
pub fn assign(
    unassigned: &mut UnassignedPool,
    registry: &mut DepartmentRegistry,
    issue_id: Option<&str>,
    department: Option<&str>,
) -> Result<Assignment, Vec<AssignError>> {
    let errors = validate(unassigned, registry, issue_id, department);
    if !errors.is_empty() {
        return Err(errors);
    }
    // validate() guarantees both are present and resolvable
    let (Some(issue_id), Some(department)) = (issue_id, department) else {
        return Err(vec![AssignError::MissingIssue]);
    };

    let Some(issue) = unassigned.take(issue_id) else {
        return Err(vec![AssignError::UnknownIssue(issue_id.to_string())]);
    };
    let counted = registry.record_assignment(department);
    debug_assert!(counted, "department validated above");

    Ok(Assignment {
        issue,
        department: department.to_string(),
    })
}
