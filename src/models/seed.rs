//! Initial state for a new dashboard session.

use chrono::NaiveDate;

use crate::models::department::Department;
use crate::models::issue::{Priority, UnassignedIssue};

fn department(
    id: &str,
    name: &str,
    manager: &str,
    employees: u32,
    solved: u32,
    pending: u32,
    description: &str,
) -> Department {
    Department {
        id: id.to_string(),
        name: name.to_string(),
        manager: manager.to_string(),
        employees,
        description: description.to_string(),
        total_issues: solved + pending,
        solved_issues: solved,
        pending_issues: pending,
    }
}

pub fn departments() -> Vec<Department> {
    vec![
        department(
            "dept-001",
            "Sanitation Department",
            "Rajesh Kumar",
            45,
            20,
            8,
            "Waste Management and City Cleanliness",
        ),
        department(
            "dept-002",
            "Water Department",
            "Priya Sharma",
            32,
            22,
            13,
            "Water Supply and Distribution Management",
        ),
        department(
            "dept-003",
            "Electricity Department",
            "Amit Singh",
            28,
            30,
            12,
            "Street Lighting and Electrical Infrastructure",
        ),
        department(
            "dept-004",
            "Public Works Department (PWD)",
            "Sunita Patel",
            65,
            35,
            23,
            "Road Maintenance and Public Infrastructure",
        ),
    ]
}

fn issue(id: &str, title: &str, category: &str, priority: Priority, day: u32) -> UnassignedIssue {
    UnassignedIssue {
        id: id.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        priority,
        created_at: NaiveDate::from_ymd_opt(2024, 1, day).unwrap_or_default(),
    }
}

pub fn unassigned_issues() -> Vec<UnassignedIssue> {
    vec![
        issue("ISS-009", "Broken street light near school", "Street Light", Priority::High, 16),
        issue("ISS-010", "Road cracks developing on Bridge Road", "Road Damage", Priority::Medium, 15),
        issue("ISS-011", "Water leakage from main pipeline", "Water Supply", Priority::High, 14),
        issue("ISS-012", "Stray animals near garbage collection point", "Others", Priority::Low, 13),
    ]
}
