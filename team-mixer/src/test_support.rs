use crate::model::{Assignment, Employee, Task};
use std::collections::BTreeSet;

pub fn skills(tags: &[&str]) -> BTreeSet<String> {
    tags.iter().map(|t| t.to_string()).collect()
}

pub fn task(task_id: &str, required: &[&str]) -> Task {
    Task {
        task_id: task_id.to_string(),
        required_skills: skills(required),
        priority: 3,
    }
}

pub fn employee(
    employee_id: &str,
    tags: &[&str],
    rating: f64,
    workload: u32,
    available: bool,
) -> Employee {
    Employee {
        employee_id: employee_id.to_string(),
        skills: skills(tags),
        rating,
        workload,
        available,
    }
}

pub fn assignment(task_id: &str, employee_id: &str, success: bool) -> Assignment {
    Assignment {
        task_id: task_id.to_string(),
        employee_id: employee_id.to_string(),
        success,
    }
}
