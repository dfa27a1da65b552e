use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A unit of work to staff. `priority` is carried through for future
/// scheduling use; no current strategy reads it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Task {
    pub task_id: String,
    pub required_skills: BTreeSet<String>,
    pub priority: u8,
}

/// A candidate for assignment. `rating` lives on a 0..=5 scale and
/// `workload` is hours against the 40-hour capacity ceiling.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Employee {
    pub employee_id: String,
    pub skills: BTreeSet<String>,
    pub rating: f64,
    pub workload: u32,
    pub available: bool,
}

/// Historical record of a past task-employee pairing and whether it
/// worked out. Only consumed by the evaluation harness.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Assignment {
    pub task_id: String,
    pub employee_id: String,
    pub success: bool,
}

/// Aggregate ranking quality of one strategy: mean precision@k and mean
/// recall@k across all tasks that had ground truth.
#[derive(Clone, Debug, Serialize)]
pub struct EvaluationResult {
    pub strategy: String,
    pub precision_at_k: f64,
    pub recall_at_k: f64,
}
