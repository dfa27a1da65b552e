//! Tuning constants shared by the strategies, the evaluation harness and
//! the synthetic data generator.

/// Number of candidates selected per task and the fixed denominator of
/// precision@k.
pub const TOP_K_CANDIDATES_TO_SELECT: usize = 3;

/// Upper end of the employee rating scale.
pub const MAX_RATING: f64 = 5.0;

/// Implicit weekly capacity ceiling in hours. Workload at or above this
/// contributes nothing to availability-style components.
pub const WORKLOAD_CAPACITY: f64 = 40.0;

// Hybrid strategy default weights. They sum to 1.0 but that is not
// enforced anywhere.
pub const SKILL_WEIGHT: f64 = 0.45;
pub const RATING_WEIGHT: f64 = 0.25;
pub const WORKLOAD_WEIGHT: f64 = 0.20;
pub const AVAILABILITY_WEIGHT: f64 = 0.10;

// Rule-based strategy score terms.
pub const RULE_MATCH_WEIGHT: f64 = 1.0;
pub const RULE_RATING_WEIGHT: f64 = 0.5;
pub const RULE_SLACK_WEIGHT: f64 = 0.05;

// Synthetic data generation.
pub const SKILL_POOL: [&str; 6] = ["python", "ml", "data", "backend", "sql", "frontend"];
pub const SKILLS_PER_TASK: usize = 2;
pub const SKILLS_PER_EMPLOYEE: usize = 3;
pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_TASK_COUNT: usize = 8;
pub const DEFAULT_EMPLOYEE_COUNT: usize = 12;
pub const DEFAULT_ASSIGNMENTS_PER_TASK: usize = 6;
