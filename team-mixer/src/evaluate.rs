use crate::model::{Assignment, Employee, EvaluationResult, Task};
use crate::selectors::TopKScoreSelector;
use log::{debug, info};
use ranking_pipeline::selector::Selector;
use ranking_pipeline::strategy::RankingStrategy;
use std::collections::BTreeSet;

/// Compares a strategy's top-k recommendations against historically
/// successful assignments and aggregates precision@k / recall@k.
pub struct EvaluationHarness {
    k: usize,
}

/// Employee ids with a successful past assignment for the task.
fn relevant_employees(assignments: &[Assignment], task_id: &str) -> BTreeSet<String> {
    assignments
        .iter()
        .filter(|a| a.task_id == task_id && a.success)
        .map(|a| a.employee_id.clone())
        .collect()
}

/// precision@k over the fixed denominator k (a short recommendation list
/// is penalized, not rescaled) and recall@k over the relevant set size.
/// Both fall back to 0.0 instead of dividing by zero.
pub fn precision_recall_at_k(
    recommended: &[String],
    relevant: &BTreeSet<String>,
    k: usize,
) -> (f64, f64) {
    let top_k = &recommended[..recommended.len().min(k)];
    let tp = top_k.iter().filter(|id| relevant.contains(*id)).count();

    let precision = if k == 0 { 0.0 } else { tp as f64 / k as f64 };
    let recall = if relevant.is_empty() {
        0.0
    } else {
        tp as f64 / relevant.len() as f64
    };
    (precision, recall)
}

impl EvaluationHarness {
    pub fn new(k: usize) -> Self {
        Self { k }
    }

    /// Evaluate one strategy across all tasks that have ground truth.
    /// Tasks without a successful assignment are skipped, not counted as
    /// zero. With no qualifying task at all, both means are 0.0.
    pub fn evaluate(
        &self,
        strategy: &dyn RankingStrategy<Task, Employee>,
        tasks: &[Task],
        employees: &[Employee],
        assignments: &[Assignment],
    ) -> EvaluationResult {
        let selector = TopKScoreSelector::new(self.k);
        let mut precisions = Vec::new();
        let mut recalls = Vec::new();

        for task in tasks {
            let relevant = relevant_employees(assignments, &task.task_id);
            if relevant.is_empty() {
                debug!(
                    "task_id={} component={} skipped: no successful assignments",
                    task.task_id,
                    strategy.name()
                );
                continue;
            }

            let ranked = strategy.rank(task, employees);
            let recommended: Vec<String> = selector
                .select(task, ranked)
                .into_iter()
                .map(|s| s.candidate.employee_id)
                .collect();

            let (precision, recall) = precision_recall_at_k(&recommended, &relevant, self.k);
            precisions.push(precision);
            recalls.push(recall);
        }

        let mean = |values: &[f64]| {
            if values.is_empty() {
                0.0
            } else {
                values.iter().sum::<f64>() / values.len() as f64
            }
        };
        let result = EvaluationResult {
            strategy: strategy.name().to_string(),
            precision_at_k: mean(&precisions),
            recall_at_k: mean(&recalls),
        };
        info!(
            "strategy={} tasks_evaluated={} precision_at_{}={:.3} recall_at_{}={:.3}",
            result.strategy,
            precisions.len(),
            self.k,
            result.precision_at_k,
            self.k,
            result.recall_at_k
        );
        result
    }

    /// Evaluate every strategy over the same snapshot.
    pub fn evaluate_all(
        &self,
        strategies: &[Box<dyn RankingStrategy<Task, Employee>>],
        tasks: &[Task],
        employees: &[Employee],
        assignments: &[Assignment],
    ) -> Vec<EvaluationResult> {
        strategies
            .iter()
            .map(|strategy| self.evaluate(strategy.as_ref(), tasks, employees, assignments))
            .collect()
    }
}
