use crate::matching::matched_skill_count;
use crate::model::{Employee, Task};
use crate::params;
use crate::util::round3;
use log::debug;
use ranking_pipeline::scored::{sort_by_score_desc, Scored};
use ranking_pipeline::strategy::RankingStrategy;

/// Interpretable heuristic with hard eligibility gates: unavailable
/// employees and employees with no matching skill are dropped before
/// scoring, so the output may be shorter than requested or empty.
pub struct RuleBasedStrategy;

impl RuleBasedStrategy {
    fn is_eligible(task: &Task, emp: &Employee) -> bool {
        emp.available && matched_skill_count(&task.required_skills, &emp.skills) > 0
    }
}

impl RankingStrategy<Task, Employee> for RuleBasedStrategy {
    fn rank(&self, task: &Task, employees: &[Employee]) -> Vec<Scored<Employee>> {
        let required = &task.required_skills;
        let (eligible, removed): (Vec<&Employee>, Vec<&Employee>) = employees
            .iter()
            .partition(|emp| Self::is_eligible(task, emp));
        if !removed.is_empty() {
            debug!(
                "task_id={} component={} removed {} ineligible candidates",
                task.task_id,
                self.name(),
                removed.len()
            );
        }

        let mut ranked: Vec<Scored<Employee>> = eligible
            .into_iter()
            .map(|emp| {
                let matched = matched_skill_count(required, &emp.skills);
                let slack = (params::WORKLOAD_CAPACITY - f64::from(emp.workload)).max(0.0);
                let score = matched as f64 * params::RULE_MATCH_WEIGHT
                    + emp.rating * params::RULE_RATING_WEIGHT
                    + slack * params::RULE_SLACK_WEIGHT;

                let reasons = vec![
                    "Rule: Available".to_string(),
                    format!("Rule: Matched {}/{} required skills", matched, required.len()),
                    format!("Rule: Workload={}", emp.workload),
                    format!("Rule: Rating={:.1}/5", emp.rating),
                ];

                Scored::new(emp.clone(), round3(score), reasons)
            })
            .collect();

        sort_by_score_desc(&mut ranked);
        ranked
    }
}
