use crate::matching::{matched_skill_count, skill_match_ratio};
use crate::model::{Employee, Task};
use crate::util::round3;
use ranking_pipeline::scored::{sort_by_score_desc, Scored};
use ranking_pipeline::strategy::RankingStrategy;

/// Baseline that ranks purely on the fraction of required skills a
/// candidate covers. Every employee is scored; nothing is filtered.
pub struct SkillOnlyStrategy;

impl RankingStrategy<Task, Employee> for SkillOnlyStrategy {
    fn rank(&self, task: &Task, employees: &[Employee]) -> Vec<Scored<Employee>> {
        let required = &task.required_skills;
        let mut ranked: Vec<Scored<Employee>> = employees
            .iter()
            .map(|emp| {
                let matched = matched_skill_count(required, &emp.skills);
                let ratio = skill_match_ratio(required, &emp.skills);
                Scored::new(
                    emp.clone(),
                    round3(ratio),
                    vec![format!(
                        "Matched {}/{} skills (skill-only baseline)",
                        matched,
                        required.len()
                    )],
                )
            })
            .collect();

        sort_by_score_desc(&mut ranked);
        ranked
    }
}
