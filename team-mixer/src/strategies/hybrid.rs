use crate::matching::{matched_skill_count, skill_match_ratio};
use crate::model::{Employee, Task};
use crate::params;
use crate::util::round3;
use ranking_pipeline::scored::{sort_by_score_desc, Scored};
use ranking_pipeline::strategy::RankingStrategy;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("hybrid weight `{name}` must be non-negative, got {value}")]
pub struct NegativeWeightError {
    pub name: &'static str,
    pub value: f64,
}

/// Weights for the four hybrid score components. Non-negative by
/// construction; the defaults sum to 1.0 but the sum is not enforced.
#[derive(Clone, Copy, Debug)]
pub struct HybridWeights {
    pub skill: f64,
    pub rating: f64,
    pub workload: f64,
    pub availability: f64,
}

impl Default for HybridWeights {
    fn default() -> Self {
        Self {
            skill: params::SKILL_WEIGHT,
            rating: params::RATING_WEIGHT,
            workload: params::WORKLOAD_WEIGHT,
            availability: params::AVAILABILITY_WEIGHT,
        }
    }
}

impl HybridWeights {
    pub fn new(
        skill: f64,
        rating: f64,
        workload: f64,
        availability: f64,
    ) -> Result<Self, NegativeWeightError> {
        for (name, value) in [
            ("skill", skill),
            ("rating", rating),
            ("workload", workload),
            ("availability", availability),
        ] {
            if !(value >= 0.0) {
                return Err(NegativeWeightError { name, value });
            }
        }
        Ok(Self {
            skill,
            rating,
            workload,
            availability,
        })
    }
}

/// Weighted sum over four normalized components: skill match ratio,
/// rating, workload headroom and availability. Emits a per-component
/// breakdown so every score can be explained. Nothing is filtered.
#[derive(Default)]
pub struct HybridWeightedStrategy {
    weights: HybridWeights,
}

impl HybridWeightedStrategy {
    pub fn new(weights: HybridWeights) -> Self {
        Self { weights }
    }
}

impl RankingStrategy<Task, Employee> for HybridWeightedStrategy {
    fn rank(&self, task: &Task, employees: &[Employee]) -> Vec<Scored<Employee>> {
        let required = &task.required_skills;
        let w = &self.weights;

        let mut ranked: Vec<Scored<Employee>> = employees
            .iter()
            .map(|emp| {
                // Components normalized into [0, 1].
                let skill = skill_match_ratio(required, &emp.skills);
                let rating = emp.rating / params::MAX_RATING;
                let workload =
                    (1.0 - f64::from(emp.workload) / params::WORKLOAD_CAPACITY).max(0.0);
                let availability = if emp.available { 1.0 } else { 0.0 };

                let score = w.skill * skill
                    + w.rating * rating
                    + w.workload * workload
                    + w.availability * availability;

                let matched = matched_skill_count(required, &emp.skills);
                let reasons = vec![
                    format!(
                        "Skill match {}/{} (ratio={:.2})",
                        matched,
                        required.len(),
                        skill
                    ),
                    format!("Rating {:.1}/5", emp.rating),
                    format!("Workload {}", emp.workload),
                    if emp.available { "Available" } else { "Not available" }.to_string(),
                ];

                let breakdown: BTreeMap<String, f64> = [
                    ("skill", w.skill * skill),
                    ("rating", w.rating * rating),
                    ("workload", w.workload * workload),
                    ("availability", w.availability * availability),
                ]
                .into_iter()
                .map(|(name, contribution)| (name.to_string(), round3(contribution)))
                .collect();

                Scored::new(emp.clone(), round3(score), reasons).with_breakdown(breakdown)
            })
            .collect();

        sort_by_score_desc(&mut ranked);
        ranked
    }
}
