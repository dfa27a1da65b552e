mod hybrid;
mod rule_based;
mod skill_only;

pub use hybrid::{HybridWeightedStrategy, HybridWeights, NegativeWeightError};
pub use rule_based::RuleBasedStrategy;
pub use skill_only::SkillOnlyStrategy;

use crate::model::{Employee, Task};
use ranking_pipeline::strategy::RankingStrategy;

/// All strategies, in the order result tables report them.
pub fn all_strategies() -> Vec<Box<dyn RankingStrategy<Task, Employee>>> {
    vec![
        Box::new(SkillOnlyStrategy),
        Box::new(HybridWeightedStrategy::default()),
        Box::new(RuleBasedStrategy),
    ]
}
