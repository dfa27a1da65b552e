use crate::model::{Employee, Task};
use ranking_pipeline::scored::Scored;
use ranking_pipeline::selector::Selector;

/// Keeps the k best-scored candidates. A k of zero selects nothing.
pub struct TopKScoreSelector {
    k: usize,
}

impl TopKScoreSelector {
    pub fn new(k: usize) -> Self {
        Self { k }
    }
}

impl Selector<Task, Scored<Employee>> for TopKScoreSelector {
    fn score(&self, candidate: &Scored<Employee>) -> f64 {
        candidate.score
    }

    fn size(&self) -> Option<usize> {
        Some(self.k)
    }
}
