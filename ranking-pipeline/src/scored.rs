use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// A candidate together with its score and the explanation for it.
///
/// Scores are strategy-specific and not comparable across strategies.
/// `breakdown` maps a component name to its weighted contribution and is
/// only populated by strategies that decompose their score.
#[derive(Clone, Debug, Serialize)]
pub struct Scored<C> {
    pub candidate: C,
    pub score: f64,
    pub reasons: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<BTreeMap<String, f64>>,
}

impl<C> Scored<C> {
    pub fn new(candidate: C, score: f64, reasons: Vec<String>) -> Self {
        Self {
            candidate,
            score,
            reasons,
            breakdown: None,
        }
    }

    pub fn with_breakdown(mut self, breakdown: BTreeMap<String, f64>) -> Self {
        self.breakdown = Some(breakdown);
        self
    }
}

/// Sort best-first. The sort is stable, so candidates with equal scores
/// keep their input order.
pub fn sort_by_score_desc<C>(ranked: &mut [Scored<C>]) {
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(id: &'static str, score: f64) -> Scored<&'static str> {
        Scored::new(id, score, vec![])
    }

    #[test]
    fn sorts_descending() {
        let mut ranked = vec![scored("a", 0.2), scored("b", 0.9), scored("c", 0.5)];
        sort_by_score_desc(&mut ranked);
        let order: Vec<_> = ranked.iter().map(|s| s.candidate).collect();
        assert_eq!(order, vec!["b", "c", "a"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let mut ranked = vec![
            scored("first", 0.5),
            scored("second", 0.5),
            scored("third", 0.5),
        ];
        sort_by_score_desc(&mut ranked);
        let order: Vec<_> = ranked.iter().map(|s| s.candidate).collect();
        assert_eq!(order, vec!["first", "second", "third"]);
    }
}
