use crate::util;
use std::any::type_name_of_val;
use std::cmp::Ordering;

/// Selectors order candidates by a score they extract and truncate to a
/// configured size. The sort is stable, so equal scores keep input order.
pub trait Selector<Q, C>: Send + Sync
where
    Q: Clone + Send + Sync + 'static,
    C: Clone + Send + Sync + 'static,
{
    /// Decide if this selector should run for the given query.
    fn enable(&self, _query: &Q) -> bool {
        true
    }

    /// Extract the score used for ordering.
    fn score(&self, candidate: &C) -> f64;

    /// Number of candidates to keep. `None` means no truncation. A size
    /// of zero selects nothing, which is valid rather than an error.
    fn size(&self) -> Option<usize> {
        None
    }

    /// Sort descending by score, then truncate to `size()`. Returns fewer
    /// candidates than the requested size if the input is shorter.
    fn select(&self, _query: &Q, candidates: Vec<C>) -> Vec<C> {
        let mut selected = candidates;
        selected.sort_by(|a, b| {
            self.score(b)
                .partial_cmp(&self.score(a))
                .unwrap_or(Ordering::Equal)
        });
        if let Some(limit) = self.size() {
            selected.truncate(limit);
        }
        selected
    }

    /// Returns a stable name for logging/metrics.
    fn name(&self) -> &'static str {
        util::short_type_name(type_name_of_val(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TakeTwo;

    impl Selector<(), f64> for TakeTwo {
        fn score(&self, candidate: &f64) -> f64 {
            *candidate
        }

        fn size(&self) -> Option<usize> {
            Some(2)
        }
    }

    #[test]
    fn selects_top_by_score() {
        let selected = TakeTwo.select(&(), vec![0.1, 0.9, 0.5, 0.7]);
        assert_eq!(selected, vec![0.9, 0.7]);
    }

    #[test]
    fn short_input_returns_everything() {
        let selected = TakeTwo.select(&(), vec![0.3]);
        assert_eq!(selected, vec![0.3]);
    }

    struct TakeNone;

    impl Selector<(), f64> for TakeNone {
        fn score(&self, candidate: &f64) -> f64 {
            *candidate
        }

        fn size(&self) -> Option<usize> {
            Some(0)
        }
    }

    #[test]
    fn zero_size_selects_nothing() {
        assert!(TakeNone.select(&(), vec![0.3, 0.8]).is_empty());
    }
}
