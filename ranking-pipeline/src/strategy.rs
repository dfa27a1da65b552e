use crate::scored::Scored;
use crate::util;
use std::any::type_name_of_val;

/// A ranking strategy scores every eligible candidate for a query and
/// returns them ordered best-first.
///
/// IMPORTANT: the returned order must be deterministic for identical
/// inputs. Candidates with equal scores must keep their input order
/// (use a stable sort). Strategies may drop ineligible candidates, so
/// the output can be shorter than the input.
pub trait RankingStrategy<Q, C>: Send + Sync
where
    Q: Clone + Send + Sync + 'static,
    C: Clone + Send + Sync + 'static,
{
    /// Decide if this strategy should run for the given query.
    fn enable(&self, _query: &Q) -> bool {
        true
    }

    /// Score and order candidates for the query.
    fn rank(&self, query: &Q, candidates: &[C]) -> Vec<Scored<C>>;

    /// Returns a stable name for logging/metrics and result tables.
    fn name(&self) -> &'static str {
        util::short_type_name(type_name_of_val(self))
    }
}
