use std::collections::BTreeSet;

/// Number of required skills the candidate possesses.
pub fn matched_skill_count(required: &BTreeSet<String>, possessed: &BTreeSet<String>) -> usize {
    required.intersection(possessed).count()
}

/// Fraction of `required` covered by `possessed`, in [0, 1].
///
/// An empty required set scores 0.0 rather than dividing by zero.
pub fn skill_match_ratio(required: &BTreeSet<String>, possessed: &BTreeSet<String>) -> f64 {
    if required.is_empty() {
        return 0.0;
    }
    matched_skill_count(required, possessed) as f64 / required.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(tags: &[&str]) -> BTreeSet<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn partial_overlap() {
        let required = skills(&["python", "sql"]);
        let possessed = skills(&["python", "ml"]);
        assert_eq!(skill_match_ratio(&required, &possessed), 0.5);
        assert_eq!(matched_skill_count(&required, &possessed), 1);
    }

    #[test]
    fn empty_required_scores_zero() {
        let required = skills(&[]);
        let possessed = skills(&["python"]);
        assert_eq!(skill_match_ratio(&required, &possessed), 0.0);
    }

    #[test]
    fn superset_scores_one() {
        let required = skills(&["python", "sql"]);
        let possessed = skills(&["python", "sql", "ml"]);
        assert_eq!(skill_match_ratio(&required, &possessed), 1.0);
    }

    #[test]
    fn disjoint_scores_zero() {
        let required = skills(&["frontend"]);
        let possessed = skills(&["backend", "data"]);
        assert_eq!(skill_match_ratio(&required, &possessed), 0.0);
    }

    #[test]
    fn ratio_stays_in_unit_interval() {
        let pool = ["python", "ml", "data", "backend", "sql", "frontend"];
        for i in 0..pool.len() {
            for j in 0..pool.len() {
                let required = skills(&pool[..i]);
                let possessed = skills(&pool[j..]);
                let ratio = skill_match_ratio(&required, &possessed);
                assert!((0.0..=1.0).contains(&ratio), "ratio {ratio} out of range");
            }
        }
    }
}
