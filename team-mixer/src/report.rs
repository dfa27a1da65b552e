use crate::model::EvaluationResult;
use std::fmt::Write;

/// Render the evaluation results as the console comparison table.
pub fn render_table(results: &[EvaluationResult], k: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Evaluation Results (Precision@{k}, Recall@{k})");
    let _ = writeln!(out, "{}", "-".repeat(60));
    for result in results {
        let _ = writeln!(
            out,
            "{:<24} | Precision={:.3} | Recall={:.3}",
            result.strategy, result.precision_at_k, result.recall_at_k
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_row_per_strategy() {
        let results = vec![
            EvaluationResult {
                strategy: "SkillOnlyStrategy".to_string(),
                precision_at_k: 1.0 / 3.0,
                recall_at_k: 0.5,
            },
            EvaluationResult {
                strategy: "RuleBasedStrategy".to_string(),
                precision_at_k: 0.0,
                recall_at_k: 0.0,
            },
        ];

        let table = render_table(&results, 3);
        assert!(table.contains("Precision@3, Recall@3"));
        assert!(table.contains("SkillOnlyStrategy        | Precision=0.333 | Recall=0.500"));
        assert!(table.contains("RuleBasedStrategy        | Precision=0.000 | Recall=0.000"));
    }
}
