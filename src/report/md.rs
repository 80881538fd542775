use crate::types::catalog::Catalog;
use crate::types::report::Scorecard;
use crate::types::scoring::CategoryStatus;

pub fn to_markdown(scorecard: &Scorecard) -> String {
    let result = &scorecard.result;
    let mut output = String::new();
    match &scorecard.subject {
        Some(subject) => output.push_str(&format!("# Movie Rating Summary: {}\n\n", subject)),
        None => output.push_str("# Movie Rating Summary\n\n"),
    }

    output.push_str("| Category | Rating | Effective weight |\n");
    output.push_str("|---|---|---|\n");
    for category in &result.categories {
        let rating = match (category.status, category.rating) {
            (CategoryStatus::Rated, Some(rating)) => {
                format!("{} / {}", rating, category.max_score)
            }
            (CategoryStatus::Degenerate, _) => "skipped".to_string(),
            _ => "N/A".to_string(),
        };
        output.push_str(&format!(
            "| {} | {} | {:.3} |\n",
            category.name, rating, category.effective_weight
        ));
    }

    output.push_str(&format!("\nFinal score: {:.1} / 10.0\n", result.final_score));
    output
}

pub fn catalog_to_markdown(catalog: &Catalog, with_guide: bool) -> String {
    let mut output = String::new();
    output.push_str("# Categories\n\n");
    for category in catalog.categories() {
        output.push_str(&format!(
            "- {} (1-{}, weight {:.2})\n",
            category.name, category.max_score, category.base_weight
        ));
        if with_guide {
            for descriptor in &category.descriptors {
                output.push_str(&format!("  - {}\n", descriptor));
            }
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::scoring::{CategoryScore, ScoreResult};

    fn scorecard(subject: Option<&str>) -> Scorecard {
        Scorecard::new(
            subject.map(str::to_string),
            ScoreResult {
                final_score: 6.4,
                total_weight: 0.21,
                categories: vec![
                    CategoryScore {
                        name: "Story/Plot".to_string(),
                        max_score: 10,
                        rating: Some(7),
                        status: CategoryStatus::Rated,
                        normalized: Some(6.0 / 9.0),
                        multiplier: 1.0,
                        effective_weight: 0.16,
                    },
                    CategoryScore {
                        name: "Action".to_string(),
                        max_score: 5,
                        rating: None,
                        status: CategoryStatus::NotApplicable,
                        normalized: None,
                        multiplier: 1.0,
                        effective_weight: 0.0,
                    },
                ],
            },
        )
    }

    #[test]
    fn markdown_summary_lists_categories_and_final_score() {
        let rendered = to_markdown(&scorecard(Some("Heat")));
        assert!(rendered.contains("# Movie Rating Summary: Heat"));
        assert!(rendered.contains("| Story/Plot | 7 / 10 | 0.160 |"));
        assert!(rendered.contains("| Action | N/A | 0.000 |"));
        assert!(rendered.contains("Final score: 6.4 / 10.0"));
    }

    #[test]
    fn markdown_summary_without_subject() {
        let rendered = to_markdown(&scorecard(None));
        assert!(rendered.starts_with("# Movie Rating Summary\n"));
    }

    #[test]
    fn catalog_guide_includes_descriptors_on_request() {
        let catalog = Catalog::builtin();
        let short = catalog_to_markdown(&catalog, false);
        let guided = catalog_to_markdown(&catalog, true);

        assert!(short.contains("- Story/Plot (1-10, weight 0.16)"));
        assert!(!short.contains("Incoherent"));
        assert!(guided.contains("  - 1: Incoherent."));
    }
}
