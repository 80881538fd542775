use crate::types::catalog::CategoryDefinition;
use crate::types::scoring::{CategoryScore, CategoryStatus, RatingValue, Score, ScoreResult};
use std::collections::HashMap;

pub const SCALE_MAX: Score = 10.0;

/// Weighted average of normalized ratings, rescaled to `0..=10`.
///
/// Each rated category contributes `base_weight * multiplier(rating)` of
/// weight. Categories without a rating, marked not applicable, or with a
/// one-point scale contribute nothing. When nothing contributes the score
/// is 0. Ratings are expected to be within `1..=max_score` already.
pub fn score(
    definitions: &[CategoryDefinition],
    ratings: &HashMap<String, RatingValue>,
) -> ScoreResult {
    let mut total_weighted: Score = 0.0;
    let mut total_weight: Score = 0.0;
    let mut categories = Vec::with_capacity(definitions.len());

    for definition in definitions {
        let rating = match ratings.get(&definition.name) {
            Some(RatingValue::Rated(value)) => Some(*value),
            Some(RatingValue::NotApplicable) | None => None,
        };

        if definition.is_degenerate() {
            if rating.is_some() {
                tracing::warn!(
                    category = %definition.name,
                    max_score = definition.max_score,
                    "skipping category that cannot be normalized"
                );
            }
            categories.push(skipped(definition, rating, CategoryStatus::Degenerate));
            continue;
        }

        let Some(value) = rating else {
            categories.push(skipped(definition, None, CategoryStatus::NotApplicable));
            continue;
        };

        let normalized =
            Score::from(value.saturating_sub(1)) / Score::from(definition.max_score - 1);
        let multiplier = definition.multiplier(value);
        let effective_weight = definition.base_weight * multiplier;

        total_weighted += normalized * effective_weight;
        total_weight += effective_weight;

        tracing::debug!(
            category = %definition.name,
            rating = value,
            normalized,
            effective_weight,
            "category scored"
        );

        categories.push(CategoryScore {
            name: definition.name.clone(),
            max_score: definition.max_score,
            rating: Some(value),
            status: CategoryStatus::Rated,
            normalized: Some(normalized),
            multiplier,
            effective_weight,
        });
    }

    let final_score = if total_weight > 0.0 {
        (total_weighted / total_weight * SCALE_MAX).clamp(0.0, SCALE_MAX)
    } else {
        0.0
    };

    ScoreResult {
        final_score,
        total_weight,
        categories,
    }
}

fn skipped(
    definition: &CategoryDefinition,
    rating: Option<u32>,
    status: CategoryStatus,
) -> CategoryScore {
    CategoryScore {
        name: definition.name.clone(),
        max_score: definition.max_score,
        rating,
        status,
        normalized: None,
        multiplier: 1.0,
        effective_weight: 0.0,
    }
}
