use serde::Serialize;

pub type Score = f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingValue {
    Rated(u32),
    NotApplicable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryStatus {
    Rated,
    NotApplicable,
    Degenerate,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryScore {
    pub name: String,
    pub max_score: u32,
    pub rating: Option<u32>,
    pub status: CategoryStatus,
    pub normalized: Option<Score>,
    pub multiplier: Score,
    /// Zero unless the category was rated.
    pub effective_weight: Score,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreResult {
    pub final_score: Score,
    pub total_weight: Score,
    pub categories: Vec<CategoryScore>,
}

impl ScoreResult {
    pub fn skipped_degenerate(&self) -> usize {
        self.categories
            .iter()
            .filter(|category| category.status == CategoryStatus::Degenerate)
            .count()
    }
}
