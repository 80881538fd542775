use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LensConfig {
    #[serde(default)]
    pub scoring: ScoringConfig,
    pub weights: Option<HashMap<String, f64>>,
    pub categories: Option<Vec<CategoryConfig>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringConfig {
    #[serde(default)]
    pub out_of_range: RangePolicy,
}

/// What to do with a rating outside `1..=max_score`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RangePolicy {
    #[default]
    Reject,
    Clamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryConfig {
    pub name: String,
    pub max_score: u32,
    pub base_weight: f64,
    #[serde(default)]
    pub descriptors: Vec<String>,
    /// Keyed by rating; TOML table keys are always strings.
    pub multipliers: Option<BTreeMap<String, f64>>,
}

impl LensConfig {
    pub fn range_policy(&self) -> RangePolicy {
        self.scoring.out_of_range
    }
}
