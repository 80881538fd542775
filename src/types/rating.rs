use crate::error::{LensError, Result};
use crate::types::catalog::Catalog;
use crate::types::config::RangePolicy;
use crate::types::scoring::RatingValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

fn default_applicable() -> bool {
    true
}

/// One line of a ratings sheet. `applicable = false` marks a category the
/// movie simply does not have (no action sequences, say).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RatingRecord {
    pub category: String,
    pub value: Option<i64>,
    #[serde(default = "default_applicable")]
    pub applicable: bool,
}

impl RatingRecord {
    pub fn rated(category: &str, value: i64) -> Self {
        Self {
            category: category.to_string(),
            value: Some(value),
            applicable: true,
        }
    }

    pub fn not_applicable(category: &str) -> Self {
        Self {
            category: category.to_string(),
            value: None,
            applicable: false,
        }
    }
}

/// Everything needed for one evaluation, built by the caller right before
/// scoring.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ScoreRequest {
    pub subject: Option<String>,
    #[serde(default)]
    pub ratings: Vec<RatingRecord>,
}

impl ScoreRequest {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("toml") => Ok(toml::from_str(&content)?),
            Some("json") => Ok(serde_json::from_str(&content)?),
            _ => Err(LensError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Replaces any existing record for the category.
    pub fn apply_override(&mut self, category: &str, value: i64) {
        self.upsert(RatingRecord::rated(category, value));
    }

    pub fn mark_not_applicable(&mut self, category: &str) {
        self.upsert(RatingRecord::not_applicable(category));
    }

    fn upsert(&mut self, record: RatingRecord) {
        self.ratings.retain(|existing| existing.category != record.category);
        self.ratings.push(record);
    }

    /// Checks every record against the catalog and produces the name-keyed
    /// map the engine consumes.
    pub fn resolve(
        &self,
        catalog: &Catalog,
        policy: RangePolicy,
    ) -> Result<HashMap<String, RatingValue>> {
        let mut resolved = HashMap::with_capacity(self.ratings.len());

        for record in &self.ratings {
            let definition = catalog
                .get(&record.category)
                .ok_or_else(|| LensError::UnknownCategory(record.category.clone()))?;

            let value = if !record.applicable {
                RatingValue::NotApplicable
            } else {
                let raw = record
                    .value
                    .ok_or_else(|| LensError::MissingValue(record.category.clone()))?;
                RatingValue::Rated(check_range(
                    &record.category,
                    raw,
                    definition.max_score,
                    policy,
                )?)
            };

            if resolved.insert(record.category.clone(), value).is_some() {
                return Err(LensError::DuplicateRating(record.category.clone()));
            }
        }

        Ok(resolved)
    }
}

fn check_range(category: &str, value: i64, max_score: u32, policy: RangePolicy) -> Result<u32> {
    let max = i64::from(max_score.max(1));
    if (1..=max).contains(&value) {
        return Ok(value as u32);
    }
    match policy {
        RangePolicy::Reject => Err(LensError::InvalidRating {
            category: category.to_string(),
            value,
            max: max_score,
        }),
        RangePolicy::Clamp => {
            let clamped = value.clamp(1, max) as u32;
            tracing::warn!(category, value, clamped, "rating out of range, clamped");
            Ok(clamped)
        }
    }
}
