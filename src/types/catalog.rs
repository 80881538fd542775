use crate::error::{LensError, Result};
use crate::types::builtin::builtin_categories;
use crate::types::config::{CategoryConfig, LensConfig};
use crate::types::report::Finding;
use std::collections::{BTreeMap, HashSet};

const WEIGHT_SUM_TOLERANCE: f64 = 0.001;

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryDefinition {
    pub name: String,
    pub max_score: u32,
    pub base_weight: f64,
    pub multipliers: Option<BTreeMap<u32, f64>>,
    pub descriptors: Vec<String>,
}

impl CategoryDefinition {
    pub fn new(name: &str, max_score: u32, base_weight: f64) -> Self {
        Self {
            name: name.to_string(),
            max_score,
            base_weight,
            multipliers: None,
            descriptors: Vec::new(),
        }
    }

    pub fn with_multipliers(mut self, multipliers: &[(u32, f64)]) -> Self {
        self.multipliers = Some(multipliers.iter().copied().collect());
        self
    }

    pub fn with_descriptors(mut self, descriptors: &[&str]) -> Self {
        self.descriptors = descriptors.iter().map(|d| d.to_string()).collect();
        self
    }

    /// Multiplier for a given rating; 1.0 when the table is absent or silent.
    pub fn multiplier(&self, rating: u32) -> f64 {
        self.multipliers
            .as_ref()
            .and_then(|table| table.get(&rating))
            .copied()
            .unwrap_or(1.0)
    }

    /// Largest weight this category can contribute for any rating.
    pub fn max_effective_weight(&self) -> f64 {
        let top = self
            .multipliers
            .as_ref()
            .map(|table| table.values().copied().fold(1.0, f64::max))
            .unwrap_or(1.0);
        self.base_weight * top
    }

    /// A one-point scale cannot be normalized.
    pub fn is_degenerate(&self) -> bool {
        self.max_score <= 1
    }

    fn from_config(index: usize, cfg: &CategoryConfig) -> Result<Self> {
        let multipliers = match &cfg.multipliers {
            Some(raw) => {
                let mut table = BTreeMap::new();
                for (key, factor) in raw {
                    let rating = key.trim().parse::<u32>().map_err(|_| {
                        LensError::CatalogInvalid(format!(
                            "categories[{}].multipliers: key '{}' is not a rating",
                            index, key
                        ))
                    })?;
                    if table.insert(rating, *factor).is_some() {
                        return Err(LensError::CatalogInvalid(format!(
                            "categories[{}].multipliers: rating {} is listed more than once",
                            index, rating
                        )));
                    }
                }
                Some(table)
            }
            None => None,
        };

        Ok(Self {
            name: cfg.name.clone(),
            max_score: cfg.max_score,
            base_weight: cfg.base_weight,
            multipliers,
            descriptors: cfg.descriptors.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    categories: Vec<CategoryDefinition>,
}

impl Catalog {
    pub fn new(categories: Vec<CategoryDefinition>) -> Self {
        Self { categories }
    }

    pub fn builtin() -> Self {
        Self::new(builtin_categories())
    }

    /// Build the active catalog from config and validate it.
    pub fn from_config(cfg: &LensConfig) -> Result<Self> {
        let catalog = Self::assemble(cfg)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// `[[categories]]` replaces the built-in set, then `[weights]`
    /// overrides base weights by name. Only structural problems fail here.
    pub fn assemble(cfg: &LensConfig) -> Result<Self> {
        let mut catalog = match &cfg.categories {
            Some(categories) => Self::new(
                categories
                    .iter()
                    .enumerate()
                    .map(|(index, category)| CategoryDefinition::from_config(index, category))
                    .collect::<Result<Vec<_>>>()?,
            ),
            None => Self::builtin(),
        };

        if let Some(weights) = &cfg.weights {
            let mut unknown = Vec::new();
            for (name, weight) in weights {
                match catalog.categories.iter_mut().find(|c| &c.name == name) {
                    Some(category) => category.base_weight = *weight,
                    None => unknown.push(name.clone()),
                }
            }
            if !unknown.is_empty() {
                unknown.sort();
                return Err(LensError::CatalogInvalid(format!(
                    "weights contains unknown categor(ies): {}",
                    unknown.join(", ")
                )));
            }
        }

        Ok(catalog)
    }

    pub fn categories(&self) -> &[CategoryDefinition] {
        &self.categories
    }

    pub fn get(&self, name: &str) -> Option<&CategoryDefinition> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn total_base_weight(&self) -> f64 {
        self.categories.iter().map(|c| c.base_weight).sum()
    }

    /// Fails with every blocking finding joined into one message.
    pub fn validate(&self) -> Result<()> {
        let blocking = self
            .findings()
            .into_iter()
            .filter(|finding| finding.blocking)
            .map(|finding| finding.body)
            .collect::<Vec<_>>();
        if blocking.is_empty() {
            Ok(())
        } else {
            Err(LensError::CatalogInvalid(blocking.join("; ")))
        }
    }

    pub fn findings(&self) -> Vec<Finding> {
        let mut findings = Vec::new();

        if self.categories.is_empty() {
            findings.push(Finding::blocking(
                "catalog.empty",
                "Catalog is empty",
                "catalog defines no categories".to_string(),
            ));
            return findings;
        }

        let mut seen = HashSet::new();
        for (index, category) in self.categories.iter().enumerate() {
            let name = category.name.as_str();
            if name.trim().is_empty() {
                findings.push(Finding::blocking(
                    "category.empty_name",
                    "Category without a name",
                    format!("categories[{}].name must not be empty", index),
                ));
            } else if name.trim() != name {
                findings.push(Finding::blocking(
                    "category.name_whitespace",
                    "Category name has surrounding whitespace",
                    format!(
                        "categories[{}].name '{}' must not start or end with whitespace",
                        index, name
                    ),
                ));
            } else if !seen.insert(name.to_string()) {
                findings.push(Finding::blocking(
                    "category.duplicate",
                    "Duplicate category",
                    format!("category '{}' is defined more than once", name),
                ));
            }

            if !category.base_weight.is_finite() || category.base_weight <= 0.0 {
                findings.push(Finding::blocking(
                    "category.weight",
                    "Non-positive base weight",
                    format!(
                        "category '{}' base_weight must be positive (found {})",
                        name, category.base_weight
                    ),
                ));
            }

            if let Some(table) = &category.multipliers {
                for (rating, factor) in table {
                    if *rating < 1 || *rating > category.max_score {
                        findings.push(Finding::blocking(
                            "category.multiplier_key",
                            "Multiplier for impossible rating",
                            format!(
                                "category '{}' has a multiplier for rating {} outside 1..={}",
                                name, rating, category.max_score
                            ),
                        ));
                    }
                    if !factor.is_finite() || *factor <= 0.0 {
                        findings.push(Finding::blocking(
                            "category.multiplier_value",
                            "Non-positive multiplier",
                            format!(
                                "category '{}' multiplier for rating {} must be positive (found {})",
                                name, rating, factor
                            ),
                        ));
                    }
                }
            }

            if category.base_weight.is_finite() && !category.max_effective_weight().is_finite() {
                findings.push(Finding::blocking(
                    "category.weight_overflow",
                    "Effective weight overflows",
                    format!(
                        "category '{}' base_weight times its largest multiplier is not a finite number",
                        name
                    ),
                ));
            }

            if category.is_degenerate() {
                findings.push(Finding::warning(
                    "category.degenerate",
                    "Category cannot be scored",
                    format!(
                        "category '{}' has max_score {} and will always be skipped",
                        name, category.max_score
                    ),
                ));
            }

            if category.descriptors.len() > category.max_score as usize {
                findings.push(Finding::warning(
                    "category.descriptors",
                    "More descriptors than scale points",
                    format!(
                        "category '{}' has {} descriptor(s) for a 1..={} scale",
                        name,
                        category.descriptors.len(),
                        category.max_score
                    ),
                ));
            }
        }

        let max_total: f64 = self
            .categories
            .iter()
            .map(CategoryDefinition::max_effective_weight)
            .sum();
        if !max_total.is_finite() {
            findings.push(Finding::blocking(
                "catalog.weight_overflow",
                "Combined weights overflow",
                "the combined effective weights of all categories are not a finite number"
                    .to_string(),
            ));
        }

        let total = self.total_base_weight();
        if total.is_finite() && (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            findings.push(Finding::warning(
                "catalog.weight_sum",
                "Base weights do not sum to 1.0",
                format!(
                    "base weights sum to {:.3}; scores are still normalized by the weight actually used",
                    total
                ),
            ));
        }

        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(source: &str) -> LensConfig {
        toml::from_str(source).expect("config should parse")
    }

    #[test]
    fn builtin_catalog_is_valid_and_weights_sum_to_one() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.categories().len(), 16);
        assert!(catalog.validate().is_ok());
        assert!((catalog.total_base_weight() - 1.0).abs() < WEIGHT_SUM_TOLERANCE);
        assert!(!catalog
            .findings()
            .iter()
            .any(|finding| finding.id == "catalog.weight_sum"));
    }

    #[test]
    fn multiplier_defaults_to_one() {
        let plain = CategoryDefinition::new("Audio", 5, 0.05);
        assert_eq!(plain.multiplier(3), 1.0);

        let curved = CategoryDefinition::new("Audio", 5, 0.05).with_multipliers(&[(5, 2.0)]);
        assert_eq!(curved.multiplier(5), 2.0);
        assert_eq!(curved.multiplier(4), 1.0);
    }

    #[test]
    fn from_config_without_categories_uses_builtin() {
        let catalog = Catalog::from_config(&LensConfig::default()).expect("catalog should load");
        assert_eq!(catalog, Catalog::builtin());
    }

    #[test]
    fn from_config_applies_weight_overrides() {
        let catalog = Catalog::from_config(&config(
            r#"
[weights]
"Story/Plot" = 0.30
"#,
        ))
        .expect("catalog should load");

        let story = catalog.get("Story/Plot").expect("story category exists");
        assert_eq!(story.base_weight, 0.30);
        assert!(catalog
            .findings()
            .iter()
            .any(|finding| finding.id == "catalog.weight_sum" && !finding.blocking));
    }

    #[test]
    fn from_config_rejects_unknown_weight_override() {
        let result = Catalog::from_config(&config(
            r#"
[weights]
"Popcorn" = 0.5
"#,
        ));
        assert!(matches!(result, Err(LensError::CatalogInvalid(msg)) if msg.contains("Popcorn")));
    }

    #[test]
    fn from_config_rejects_non_numeric_multiplier_key() {
        let result = Catalog::from_config(&config(
            r#"
[[categories]]
name = "Audio"
max_score = 5
base_weight = 1.0

[categories.multipliers]
top = 1.5
"#,
        ));
        assert!(matches!(result, Err(LensError::CatalogInvalid(msg)) if msg.contains("'top'")));
    }

    #[test]
    fn assemble_keeps_invalid_catalog_for_inspection() {
        let cfg = config(
            r#"
[[categories]]
name = "Audio"
max_score = 5
base_weight = -1.0
"#,
        );
        let catalog = Catalog::assemble(&cfg).expect("structure is fine");
        assert!(catalog
            .findings()
            .iter()
            .any(|finding| finding.id == "category.weight" && finding.blocking));
        assert!(Catalog::from_config(&cfg).is_err());
    }

    #[test]
    fn weights_that_overflow_are_blocking() {
        let single = Catalog::new(vec![
            CategoryDefinition::new("A", 10, 1.7e308).with_multipliers(&[(1, 1.5)]),
            CategoryDefinition::new("B", 10, 1.0),
        ]);
        assert!(single
            .findings()
            .iter()
            .any(|finding| finding.id == "category.weight_overflow" && finding.blocking));
        assert!(single.validate().is_err());

        let combined = Catalog::new(vec![
            CategoryDefinition::new("A", 10, 1e308),
            CategoryDefinition::new("B", 10, 1e308),
        ]);
        assert!(combined
            .findings()
            .iter()
            .any(|finding| finding.id == "catalog.weight_overflow" && finding.blocking));
        assert!(combined.validate().is_err());
    }

    #[test]
    fn max_effective_weight_uses_largest_multiplier() {
        let category =
            CategoryDefinition::new("Story", 10, 0.5).with_multipliers(&[(1, 1.5), (5, 0.5)]);
        assert_eq!(category.max_effective_weight(), 0.75);

        let shrinking = CategoryDefinition::new("Story", 10, 0.5).with_multipliers(&[(5, 0.5)]);
        assert_eq!(shrinking.max_effective_weight(), 0.5);
    }

    #[test]
    fn extra_descriptors_are_a_warning() {
        let catalog = Catalog::new(vec![CategoryDefinition::new("Audio", 2, 1.0)
            .with_descriptors(&["1: Poor.", "2: Fine.", "3: Great."])]);

        assert!(catalog.validate().is_ok());
        assert!(catalog
            .findings()
            .iter()
            .any(|finding| finding.id == "category.descriptors" && !finding.blocking));
    }

    #[test]
    fn short_descriptor_guide_is_fine() {
        let catalog = Catalog::new(vec![CategoryDefinition::new("Enjoyment", 10, 1.0)
            .with_descriptors(&["1: Hated it.", "10: Loved it."])]);
        assert!(catalog.findings().is_empty());
    }

    #[test]
    fn names_with_surrounding_whitespace_are_rejected() {
        let catalog = Catalog::new(vec![
            CategoryDefinition::new(" Audio", 5, 0.5),
            CategoryDefinition::new("Audio", 5, 0.5),
        ]);
        let findings = catalog.findings();
        assert!(findings
            .iter()
            .any(|finding| finding.id == "category.name_whitespace" && finding.blocking));
        assert!(!findings
            .iter()
            .any(|finding| finding.id == "category.duplicate"));
    }

    #[test]
    fn from_config_rejects_colliding_multiplier_keys() {
        let result = Catalog::from_config(&config(
            r#"
[[categories]]
name = "Audio"
max_score = 5
base_weight = 1.0

[categories.multipliers]
1 = 1.5
01 = 2.0
"#,
        ));
        assert!(
            matches!(result, Err(LensError::CatalogInvalid(msg)) if msg.contains("more than once"))
        );
    }

    #[test]
    fn validate_collects_every_blocking_problem() {
        let catalog = Catalog::new(vec![
            CategoryDefinition::new("Audio", 5, 0.5).with_multipliers(&[(6, 1.5)]),
            CategoryDefinition::new("Audio", 5, 0.5),
            CategoryDefinition::new("Visuals", 5, 0.0),
        ]);

        let err = catalog.validate().expect_err("catalog should be invalid");
        let message = err.to_string();
        assert!(message.contains("rating 6 outside 1..=5"));
        assert!(message.contains("defined more than once"));
        assert!(message.contains("base_weight must be positive"));
    }

    #[test]
    fn degenerate_category_is_a_warning_not_an_error() {
        let catalog = Catalog::new(vec![
            CategoryDefinition::new("Audio", 5, 0.5),
            CategoryDefinition::new("Coin flip", 1, 0.5),
        ]);

        assert!(catalog.validate().is_ok());
        assert!(catalog
            .findings()
            .iter()
            .any(|finding| finding.id == "category.degenerate" && !finding.blocking));
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let catalog = Catalog::new(Vec::new());
        assert!(matches!(
            catalog.validate(),
            Err(LensError::CatalogInvalid(_))
        ));
    }
}
