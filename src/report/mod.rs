pub mod json;
pub mod md;

use crate::error::LensError;
use crate::types::catalog::Catalog;
use crate::types::report::Scorecard;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(scorecard: &Scorecard, format: OutputFormat) -> Result<String, LensError> {
    match format {
        OutputFormat::Json => json::to_json(scorecard).map_err(LensError::Json),
        OutputFormat::Md => Ok(md::to_markdown(scorecard)),
    }
}

pub fn render_catalog(catalog: &Catalog, with_guide: bool) -> String {
    md::catalog_to_markdown(catalog, with_guide)
}
