use crate::types::scoring::ScoreResult;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub id: String,
    pub title: String,
    pub body: String,
    pub blocking: bool,
}

impl Finding {
    pub fn blocking(id: &str, title: &str, body: String) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            body,
            blocking: true,
        }
    }

    pub fn warning(id: &str, title: &str, body: String) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            body,
            blocking: false,
        }
    }
}

/// A scored evaluation as handed to the renderers.
#[derive(Debug, Clone, Serialize)]
pub struct Scorecard {
    pub subject: Option<String>,
    pub scored_at: DateTime<Utc>,
    #[serde(flatten)]
    pub result: ScoreResult,
}

impl Scorecard {
    pub fn new(subject: Option<String>, result: ScoreResult) -> Self {
        Self {
            subject,
            scored_at: Utc::now(),
            result,
        }
    }
}
