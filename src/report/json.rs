use crate::types::report::Scorecard;

pub fn to_json(scorecard: &Scorecard) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(scorecard)
}
