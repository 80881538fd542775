use thiserror::Error;

#[derive(Error, Debug)]
pub enum LensError {
    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("invalid catalog: {0}")]
    CatalogInvalid(String),

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("category rated more than once: {0}")]
    DuplicateRating(String),

    #[error("rating for {0} is applicable but has no value")]
    MissingValue(String),

    #[error("invalid rating for {category}: {value} is outside 1..={max}")]
    InvalidRating {
        category: String,
        value: i64,
        max: u32,
    },

    #[error("unsupported ratings file format: {0}")]
    UnsupportedFormat(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LensError {
    /// Errors caused by what the user typed or configured, as opposed to
    /// the environment failing underneath us.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            LensError::CatalogInvalid(_)
                | LensError::UnknownCategory(_)
                | LensError::DuplicateRating(_)
                | LensError::MissingValue(_)
                | LensError::InvalidRating { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, LensError>;
