// crates/featuredict-core/src/error.rs
use thiserror::Error;

/// Errors raised while loading catalogs and overlays.
///
/// Lookups themselves never fail for "unknown" inputs (ids, locales,
/// country codes); they simply yield nothing. Only I/O and parse failures
/// surface as errors.
#[derive(Debug, Error)]
pub enum FeatureError {
    /// A required file (e.g. the base `presets.json`) does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document parsed as JSON but does not have the expected shape.
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid locale: {0}")]
    InvalidLocale(String),
}

pub type Result<T> = std::result::Result<T, FeatureError>;
