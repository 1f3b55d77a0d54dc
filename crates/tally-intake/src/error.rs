use tally_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Expected a JSON array or an object with a `data` array")]
    Shape,

    #[error("Row {index}: {source}")]
    Row {
        index: usize,
        source: serde_json::Error,
    },

    #[error("Row {index}: invalid `{field}`: {reason}")]
    InvalidField {
        index: usize,
        field: &'static str,
        reason: String,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}
