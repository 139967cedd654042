//! Error types for the play-by-play box score CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoxScoreError>;

#[derive(Error, Debug)]
pub enum BoxScoreError {
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid feed snapshot: {message}")]
    Feed { message: String },

    #[error("No input files provided")]
    NoInput,
}

impl From<anyhow::Error> for BoxScoreError {
    fn from(err: anyhow::Error) -> Self {
        BoxScoreError::Feed {
            message: format!("{err:#}"),
        }
    }
}
