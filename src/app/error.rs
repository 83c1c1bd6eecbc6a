use thiserror::Error;

use crate::domain::RecordId;
use crate::source::FetchError;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Source error: {0}")]
    Fetch(#[from] FetchError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Record not found: {0}")]
    RecordNotFound(RecordId),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, DeckError>;
