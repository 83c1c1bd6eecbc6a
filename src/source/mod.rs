pub mod file_source;
pub mod http_source;
pub mod literal;

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Record;

pub use file_source::FileSource;
pub use http_source::HttpSource;
pub use literal::LiteralSource;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed record list: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Where the record list comes from. Loaded exactly once at startup.
#[async_trait]
pub trait ItemSource {
    async fn load(&self) -> Result<Vec<Record>, FetchError>;

    /// Short human-readable description used in logs.
    fn describe(&self) -> String;
}

/// Decode a JSON array of records.
pub fn parse_records(body: &[u8]) -> Result<Vec<Record>, FetchError> {
    let records: Vec<Record> = serde_json::from_slice(body)?;
    Ok(records)
}
