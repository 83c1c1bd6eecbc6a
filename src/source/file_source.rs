use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::Record;
use crate::source::{parse_records, FetchError, ItemSource};

/// A JSON array of records on local disk.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ItemSource for FileSource {
    async fn load(&self) -> Result<Vec<Record>, FetchError> {
        let body = tokio::fs::read(&self.path)
            .await
            .map_err(|e| FetchError::Io {
                path: self.path.clone(),
                source: e,
            })?;
        parse_records(&body)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
