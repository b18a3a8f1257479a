//! Local-file data source.

use std::path::PathBuf;

use async_trait::async_trait;

use quizlens_core::record::RawTable;

use crate::decode::decode_csv;
use crate::error::SourceError;
use crate::RecordSource;

/// Reads a CSV export from the local filesystem.
pub struct FileSource {
    path: PathBuf,
    label: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let label = path.display().to_string();
        Self { path, label }
    }
}

#[async_trait]
impl RecordSource for FileSource {
    fn label(&self) -> &str {
        &self.label
    }

    async fn fetch_table(&self) -> Result<RawTable, SourceError> {
        let bytes = std::fs::read(&self.path).map_err(|source| SourceError::Io {
            path: self.label.clone(),
            source,
        })?;
        decode_csv(&bytes)
    }
}
