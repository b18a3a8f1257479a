//! quizlens-source — data source adapters.
//!
//! Implements the [`RecordSource`] trait over HTTP and local files, decoding
//! CSV payloads into the column-normalized [`RawTable`] the metric engine
//! consumes. Fetch or decode failure stops a run before the engine is
//! invoked; the engine itself performs no I/O.

pub mod decode;
pub mod error;
pub mod file;
pub mod http;

use async_trait::async_trait;

use quizlens_core::record::RawTable;

pub use error::SourceError;
pub use file::FileSource;
pub use http::HttpSource;

/// A source of quiz-response tables.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Human-readable label for the source, shown in reports and logs.
    fn label(&self) -> &str;

    /// Fetch the raw bytes and decode them into a column-normalized table.
    async fn fetch_table(&self) -> Result<RawTable, SourceError>;
}

/// Pick an adapter for a source spec: URLs fetch over HTTP, anything else
/// is treated as a local path.
pub fn source_for(spec: &str) -> Box<dyn RecordSource> {
    if spec.starts_with("http://") || spec.starts_with("https://") {
        Box::new(HttpSource::new(spec))
    } else {
        Box::new(FileSource::new(spec))
    }
}
