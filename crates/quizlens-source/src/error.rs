//! Adapter error types.
//!
//! These represent failures while fetching or decoding a source, all of
//! which halt a run before the metric engine is invoked.

use thiserror::Error;

/// Errors that can occur when fetching or decoding a data source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The server answered with a non-success status.
    #[error("HTTP error (status {status}) fetching {url}")]
    HttpStatus { status: u16, url: String },

    /// A network error occurred.
    #[error("network error: {0}")]
    Network(String),

    /// A local file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The payload was not decodable as CSV.
    #[error("CSV decode error: {0}")]
    Csv(String),
}

impl SourceError {
    /// Returns `true` when retrying the same request cannot help.
    pub fn is_permanent(&self) -> bool {
        matches!(
            self,
            SourceError::Csv(_) | SourceError::HttpStatus { status: 400..=499, .. }
        )
    }
}
