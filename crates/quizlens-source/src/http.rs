//! HTTP data source.

use async_trait::async_trait;
use tracing::instrument;

use quizlens_core::record::RawTable;

use crate::decode::decode_csv;
use crate::error::SourceError;
use crate::RecordSource;

const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Fetches a CSV export from a URL.
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("failed to build HTTP client");

        Self {
            url: url.to_string(),
            client,
        }
    }
}

#[async_trait]
impl RecordSource for HttpSource {
    fn label(&self) -> &str {
        &self.url
    }

    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch_table(&self) -> Result<RawTable, SourceError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::HttpStatus {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;
        tracing::debug!(bytes = bytes.len(), "CSV payload received");

        decode_csv(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn fetches_and_decodes_csv() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/quiz.csv"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string("User ID,Score\nu1,5\nu2,7\n"),
            )
            .mount(&server)
            .await;

        let source = HttpSource::new(&format!("{}/quiz.csv", server.uri()));
        let table = source.fetch_table().await.unwrap();
        assert_eq!(table.columns, vec!["user_id", "score"]);
        assert_eq!(table.rows.len(), 2);
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing.csv"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let source = HttpSource::new(&format!("{}/missing.csv", server.uri()));
        let err = source.fetch_table().await.unwrap_err();
        assert!(matches!(err, SourceError::HttpStatus { status: 404, .. }));
        assert!(err.is_permanent());
    }

    #[tokio::test]
    async fn connection_failure_is_a_network_error() {
        // Port 9 (discard) should refuse the connection.
        let source = HttpSource::new("http://127.0.0.1:9/quiz.csv");
        let err = source.fetch_table().await.unwrap_err();
        assert!(matches!(err, SourceError::Network(_)));
    }
}
