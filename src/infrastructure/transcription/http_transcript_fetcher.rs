use async_trait::async_trait;

use crate::application::ports::{TranscriptFetchError, TranscriptFetcher};
use crate::domain::Transcript;

/// Downloads the result document a completed job points at.
pub struct HttpTranscriptFetcher {
    client: reqwest::Client,
}

impl HttpTranscriptFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpTranscriptFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TranscriptFetcher for HttpTranscriptFetcher {
    async fn fetch(&self, uri: &str) -> Result<Transcript, TranscriptFetchError> {
        tracing::debug!("Fetching transcript document");

        let response = self
            .client
            .get(uri)
            .send()
            .await
            .map_err(|e| TranscriptFetchError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscriptFetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| TranscriptFetchError::RequestFailed(format!("read body: {}", e)))?;

        let transcript = Transcript::from_result_json(&body)?;
        tracing::info!(chars = transcript.as_str().len(), "Transcript downloaded");

        Ok(transcript)
    }
}
