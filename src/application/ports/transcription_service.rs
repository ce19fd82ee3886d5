use async_trait::async_trait;

use crate::domain::{JobName, LanguageCode, TranscriptionJob};

#[async_trait]
pub trait TranscriptionService: Send + Sync {
    /// `Ok(None)` when the service has no job under that name.
    async fn get_job(
        &self,
        name: &JobName,
    ) -> Result<Option<TranscriptionJob>, TranscriptionServiceError>;

    async fn start_job(
        &self,
        name: &JobName,
        language: &LanguageCode,
        media_uri: &str,
    ) -> Result<TranscriptionJob, TranscriptionServiceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionServiceError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}
