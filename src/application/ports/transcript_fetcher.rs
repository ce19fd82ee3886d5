use async_trait::async_trait;

use crate::domain::{Transcript, TranscriptParseError};

#[async_trait]
pub trait TranscriptFetcher: Send + Sync {
    async fn fetch(&self, uri: &str) -> Result<Transcript, TranscriptFetchError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptFetchError {
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("status {status}: {body}")]
    Status { status: u16, body: String },
    #[error(transparent)]
    Parse(#[from] TranscriptParseError),
}
