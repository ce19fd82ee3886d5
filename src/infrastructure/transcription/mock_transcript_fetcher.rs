use async_trait::async_trait;

use crate::application::ports::{TranscriptFetchError, TranscriptFetcher};
use crate::domain::Transcript;

pub struct MockTranscriptFetcher;

#[async_trait]
impl TranscriptFetcher for MockTranscriptFetcher {
    async fn fetch(&self, _uri: &str) -> Result<Transcript, TranscriptFetchError> {
        Ok(Transcript::new("Mock transcript"))
    }
}
