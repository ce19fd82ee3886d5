use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use crate::application::ports::{TranscriptionService, TranscriptionServiceError};
use crate::domain::{JobName, JobStatus, LanguageCode, TranscriptionJob};

pub const MOCK_TRANSCRIPT_URI: &str = "mock://transcripts/result.json";

/// Knows no job until one is started; a started job is reported completed.
#[derive(Default)]
pub struct MockTranscriptionService {
    started: AtomicBool,
}

impl MockTranscriptionService {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TranscriptionService for MockTranscriptionService {
    async fn get_job(
        &self,
        name: &JobName,
    ) -> Result<Option<TranscriptionJob>, TranscriptionServiceError> {
        if !self.started.load(Ordering::SeqCst) {
            return Ok(None);
        }
        Ok(Some(
            TranscriptionJob::new(name.clone(), JobStatus::Completed)
                .with_transcript_uri(MOCK_TRANSCRIPT_URI),
        ))
    }

    async fn start_job(
        &self,
        name: &JobName,
        _language: &LanguageCode,
        _media_uri: &str,
    ) -> Result<TranscriptionJob, TranscriptionServiceError> {
        self.started.store(true, Ordering::SeqCst);
        Ok(TranscriptionJob::new(name.clone(), JobStatus::Queued))
    }
}
