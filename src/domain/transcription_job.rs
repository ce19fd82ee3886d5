use super::{JobName, JobStatus};

/// Read-only view of the service's record for one job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptionJob {
    pub name: JobName,
    pub status: JobStatus,
    pub transcript_uri: Option<String>,
    pub failure_reason: Option<String>,
}

impl TranscriptionJob {
    pub fn new(name: JobName, status: JobStatus) -> Self {
        Self {
            name,
            status,
            transcript_uri: None,
            failure_reason: None,
        }
    }

    pub fn with_transcript_uri(mut self, uri: impl Into<String>) -> Self {
        self.transcript_uri = Some(uri.into());
        self
    }

    pub fn with_failure_reason(mut self, reason: impl Into<String>) -> Self {
        self.failure_reason = Some(reason.into());
        self
    }
}
