use std::fmt;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use futures::StreamExt;
use tokio_util::io::ReaderStream;
use tracing::Instrument;

use super::job_poller::{JobPoller, PollError};
use crate::application::ports::{
    StagingStore, StagingStoreError, TranscriptFetchError, TranscriptFetcher,
    TranscriptionService, TranscriptionServiceError,
};
use crate::domain::{
    AudioFileRef, JobName, JobStatus, LanguageCode, StoragePath, StoredObject, Transcript,
    TranscriptionJob,
};

/// What to do when a job with the derived name already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExistingJobPolicy {
    /// Poll a found job that is still queued or running before reading its result.
    #[default]
    ResumePolling,
    /// Read the result of a found job straight away, whatever its status.
    FetchImmediately,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrchestratorState {
    CheckingExisting,
    Uploading,
    Submitting,
    Polling,
    FetchingResult,
    Done,
}

impl OrchestratorState {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrchestratorState::CheckingExisting => "CHECKING_EXISTING",
            OrchestratorState::Uploading => "UPLOADING",
            OrchestratorState::Submitting => "SUBMITTING",
            OrchestratorState::Polling => "POLLING",
            OrchestratorState::FetchingResult => "FETCHING_RESULT",
            OrchestratorState::Done => "DONE",
        }
    }
}

impl fmt::Display for OrchestratorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Drives one file through upload, job submission, polling and result fetch.
pub struct TranscriptionOrchestrator {
    staging_store: Arc<dyn StagingStore>,
    transcription_service: Arc<dyn TranscriptionService>,
    transcript_fetcher: Arc<dyn TranscriptFetcher>,
    poller: JobPoller,
    existing_job_policy: ExistingJobPolicy,
}

impl TranscriptionOrchestrator {
    pub fn new(
        staging_store: Arc<dyn StagingStore>,
        transcription_service: Arc<dyn TranscriptionService>,
        transcript_fetcher: Arc<dyn TranscriptFetcher>,
        poller: JobPoller,
    ) -> Self {
        Self {
            staging_store,
            transcription_service,
            transcript_fetcher,
            poller,
            existing_job_policy: ExistingJobPolicy::default(),
        }
    }

    pub fn with_existing_job_policy(mut self, policy: ExistingJobPolicy) -> Self {
        self.existing_job_policy = policy;
        self
    }

    pub async fn run_job(
        &self,
        file: &AudioFileRef,
        language: &LanguageCode,
    ) -> Result<Transcript, OrchestratorError> {
        let job_name = JobName::derive(&file.base);
        let span = tracing::info_span!(
            "transcription_job",
            job_name = %job_name,
            file = %file.base,
            language = %language,
        );

        self.drive(file, language, job_name).instrument(span).await
    }

    async fn drive(
        &self,
        file: &AudioFileRef,
        language: &LanguageCode,
        job_name: JobName,
    ) -> Result<Transcript, OrchestratorError> {
        transition(OrchestratorState::CheckingExisting);
        let job = match self.find_existing(&job_name).await {
            Some(existing) => self.resume(existing).await?,
            None => {
                transition(OrchestratorState::Uploading);
                let stored = self.upload(file).await?;

                transition(OrchestratorState::Submitting);
                let started = self
                    .transcription_service
                    .start_job(&job_name, language, &stored.media_uri)
                    .await
                    .map_err(OrchestratorError::Submit)?;
                tracing::info!(status = %started.status, media_uri = %stored.media_uri, "Transcription job started");

                transition(OrchestratorState::Polling);
                let finished = self.poller.wait_for_terminal(&job_name).await?;
                tracing::info!(status = %finished.status, "Job finished");
                finished
            }
        };

        transition(OrchestratorState::FetchingResult);
        let transcript = self.fetch_result(job).await?;

        transition(OrchestratorState::Done);
        Ok(transcript)
    }

    async fn find_existing(&self, job_name: &JobName) -> Option<TranscriptionJob> {
        match self.transcription_service.get_job(job_name).await {
            Ok(Some(job)) => {
                tracing::info!(status = %job.status, "Reusing existing transcription job");
                Some(job)
            }
            Ok(None) => None,
            Err(e) => {
                tracing::debug!(error = %e, "Existing job lookup failed, submitting a new one");
                None
            }
        }
    }

    async fn resume(&self, existing: TranscriptionJob) -> Result<TranscriptionJob, OrchestratorError> {
        if existing.status.is_terminal()
            || self.existing_job_policy == ExistingJobPolicy::FetchImmediately
        {
            return Ok(existing);
        }

        transition(OrchestratorState::Polling);
        Ok(self.poller.wait_for_terminal(&existing.name).await?)
    }

    async fn upload(&self, file: &AudioFileRef) -> Result<StoredObject, OrchestratorError> {
        let handle = tokio::fs::File::open(file.path()).await.map_err(|source| {
            OrchestratorError::OpenAudio {
                path: file.path.clone(),
                source,
            }
        })?;
        let content_length = handle.metadata().await.ok().map(|m| m.len());
        let path = StoragePath::for_audio(file);

        let stream = ReaderStream::new(handle).boxed();

        let stored = self
            .staging_store
            .store(&path, stream, content_length)
            .await
            .map_err(OrchestratorError::Upload)?;
        tracing::info!(key = %stored.path, bytes = stored.size, "Audio file uploaded");

        Ok(stored)
    }

    async fn fetch_result(&self, job: TranscriptionJob) -> Result<Transcript, OrchestratorError> {
        if job.status.is_pending() {
            return Err(OrchestratorError::JobPending {
                job_name: job.name,
                status: job.status,
            });
        }
        if !job.status.is_success() {
            return Err(OrchestratorError::TranscriptionFailed {
                job_name: job.name,
                status: job.status,
                reason: job.failure_reason,
            });
        }

        let uri = job
            .transcript_uri
            .ok_or_else(|| OrchestratorError::MissingTranscriptUri(job.name.clone()))?;

        self.transcript_fetcher
            .fetch(&uri)
            .await
            .map_err(OrchestratorError::Fetch)
    }
}

fn describe_reason(reason: &Option<String>) -> String {
    reason.as_deref().map(|r| format!(": {r}")).unwrap_or_default()
}

fn transition(state: OrchestratorState) {
    tracing::debug!(state = %state, "Orchestrator state transition");
}

#[derive(Debug, thiserror::Error)]
pub enum OrchestratorError {
    #[error("failed to open {}: {source}", .path.display())]
    OpenAudio { path: PathBuf, source: io::Error },
    #[error("upload: {0}")]
    Upload(StagingStoreError),
    #[error("job submission: {0}")]
    Submit(TranscriptionServiceError),
    #[error("polling: {0}")]
    Poll(#[from] PollError),
    #[error("transcription job {job_name} ended with status {status}{}", describe_reason(.reason))]
    TranscriptionFailed {
        job_name: JobName,
        status: JobStatus,
        reason: Option<String>,
    },
    #[error("transcription job {job_name} is still {status}")]
    JobPending { job_name: JobName, status: JobStatus },
    #[error("completed job {0} has no transcript location")]
    MissingTranscriptUri(JobName),
    #[error("transcript fetch: {0}")]
    Fetch(TranscriptFetchError),
}
