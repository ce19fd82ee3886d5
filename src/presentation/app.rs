use std::sync::Arc;

use crate::application::ports::{Sleeper, StagingStore, TranscriptFetcher, TranscriptionService};
use crate::application::services::{
    AudioCatalog, JobPoller, PollPolicy, TranscriptionOrchestrator, TranscriptionSession,
};
use crate::infrastructure::clock::TokioSleeper;
use crate::infrastructure::selector::TerminalSelector;
use crate::infrastructure::storage::{MockStagingStore, ObjectStagingStore};
use crate::infrastructure::transcription::{
    AwsTranscribeService, HttpTranscriptFetcher, MockTranscriptFetcher, MockTranscriptionService,
};
use crate::presentation::config::{ConfigError, Settings};
use crate::shutdown::ShutdownSignal;

/// Ports the session runs against.
pub struct Services {
    pub staging_store: Arc<dyn StagingStore>,
    pub transcription_service: Arc<dyn TranscriptionService>,
    pub transcript_fetcher: Arc<dyn TranscriptFetcher>,
    pub poll_policy: PollPolicy,
}

impl Services {
    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        if settings.scaffold.enabled {
            tracing::warn!("Scaffold mode enabled, no AWS call will be made");
            return Ok(Self {
                staging_store: Arc::new(MockStagingStore),
                transcription_service: Arc::new(MockTranscriptionService::new()),
                transcript_fetcher: Arc::new(MockTranscriptFetcher),
                poll_policy: PollPolicy {
                    interval: settings.scaffold.mock_response_delay(),
                    ..settings.polling.poll_policy()
                },
            });
        }

        let aws = settings
            .aws
            .as_ref()
            .ok_or(ConfigError::Missing("AWS_ACCESS_KEY_ID"))?;

        let staging_store = ObjectStagingStore::s3(
            &aws.bucket,
            &aws.region,
            &aws.access_key_id,
            &aws.secret_access_key,
            aws.session_token.as_deref(),
        )?;
        let transcription_service = AwsTranscribeService::new(
            &aws.region,
            &aws.access_key_id,
            &aws.secret_access_key,
            aws.session_token.as_deref(),
        );

        Ok(Self {
            staging_store: Arc::new(staging_store),
            transcription_service: Arc::new(transcription_service),
            transcript_fetcher: Arc::new(HttpTranscriptFetcher::new()),
            poll_policy: settings.polling.poll_policy(),
        })
    }
}

pub fn build_session(
    settings: &Settings,
    services: Services,
    shutdown: ShutdownSignal,
) -> TranscriptionSession {
    let sleeper: Arc<dyn Sleeper> = Arc::new(TokioSleeper);
    let poller = JobPoller::new(
        Arc::clone(&services.transcription_service),
        sleeper,
        services.poll_policy,
    );

    let orchestrator = TranscriptionOrchestrator::new(
        services.staging_store,
        services.transcription_service,
        services.transcript_fetcher,
        poller,
    )
    .with_existing_job_policy(settings.polling.existing_job_policy());

    let catalog = AudioCatalog::new(
        settings.catalog.directory.clone(),
        settings.catalog.extensions.clone(),
    );

    TranscriptionSession::new(catalog, Arc::new(TerminalSelector::new()), orchestrator)
        .with_shutdown(shutdown)
}
