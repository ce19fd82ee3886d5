use std::collections::HashMap;
use std::io;
use std::sync::Arc;

use bytes::Bytes;
use futures::stream;

use audioscribe::application::ports::{
    StagingStore, TranscriptFetcher, TranscriptionService,
};
use audioscribe::application::services::{JobPoller, TranscriptionOrchestrator};
use audioscribe::domain::{AudioFileRef, JobName, JobStatus, LanguageCode, StoragePath};
use audioscribe::infrastructure::clock::TokioSleeper;
use audioscribe::infrastructure::storage::MockStagingStore;
use audioscribe::infrastructure::transcription::{
    MOCK_TRANSCRIPT_URI, MockTranscriptFetcher, MockTranscriptionService,
};
use audioscribe::presentation::{Services, Settings};

fn spanish() -> LanguageCode {
    "es-ES".parse().unwrap()
}

fn scaffold_settings() -> Settings {
    let vars = HashMap::from([
        ("SCAFFOLD_MODE".to_string(), "true".to_string()),
        ("MOCK_RESPONSE_DELAY".to_string(), "0".to_string()),
    ]);
    Settings::from_vars(vars).unwrap()
}

#[tokio::test]
async fn given_fresh_mock_service_when_getting_job_then_reports_no_job() {
    let service = MockTranscriptionService::new();

    let job = service.get_job(&JobName::derive("lecture.mp4")).await.unwrap();

    assert!(job.is_none());
}

#[tokio::test]
async fn given_started_mock_job_when_getting_then_reports_completed_with_uri() {
    let service = MockTranscriptionService::new();
    let name = JobName::derive("lecture.mp4");

    let started = service
        .start_job(&name, &spanish(), "mock://staging/lecture.mp4")
        .await
        .unwrap();
    let job = service.get_job(&name).await.unwrap().unwrap();

    assert_eq!(started.status, JobStatus::Queued);
    assert_eq!(job.status, JobStatus::Completed);
    assert_eq!(job.transcript_uri.as_deref(), Some(MOCK_TRANSCRIPT_URI));
}

#[tokio::test]
async fn given_chunked_stream_when_mock_storing_then_counts_every_byte() {
    let chunks = vec![
        Ok(Bytes::from_static(b"hola ")),
        Ok(Bytes::from_static(b"mundo")),
    ];

    let stored = MockStagingStore
        .store(
            &StoragePath::from_raw("lecture.mp4"),
            Box::pin(stream::iter(chunks)),
            None,
        )
        .await
        .unwrap();

    assert_eq!(stored.size, 10);
    assert_eq!(stored.media_uri, "mock://staging/lecture.mp4");
}

#[tokio::test]
async fn given_read_error_mid_stream_when_mock_storing_then_keeps_bytes_read_before_it() {
    let chunks = vec![
        Ok(Bytes::from_static(b"hola ")),
        Err(io::Error::other("disk hiccup")),
        Ok(Bytes::from_static(b"mundo")),
    ];

    let stored = MockStagingStore
        .store(
            &StoragePath::from_raw("lecture.mp4"),
            Box::pin(stream::iter(chunks)),
            None,
        )
        .await
        .unwrap();

    assert_eq!(stored.size, 5);
}

#[tokio::test]
async fn given_any_uri_when_mock_fetching_then_returns_canned_transcript() {
    let transcript = MockTranscriptFetcher.fetch(MOCK_TRANSCRIPT_URI).await.unwrap();

    assert_eq!(transcript.as_str(), "Mock transcript");
}

#[tokio::test]
async fn given_scaffold_settings_when_running_job_then_completes_without_aws() {
    let settings = scaffold_settings();
    assert!(settings.aws.is_none());

    let services = Services::from_settings(&settings).unwrap();
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("lecture.mp4");
    std::fs::write(&path, b"scaffold audio").unwrap();
    let file = AudioFileRef::from_path(path).unwrap();

    let poller = JobPoller::new(
        Arc::clone(&services.transcription_service),
        Arc::new(TokioSleeper),
        services.poll_policy,
    );
    let orchestrator = TranscriptionOrchestrator::new(
        services.staging_store,
        Arc::clone(&services.transcription_service),
        services.transcript_fetcher,
        poller,
    );

    let transcript = orchestrator.run_job(&file, &spanish()).await.unwrap();
    let second = orchestrator.run_job(&file, &spanish()).await.unwrap();

    assert_eq!(transcript.as_str(), "Mock transcript");
    assert_eq!(second, transcript);
}
