use async_trait::async_trait;
use aws_sdk_transcribe::Client;
use aws_sdk_transcribe::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_transcribe::error::DisplayErrorContext;
use aws_sdk_transcribe::types::{LanguageCode as AwsLanguageCode, Media};

use crate::application::ports::{TranscriptionService, TranscriptionServiceError};
use crate::domain::{JobName, JobStatus, LanguageCode, TranscriptionJob};

pub struct AwsTranscribeService {
    client: Client,
}

impl AwsTranscribeService {
    pub fn new(
        region: &str,
        access_key_id: &str,
        secret_access_key: &str,
        session_token: Option<&str>,
    ) -> Self {
        Self::build(region, access_key_id, secret_access_key, session_token, None)
    }

    /// Same as [`Self::new`] but sends every call to `endpoint_url`.
    pub fn with_endpoint(
        endpoint_url: &str,
        region: &str,
        access_key_id: &str,
        secret_access_key: &str,
    ) -> Self {
        Self::build(
            region,
            access_key_id,
            secret_access_key,
            None,
            Some(endpoint_url),
        )
    }

    fn build(
        region: &str,
        access_key_id: &str,
        secret_access_key: &str,
        session_token: Option<&str>,
        endpoint_url: Option<&str>,
    ) -> Self {
        let credentials = Credentials::new(
            access_key_id,
            secret_access_key,
            session_token.map(str::to_string),
            None,
            "audioscribe-settings",
        );
        let mut config = aws_sdk_transcribe::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .credentials_provider(credentials);
        if let Some(url) = endpoint_url {
            config = config.endpoint_url(url);
        }

        Self {
            client: Client::from_conf(config.build()),
        }
    }
}

#[async_trait]
impl TranscriptionService for AwsTranscribeService {
    async fn get_job(
        &self,
        name: &JobName,
    ) -> Result<Option<TranscriptionJob>, TranscriptionServiceError> {
        let response = self
            .client
            .get_transcription_job()
            .transcription_job_name(name.as_str())
            .send()
            .await;

        let output = match response {
            Ok(output) => output,
            Err(e)
                if e.as_service_error()
                    .is_some_and(|service| service.is_not_found_exception()) =>
            {
                tracing::debug!(job_name = %name, "No transcription job under this name");
                return Ok(None);
            }
            Err(e) => {
                return Err(TranscriptionServiceError::ApiRequestFailed(
                    DisplayErrorContext(&e).to_string(),
                ));
            }
        };

        Ok(output
            .transcription_job()
            .map(|job| to_domain_job(name, job)))
    }

    async fn start_job(
        &self,
        name: &JobName,
        language: &LanguageCode,
        media_uri: &str,
    ) -> Result<TranscriptionJob, TranscriptionServiceError> {
        tracing::debug!(job_name = %name, media_uri, "Starting transcription job");

        let output = self
            .client
            .start_transcription_job()
            .transcription_job_name(name.as_str())
            .language_code(AwsLanguageCode::from(language.as_str()))
            .media(Media::builder().media_file_uri(media_uri).build())
            .send()
            .await
            .map_err(|e| {
                TranscriptionServiceError::ApiRequestFailed(DisplayErrorContext(&e).to_string())
            })?;

        output
            .transcription_job()
            .map(|job| to_domain_job(name, job))
            .ok_or_else(|| {
                TranscriptionServiceError::UnexpectedResponse(
                    "start response carried no job".to_string(),
                )
            })
    }
}

fn to_domain_job(
    requested: &JobName,
    job: &aws_sdk_transcribe::types::TranscriptionJob,
) -> TranscriptionJob {
    let name = job
        .transcription_job_name()
        .map(JobName::from_raw)
        .unwrap_or_else(|| requested.clone());
    let status = job
        .transcription_job_status()
        .map(|s| JobStatus::from_wire(s.as_str()))
        .unwrap_or_else(|| JobStatus::Unknown("MISSING".to_string()));

    TranscriptionJob {
        name,
        status,
        transcript_uri: job
            .transcript()
            .and_then(|t| t.transcript_file_uri())
            .map(str::to_string),
        failure_reason: job.failure_reason().map(str::to_string),
    }
}
