use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use super::ScaffoldConfig;
use crate::application::services::{DEFAULT_POLL_INTERVAL, ExistingJobPolicy, PollPolicy};

const DEFAULT_REGION: &str = "us-east-1";
const DEFAULT_AUDIO_DIR: &str = "audios";
const DEFAULT_AUDIO_EXTENSIONS: &str = ".mp4";

#[derive(Debug, Clone)]
pub struct Settings {
    /// `None` only in scaffold mode, where no AWS call is made.
    pub aws: Option<AwsSettings>,
    pub catalog: CatalogSettings,
    pub polling: PollingSettings,
    pub scaffold: ScaffoldConfig,
}

#[derive(Clone)]
pub struct AwsSettings {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: Option<String>,
    pub region: String,
    pub bucket: String,
}

impl std::fmt::Debug for AwsSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsSettings")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"[REDACTED]")
            .field("session_token", &self.session_token.as_ref().map(|_| "[REDACTED]"))
            .field("region", &self.region)
            .field("bucket", &self.bucket)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSettings {
    pub directory: PathBuf,
    pub extensions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollingSettings {
    pub interval: Duration,
    pub max_attempts: Option<u32>,
    pub timeout: Option<Duration>,
    pub resume_pending_jobs: bool,
}

impl PollingSettings {
    pub fn poll_policy(&self) -> PollPolicy {
        PollPolicy {
            interval: self.interval,
            max_attempts: self.max_attempts,
            max_duration: self.timeout,
        }
    }

    pub fn existing_job_policy(&self) -> ExistingJobPolicy {
        if self.resume_pending_jobs {
            ExistingJobPolicy::ResumePolling
        } else {
            ExistingJobPolicy::FetchImmediately
        }
    }
}

/// Environment as seen through `config`: keys arrive lowercased.
#[derive(Debug, Default, Deserialize)]
struct RawSettings {
    aws_access_key_id: Option<String>,
    aws_secret_access_key: Option<String>,
    aws_s3_bucket_audio_file: Option<String>,
    aws_session_token: Option<String>,
    aws_region: Option<String>,
    audioscribe_audio_dir: Option<String>,
    audioscribe_audio_extensions: Option<String>,
    audioscribe_poll_interval_secs: Option<u64>,
    audioscribe_poll_max_attempts: Option<u32>,
    audioscribe_poll_timeout_secs: Option<u64>,
    audioscribe_resume_pending_jobs: Option<bool>,
    scaffold_mode: Option<bool>,
    mock_response_delay: Option<u64>,
}

impl Settings {
    /// Reads the process environment. Call `dotenvy::dotenv()` first to pick
    /// up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(config::Environment::default())
    }

    /// Same rules as [`Self::from_env`] over an explicit set of variables.
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        Self::from_source(config::Environment::default().source(Some(vars)))
    }

    fn from_source(source: config::Environment) -> Result<Self, ConfigError> {
        let raw: RawSettings = config::Config::builder()
            .add_source(source)
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| ConfigError::Load(e.to_string()))?;

        raw.validate()
    }
}

impl RawSettings {
    fn validate(self) -> Result<Settings, ConfigError> {
        let scaffold = ScaffoldConfig {
            enabled: self.scaffold_mode.unwrap_or(false),
            mock_response_delay_ms: self.mock_response_delay.unwrap_or(0),
        };

        let aws = match (
            required("AWS_ACCESS_KEY_ID", self.aws_access_key_id),
            required("AWS_SECRET_ACCESS_KEY", self.aws_secret_access_key),
            required("AWS_S3_BUCKET_AUDIO_FILE", self.aws_s3_bucket_audio_file),
        ) {
            (Ok(access_key_id), Ok(secret_access_key), Ok(bucket)) => Some(AwsSettings {
                access_key_id,
                secret_access_key,
                session_token: non_blank(self.aws_session_token),
                region: non_blank(self.aws_region).unwrap_or_else(|| DEFAULT_REGION.to_string()),
                bucket,
            }),
            _ if scaffold.enabled => None,
            (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => return Err(e),
        };

        let extensions: Vec<String> = non_blank(self.audioscribe_audio_extensions)
            .unwrap_or_else(|| DEFAULT_AUDIO_EXTENSIONS.to_string())
            .split(',')
            .map(|ext| ext.trim().trim_start_matches('.').to_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        if extensions.is_empty() {
            return Err(ConfigError::Invalid {
                var: "AUDIOSCRIBE_AUDIO_EXTENSIONS",
                message: "must name at least one extension".to_string(),
            });
        }

        let interval = self
            .audioscribe_poll_interval_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_POLL_INTERVAL);
        if interval.is_zero() {
            return Err(ConfigError::Invalid {
                var: "AUDIOSCRIBE_POLL_INTERVAL_SECS",
                message: "must be at least 1".to_string(),
            });
        }
        if self.audioscribe_poll_max_attempts == Some(0) {
            return Err(ConfigError::Invalid {
                var: "AUDIOSCRIBE_POLL_MAX_ATTEMPTS",
                message: "must be at least 1 when set".to_string(),
            });
        }

        Ok(Settings {
            aws,
            catalog: CatalogSettings {
                directory: PathBuf::from(
                    non_blank(self.audioscribe_audio_dir)
                        .unwrap_or_else(|| DEFAULT_AUDIO_DIR.to_string()),
                ),
                extensions,
            },
            polling: PollingSettings {
                interval,
                max_attempts: self.audioscribe_poll_max_attempts,
                timeout: self.audioscribe_poll_timeout_secs.map(Duration::from_secs),
                resume_pending_jobs: self.audioscribe_resume_pending_jobs.unwrap_or(true),
            },
            scaffold,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required(var: &'static str, value: Option<String>) -> Result<String, ConfigError> {
    non_blank(value).ok_or(ConfigError::Missing(var))
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Load(String),
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("env {var}: {message}")]
    Invalid { var: &'static str, message: String },
}
