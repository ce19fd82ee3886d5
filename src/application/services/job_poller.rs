use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{Sleeper, TranscriptionService, TranscriptionServiceError};
use crate::domain::{JobName, TranscriptionJob};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// How often and for how long to ask about a job. No caps by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub interval: Duration,
    pub max_attempts: Option<u32>,
    pub max_duration: Option<Duration>,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            max_attempts: None,
            max_duration: None,
        }
    }
}

impl PollPolicy {
    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval,
            ..Self::default()
        }
    }
}

pub struct JobPoller {
    transcription_service: Arc<dyn TranscriptionService>,
    sleeper: Arc<dyn Sleeper>,
    policy: PollPolicy,
}

impl JobPoller {
    pub fn new(
        transcription_service: Arc<dyn TranscriptionService>,
        sleeper: Arc<dyn Sleeper>,
        policy: PollPolicy,
    ) -> Self {
        Self {
            transcription_service,
            sleeper,
            policy,
        }
    }

    /// Waits one interval before every status query and returns the first
    /// record that is no longer queued or in progress.
    ///
    /// `max_duration` is an upper bound: no pause starts that would end past it.
    pub async fn wait_for_terminal(&self, name: &JobName) -> Result<TranscriptionJob, PollError> {
        let mut attempts: u32 = 0;
        let mut waited = Duration::ZERO;

        loop {
            if let Some(max_attempts) = self.policy.max_attempts {
                if attempts >= max_attempts {
                    return Err(PollError::AttemptsExhausted { attempts });
                }
            }
            if let Some(max_duration) = self.policy.max_duration {
                if waited + self.policy.interval > max_duration {
                    return Err(PollError::TimedOut { waited });
                }
            }

            self.sleeper.sleep(self.policy.interval).await;
            waited += self.policy.interval;
            attempts += 1;

            let job = self
                .transcription_service
                .get_job(name)
                .await
                .map_err(PollError::Service)?
                .ok_or_else(|| PollError::JobVanished(name.clone()))?;

            if job.status.is_terminal() {
                tracing::debug!(attempt = attempts, status = %job.status, "Job reached terminal status");
                return Ok(job);
            }

            tracing::debug!(attempt = attempts, status = %job.status, "Job still pending");
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PollError {
    #[error("status query failed: {0}")]
    Service(TranscriptionServiceError),
    #[error("job {0} is no longer known to the service")]
    JobVanished(JobName),
    #[error("job still pending after {attempts} status queries")]
    AttemptsExhausted { attempts: u32 },
    #[error("job still pending after {waited:?}")]
    TimedOut { waited: Duration },
}
