use std::path::PathBuf;
use std::sync::Arc;

use super::audio_catalog::{AudioCatalog, CatalogError};
use super::transcription_orchestrator::{OrchestratorError, TranscriptionOrchestrator};
use crate::application::ports::{Selector, SelectorError};
use crate::domain::{AudioFileRef, LanguageCode, Transcript};
use crate::shutdown::ShutdownSignal;

/// One interactive invocation: list the recordings, ask the user, transcribe.
pub struct TranscriptionSession {
    catalog: AudioCatalog,
    selector: Arc<dyn Selector>,
    orchestrator: TranscriptionOrchestrator,
    shutdown: Option<ShutdownSignal>,
}

impl TranscriptionSession {
    pub fn new(
        catalog: AudioCatalog,
        selector: Arc<dyn Selector>,
        orchestrator: TranscriptionOrchestrator,
    ) -> Self {
        Self {
            catalog,
            selector,
            orchestrator,
            shutdown: None,
        }
    }

    /// Stops the transcription as soon as `shutdown` fires, whatever stage it is in.
    pub fn with_shutdown(mut self, shutdown: ShutdownSignal) -> Self {
        self.shutdown = Some(shutdown);
        self
    }

    pub async fn run(&self) -> Result<Transcript, SessionError> {
        let candidates = self.catalog.list_candidates()?;
        if candidates.is_empty() {
            return Err(SessionError::NoCandidates(
                self.catalog.directory().to_path_buf(),
            ));
        }

        let file = self.choose_audio_file(candidates).await?;
        let language = self.choose_language_code().await?;
        tracing::debug!(file = %file.base, language = %language, "Selection complete");

        self.transcribe(&file, &language).await
    }

    async fn transcribe(
        &self,
        file: &AudioFileRef,
        language: &LanguageCode,
    ) -> Result<Transcript, SessionError> {
        let Some(mut shutdown) = self.shutdown.clone() else {
            return Ok(self.orchestrator.run_job(file, language).await?);
        };

        tokio::select! {
            biased;
            _ = shutdown.wait() => {
                tracing::warn!(
                    file = %file.base,
                    "Interrupted, an unfinished upload or a running job may be left behind"
                );
                Err(SessionError::Interrupted)
            }
            result = self.orchestrator.run_job(file, language) => Ok(result?),
        }
    }

    async fn choose_audio_file(
        &self,
        candidates: Vec<AudioFileRef>,
    ) -> Result<AudioFileRef, SessionError> {
        let selector = Arc::clone(&self.selector);
        let choice =
            tokio::task::spawn_blocking(move || selector.choose_audio_file(&candidates)).await;
        settle(choice)
    }

    async fn choose_language_code(&self) -> Result<LanguageCode, SessionError> {
        let selector = Arc::clone(&self.selector);
        let choice = tokio::task::spawn_blocking(move || {
            selector.choose_language_code(&LanguageCode::supported())
        })
        .await;
        settle(choice)
    }
}

/// Anything short of a concrete choice ends the session as a cancellation.
fn settle<T>(
    choice: Result<Result<Option<T>, SelectorError>, tokio::task::JoinError>,
) -> Result<T, SessionError> {
    match choice {
        Ok(Ok(Some(value))) => Ok(value),
        Ok(Ok(None)) => Err(SessionError::UserCancelled),
        Ok(Err(e)) => {
            tracing::debug!(error = %e, "Prompt aborted");
            Err(SessionError::UserCancelled)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Prompt task did not finish");
            Err(SessionError::UserCancelled)
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("no audio files found in {}", .0.display())]
    NoCandidates(PathBuf),
    #[error("no selection made")]
    UserCancelled,
    #[error("interrupted")]
    Interrupted,
    #[error(transparent)]
    Transcription(#[from] OrchestratorError),
}
