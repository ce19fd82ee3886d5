mod audio_catalog;
mod job_poller;
mod transcription_orchestrator;
mod transcription_session;

pub use audio_catalog::{
    AudioCatalog, CatalogError, find_by_name, list_candidates, selection_labels,
};
pub use job_poller::{DEFAULT_POLL_INTERVAL, JobPoller, PollError, PollPolicy};
pub use transcription_orchestrator::{
    ExistingJobPolicy, OrchestratorError, OrchestratorState, TranscriptionOrchestrator,
};
pub use transcription_session::{SessionError, TranscriptionSession};
