mod selector;
mod sleeper;
mod staging_store;
mod transcript_fetcher;
mod transcription_service;

pub use selector::{Selector, SelectorError};
pub use sleeper::Sleeper;
pub use staging_store::{StagingStore, StagingStoreError};
pub use transcript_fetcher::{TranscriptFetchError, TranscriptFetcher};
pub use transcription_service::{TranscriptionService, TranscriptionServiceError};
