pub mod clock;
pub mod observability;
pub mod selector;
pub mod storage;
pub mod transcription;
