mod audio_file;
mod job_name;
mod job_status;
mod language_code;
mod storage_path;
mod transcript;
mod transcription_job;

pub use audio_file::AudioFileRef;
pub use job_name::JobName;
pub use job_status::JobStatus;
pub use language_code::{LanguageCode, SUPPORTED_LANGUAGE_CODES, UnsupportedLanguage};
pub use storage_path::{StoragePath, StoredObject};
pub use transcript::{Transcript, TranscriptParseError};
pub use transcription_job::TranscriptionJob;
