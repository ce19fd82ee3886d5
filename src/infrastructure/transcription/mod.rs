mod aws_transcribe_service;
mod http_transcript_fetcher;
mod mock_transcript_fetcher;
mod mock_transcription_service;

pub use aws_transcribe_service::AwsTranscribeService;
pub use http_transcript_fetcher::HttpTranscriptFetcher;
pub use mock_transcript_fetcher::MockTranscriptFetcher;
pub use mock_transcription_service::{MOCK_TRANSCRIPT_URI, MockTranscriptionService};
