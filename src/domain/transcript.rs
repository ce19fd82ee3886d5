use std::fmt;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript(String);

impl Transcript {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Pulls the first transcript out of a result document shaped like
    /// `{"results":{"transcripts":[{"transcript":"..."}]}}`.
    pub fn from_result_json(body: &[u8]) -> Result<Self, TranscriptParseError> {
        let document: TranscriptDocument = serde_json::from_slice(body)
            .map_err(|e| TranscriptParseError::Malformed(e.to_string()))?;

        document
            .results
            .transcripts
            .into_iter()
            .next()
            .map(|entry| Self(entry.transcript))
            .ok_or(TranscriptParseError::Empty)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Deserialize)]
struct TranscriptDocument {
    results: TranscriptResults,
}

#[derive(Deserialize)]
struct TranscriptResults {
    transcripts: Vec<TranscriptEntry>,
}

#[derive(Deserialize)]
struct TranscriptEntry {
    transcript: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranscriptParseError {
    #[error("malformed transcript document: {0}")]
    Malformed(String),
    #[error("transcript document has no transcripts")]
    Empty,
}
