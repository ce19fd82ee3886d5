use std::fmt;
use std::str::FromStr;

/// Language codes the transcription job may be started with.
pub const SUPPORTED_LANGUAGE_CODES: &[&str] = &["es-ES"];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn supported() -> Vec<LanguageCode> {
        SUPPORTED_LANGUAGE_CODES
            .iter()
            .map(|code| LanguageCode((*code).to_string()))
            .collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for LanguageCode {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SUPPORTED_LANGUAGE_CODES
            .iter()
            .find(|code| **code == s)
            .map(|code| LanguageCode((*code).to_string()))
            .ok_or_else(|| UnsupportedLanguage(s.to_string()))
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language code: {0}")]
pub struct UnsupportedLanguage(pub String);
