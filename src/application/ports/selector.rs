use crate::domain::{AudioFileRef, LanguageCode};

/// Asks a person to pick the recording and its language.
///
/// Implementations block on user input. `Ok(None)` means nothing was chosen.
pub trait Selector: Send + Sync {
    fn choose_audio_file(
        &self,
        candidates: &[AudioFileRef],
    ) -> Result<Option<AudioFileRef>, SelectorError>;

    fn choose_language_code(
        &self,
        languages: &[LanguageCode],
    ) -> Result<Option<LanguageCode>, SelectorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SelectorError {
    #[error("prompt failed: {0}")]
    Prompt(String),
}
