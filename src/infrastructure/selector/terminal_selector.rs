use dialoguer::Select;
use dialoguer::theme::ColorfulTheme;

use crate::application::ports::{Selector, SelectorError};
use crate::application::services::selection_labels;
use crate::domain::{AudioFileRef, LanguageCode};

/// Arrow-key prompts on the controlling terminal. Esc or `q` cancels.
pub struct TerminalSelector {
    theme: ColorfulTheme,
}

impl TerminalSelector {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }

    fn select(&self, prompt: &str, items: &[String]) -> Result<Option<usize>, SelectorError> {
        Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_opt()
            .map_err(|e| SelectorError::Prompt(e.to_string()))
    }
}

impl Default for TerminalSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl Selector for TerminalSelector {
    fn choose_audio_file(
        &self,
        candidates: &[AudioFileRef],
    ) -> Result<Option<AudioFileRef>, SelectorError> {
        let labels = selection_labels(candidates);
        let choice = self.select("Choose an audio file", &labels)?;

        Ok(choice.and_then(|index| candidates.get(index).cloned()))
    }

    fn choose_language_code(
        &self,
        languages: &[LanguageCode],
    ) -> Result<Option<LanguageCode>, SelectorError> {
        let codes: Vec<String> = languages.iter().map(|l| l.to_string()).collect();
        let choice = self.select("Choose the language", &codes)?;

        Ok(choice.and_then(|index| languages.get(index).cloned()))
    }
}
