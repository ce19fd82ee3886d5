use std::io;
use std::path::{Path, PathBuf};

use crate::domain::AudioFileRef;

/// The directory of recordings the user picks from.
#[derive(Debug, Clone)]
pub struct AudioCatalog {
    directory: PathBuf,
    allowed_extensions: Vec<String>,
}

impl AudioCatalog {
    pub fn new(directory: impl Into<PathBuf>, allowed_extensions: Vec<String>) -> Self {
        Self {
            directory: directory.into(),
            allowed_extensions,
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn list_candidates(&self) -> Result<Vec<AudioFileRef>, CatalogError> {
        list_candidates(&self.directory, &self.allowed_extensions)
    }
}

/// Lists the entries of `directory` whose extension is in `allowed_extensions`,
/// sorted by name.
pub fn list_candidates(
    directory: &Path,
    allowed_extensions: &[String],
) -> Result<Vec<AudioFileRef>, CatalogError> {
    let read_error = |source: io::Error| CatalogError::DirectoryRead {
        path: directory.to_path_buf(),
        source,
    };

    let mut candidates = Vec::new();
    for entry in std::fs::read_dir(directory).map_err(read_error)? {
        let entry = entry.map_err(read_error)?;
        if entry.file_type().map(|t| t.is_dir()).unwrap_or(true) {
            continue;
        }
        let Some(file) = AudioFileRef::from_path(entry.path()) else {
            tracing::debug!(path = ?entry.path(), "Skipping entry with non UTF-8 name");
            continue;
        };
        if file.has_extension_in(allowed_extensions) {
            candidates.push(file);
        }
    }

    candidates.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.base.cmp(&b.base)));
    tracing::debug!(
        directory = %directory.display(),
        count = candidates.len(),
        "Audio catalog loaded"
    );

    Ok(candidates)
}

/// Prompt labels in candidate order: the stem, or the full file name when
/// another candidate shares that stem.
pub fn selection_labels(candidates: &[AudioFileRef]) -> Vec<String> {
    candidates
        .iter()
        .map(|file| {
            let shared = candidates
                .iter()
                .filter(|other| other.name == file.name)
                .count()
                > 1;
            if shared {
                file.base.clone()
            } else {
                file.name.clone()
            }
        })
        .collect()
}

pub fn find_by_name<'a>(candidates: &'a [AudioFileRef], name: &str) -> Option<&'a AudioFileRef> {
    candidates.iter().find(|file| file.name == name)
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read audio directory {}: {source}", .path.display())]
    DirectoryRead { path: PathBuf, source: io::Error },
}
