use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// A candidate recording found in the audio directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioFileRef {
    pub name: String,
    pub base: String,
    pub extension: String,
    pub path: PathBuf,
}

impl AudioFileRef {
    /// Splits a path into stem, file name and extension.
    ///
    /// Returns `None` for paths without a UTF-8 file name. The extension is
    /// stored without its leading dot and may be empty.
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let base = path.file_name().and_then(OsStr::to_str)?.to_string();
        let name = path
            .file_stem()
            .and_then(OsStr::to_str)
            .unwrap_or(&base)
            .to_string();
        let extension = path
            .extension()
            .and_then(OsStr::to_str)
            .unwrap_or_default()
            .to_string();

        Some(Self {
            name,
            base,
            extension,
            path,
        })
    }

    pub fn has_extension_in(&self, allowed: &[String]) -> bool {
        allowed
            .iter()
            .map(|ext| ext.trim_start_matches('.'))
            .any(|ext| ext.eq_ignore_ascii_case(&self.extension))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
