use std::fmt;

use md5::{Digest, Md5};

const JOB_NAME_PREFIX: &str = "TS-";

/// Remote transcription job name, derived from the uploaded file name only.
///
/// The same base name always yields the same job name, which is what lets a
/// second run find the job started by the first one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobName(String);

impl JobName {
    pub fn derive(base_file_name: &str) -> Self {
        let digest = Md5::digest(base_file_name.as_bytes());
        Self(format!("{}{:x}", JOB_NAME_PREFIX, digest))
    }

    pub fn from_raw(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
