use std::io;

use bytes::Bytes;
use futures::stream::BoxStream;

use crate::domain::{StoragePath, StoredObject};

#[async_trait::async_trait]
pub trait StagingStore: Send + Sync {
    /// Writes the stream under `path` and returns where the service can read it.
    ///
    /// Read errors coming out of `stream` are reported as warnings and end the
    /// stream; whatever was read before them is still committed.
    async fn store(
        &self,
        path: &StoragePath,
        stream: BoxStream<'_, Result<Bytes, io::Error>>,
        content_length: Option<u64>,
    ) -> Result<StoredObject, StagingStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StagingStoreError {
    #[error("store configuration invalid: {0}")]
    Configuration(String),
    #[error("upload failed: {0}")]
    UploadFailed(String),
}
