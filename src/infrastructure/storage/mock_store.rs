use std::io;

use bytes::Bytes;
use futures::StreamExt;
use futures::stream::BoxStream;

use crate::application::ports::{StagingStore, StagingStoreError};
use crate::domain::{StoragePath, StoredObject};

/// Drains the stream and pretends it landed in a bucket.
pub struct MockStagingStore;

#[async_trait::async_trait]
impl StagingStore for MockStagingStore {
    async fn store(
        &self,
        path: &StoragePath,
        mut stream: BoxStream<'_, Result<Bytes, io::Error>>,
        _content_length: Option<u64>,
    ) -> Result<StoredObject, StagingStoreError> {
        let mut size = 0u64;
        while let Some(chunk) = stream.next().await {
            match chunk {
                Ok(bytes) => size += bytes.len() as u64,
                Err(e) => {
                    tracing::warn!(error = %e, key = %path, "Read error while uploading, committing what was read");
                    break;
                }
            }
        }

        Ok(StoredObject {
            path: path.clone(),
            size,
            media_uri: format!("mock://staging/{}", path),
        })
    }
}
