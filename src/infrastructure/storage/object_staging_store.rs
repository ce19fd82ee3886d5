use std::io;
use std::sync::Arc;

use bytes::Bytes;
use futures::StreamExt;
use futures::stream::BoxStream;
use object_store::aws::AmazonS3Builder;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, WriteMultipart};

use crate::application::ports::{StagingStore, StagingStoreError};
use crate::domain::{StoragePath, StoredObject};

/// S3 rejects multipart parts below 5 MiB, except the last one.
const PART_SIZE: usize = 5 * 1024 * 1024;
const MAX_PARTS_IN_FLIGHT: usize = 4;

pub struct ObjectStagingStore {
    inner: Arc<dyn ObjectStore>,
    bucket: String,
}

impl ObjectStagingStore {
    pub fn s3(
        bucket: &str,
        region: &str,
        access_key_id: &str,
        secret_access_key: &str,
        session_token: Option<&str>,
    ) -> Result<Self, StagingStoreError> {
        let mut builder = AmazonS3Builder::new()
            .with_bucket_name(bucket)
            .with_region(region)
            .with_access_key_id(access_key_id)
            .with_secret_access_key(secret_access_key);
        if let Some(token) = session_token {
            builder = builder.with_token(token);
        }
        let store = builder
            .build()
            .map_err(|e| StagingStoreError::Configuration(e.to_string()))?;

        Ok(Self::from_store(Arc::new(store), bucket))
    }

    /// Wraps an already built store; `bucket` only names the media URI.
    pub fn from_store(inner: Arc<dyn ObjectStore>, bucket: &str) -> Self {
        Self {
            inner,
            bucket: bucket.to_string(),
        }
    }

    pub fn media_uri(&self, path: &StoragePath) -> String {
        format!("s3://{}/{}", self.bucket, path)
    }
}

#[async_trait::async_trait]
impl StagingStore for ObjectStagingStore {
    async fn store(
        &self,
        path: &StoragePath,
        mut stream: BoxStream<'_, Result<Bytes, io::Error>>,
        content_length: Option<u64>,
    ) -> Result<StoredObject, StagingStoreError> {
        let store_path = StorePath::from(path.as_str());
        let upload = self
            .inner
            .put_multipart(&store_path)
            .await
            .map_err(|e| StagingStoreError::UploadFailed(e.to_string()))?;
        let mut writer = WriteMultipart::new_with_chunk_size(upload, PART_SIZE);

        tracing::debug!(key = %path, content_length = ?content_length, "Starting upload");

        let mut total_bytes: u64 = 0;
        while let Some(chunk) = stream.next().await {
            let bytes = match chunk {
                Ok(b) => b,
                Err(e) => {
                    tracing::warn!(error = %e, key = %path, "Read error while uploading, committing what was read");
                    break;
                }
            };
            if let Err(e) = writer.wait_for_capacity(MAX_PARTS_IN_FLIGHT).await {
                let _ = writer.abort().await;
                return Err(StagingStoreError::UploadFailed(e.to_string()));
            }
            total_bytes += bytes.len() as u64;
            writer.write(&bytes);
        }

        writer
            .finish()
            .await
            .map_err(|e| StagingStoreError::UploadFailed(e.to_string()))?;

        Ok(StoredObject {
            path: path.clone(),
            size: total_bytes,
            media_uri: self.media_uri(path),
        })
    }
}
