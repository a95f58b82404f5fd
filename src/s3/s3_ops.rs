//! S3操作模块
//!
//! 该模块用 `aws_sdk_s3` 实现 [`ObjectStorage`]。

use crate::s3::presign::presign_put_object;
use crate::s3::storage::{ObjectStorage, PresignedPut, StorageError, UploadDescriptor};
use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::error::DisplayErrorContext;
use std::sync::Arc;
use std::time::Duration;

/// 基于 AWS SDK 的存储后端
#[derive(Debug, Clone)]
pub struct S3Storage {
    client: Arc<Client>,
}

impl S3Storage {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStorage for S3Storage {
    async fn list_bucket_names(&self) -> Result<Vec<String>, StorageError> {
        let output = self
            .client
            .list_buckets()
            .send()
            .await
            .map_err(|e| StorageError::ListBuckets(DisplayErrorContext(&e).to_string()))?;

        Ok(output
            .buckets()
            .iter()
            .filter_map(|bucket| bucket.name().map(str::to_string))
            .collect())
    }

    async fn presign_put(
        &self,
        upload: &UploadDescriptor,
        expires_in: Duration,
    ) -> Result<PresignedPut, StorageError> {
        presign_put_object(&self.client, upload, expires_in).await
    }
}
