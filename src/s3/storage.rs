//! 存储后端抽象
//!
//! 处理器只依赖 [`ObjectStorage`]，生产环境使用 [`super::S3Storage`]，
//! 测试中使用 mockall 生成的 `MockObjectStorage`。

use async_trait::async_trait;
use mockall::automock;
use std::collections::BTreeMap;
use std::time::Duration;
use thiserror::Error;

/// 存储后端错误
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("列举存储桶失败: {0}")]
    ListBuckets(String),

    #[error("生成预签名 URL 失败: {0}")]
    Presign(String),

    #[error("预签名有效期无效: {0}")]
    InvalidExpiry(String),
}

/// 一次上传所需的描述信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadDescriptor {
    pub bucket: String,
    pub key: String,
    /// 为 `None` 时不对 Content-Type 做约束
    pub content_type: Option<String>,
    pub metadata: BTreeMap<String, String>,
}

/// 预签名的 PUT 请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresignedPut {
    /// 带签名的完整 URL
    pub url: String,
    /// 上传时必须携带的请求头（名称 -> 值）
    pub signed_headers: BTreeMap<String, String>,
}

/// 对象存储操作
#[automock]
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// 列举当前凭据可见的所有存储桶名称。
    async fn list_bucket_names(&self) -> Result<Vec<String>, StorageError>;

    /// 为 `upload` 生成有效期为 `expires_in` 的预签名 PUT 请求。
    ///
    /// 该操作只在本地计算签名，不会向存储后端写入任何数据。
    async fn presign_put(
        &self,
        upload: &UploadDescriptor,
        expires_in: Duration,
    ) -> Result<PresignedPut, StorageError>;
}
