//! S3预签名URL模块
//!
//! 该模块负责生成上传对象用的预签名 PUT URL。

use crate::s3::storage::{PresignedPut, StorageError, UploadDescriptor};
use aws_sdk_s3::Client;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::presigning::PresigningConfig;
use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

/// 为上传生成预签名 PUT 请求。
///
/// # 参数
///
/// * `s3_client` - S3 客户端实例。
/// * `upload` - 存储桶、键、内容类型和元数据。
/// * `expires_in` - URL 有效期。
///
/// # 返回值
///
/// 预签名 URL 以及上传时必须携带的签名请求头。
///
/// # Errors
///
/// 有效期无效或签名失败时返回错误。
pub async fn presign_put_object(
    s3_client: &Client,
    upload: &UploadDescriptor,
    expires_in: Duration,
) -> Result<PresignedPut, StorageError> {
    let presigning_config = PresigningConfig::expires_in(expires_in)
        .map_err(|e| StorageError::InvalidExpiry(e.to_string()))?;

    let metadata = (!upload.metadata.is_empty()).then(|| {
        upload
            .metadata
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect::<HashMap<_, _>>()
    });

    let presigned_request = s3_client
        .put_object()
        .bucket(&upload.bucket)
        .key(&upload.key)
        .set_content_type(upload.content_type.clone())
        .set_metadata(metadata)
        .presigned(presigning_config)
        .await
        .map_err(|e| StorageError::Presign(DisplayErrorContext(&e).to_string()))?;

    let signed_headers = presigned_request
        .headers()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect::<BTreeMap<_, _>>();

    Ok(PresignedPut {
        url: presigned_request.uri().to_string(),
        signed_headers,
    })
}
