use super::constants::{OP_LIST_BUCKETS, OP_PRESIGN_PUT, PRESIGN_EXPIRY};
use crate::AppState;
use crate::errors::PresignError;
use crate::models::{PresignedUpload, UploadQuery, UploadRequest};
use crate::s3::{StorageError, UploadDescriptor};
use crate::utils::headers::{guess_mime_type, render};
use crate::utils::key::new_object_key;
use crate::utils::path::extension_with_dot;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Response,
};
use std::future::Future;
use std::time::Duration;

/// 生成预签名上传 URL。
///
/// 处理流程：
/// 1. 校验 `filename` 参数；
/// 2. 列举存储桶，确认配置的目标存储桶存在；
/// 3. 由扩展名推断 Content-Type，生成随机对象键；
/// 4. 生成 5 分钟有效的预签名 PUT URL，并返回上传时必须携带的签名请求头。
///
/// # 参数
///
/// * `State(state)` - 应用状态，包含存储后端和配置。
/// * `Query(pairs)` - 查询参数键值对，`filename` 和可选的 `metadata` 各取第一个值。
///
/// # 返回值
///
/// 成功时返回 [`PresignedUpload`] JSON；失败时返回 [`PresignError`] 对应的状态码和通用消息。
pub async fn handle_presign(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, PresignError> {
    let query = UploadQuery::from_pairs(pairs);
    let request = UploadRequest::from_query(query).ok_or(PresignError::MissingFilename)?;
    let bucket = &state.settings.bucket;
    let limit = state.settings.upstream_timeout;

    // 1. 确认目标存储桶存在
    let buckets = with_timeout(limit, OP_LIST_BUCKETS, state.storage.list_bucket_names()).await?;
    if !buckets.iter().any(|name| name == bucket) {
        return Err(PresignError::BucketNotFound(bucket.clone()));
    }

    // 2. 构建上传描述
    let extension = extension_with_dot(&request.filename);
    let upload = UploadDescriptor {
        bucket: bucket.clone(),
        key: new_object_key(&extension),
        content_type: guess_mime_type(&extension),
        metadata: request.metadata,
    };

    // 3. 生成预签名 URL
    let presigned = with_timeout(
        limit,
        OP_PRESIGN_PUT,
        state.storage.presign_put(&upload, PRESIGN_EXPIRY),
    )
    .await?;

    tracing::info!(
        bucket = %upload.bucket,
        key = %upload.key,
        content_type = upload.content_type.as_deref().unwrap_or(""),
        "已生成预签名上传 URL"
    );

    Ok(render(
        StatusCode::OK,
        &PresignedUpload {
            metadata: upload.metadata,
            signed_headers: presigned.signed_headers,
            url: presigned.url,
        },
    ))
}

/// 为上游调用加上超时限制
async fn with_timeout<T, F>(limit: Duration, op: &'static str, fut: F) -> Result<T, PresignError>
where
    F: Future<Output = Result<T, StorageError>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => Ok(result?),
        Err(_) => Err(PresignError::Timeout(op)),
    }
}
