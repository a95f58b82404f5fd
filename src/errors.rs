use crate::models::ErrorMessage;
use crate::s3::StorageError;
use crate::utils::headers::render;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;

/// 处理器边界上的错误
///
/// 响应体只包含与状态码对应的通用消息，具体原因只写入日志。
#[derive(Debug, Error)]
pub enum PresignError {
    #[error("缺少 filename 参数")]
    MissingFilename,

    #[error("存储桶 {0} 不存在")]
    BucketNotFound(String),

    #[error(transparent)]
    Upstream(#[from] StorageError),

    #[error("{0} 超时")]
    Timeout(&'static str),
}

impl PresignError {
    pub fn status(&self) -> StatusCode {
        match self {
            PresignError::MissingFilename => StatusCode::BAD_REQUEST,
            PresignError::BucketNotFound(_) => StatusCode::NOT_FOUND,
            PresignError::Upstream(_) | PresignError::Timeout(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for PresignError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            PresignError::MissingFilename => tracing::debug!("{}", self),
            PresignError::BucketNotFound(_) => tracing::warn!("{}", self),
            _ => tracing::error!("{}", self),
        }

        let message = status
            .canonical_reason()
            .unwrap_or("Internal Server Error")
            .to_string();
        render(status, &ErrorMessage { message })
    }
}
