use axum::body::Body;
use axum::response::{IntoResponse, Response};
use http::{HeaderValue, StatusCode, header};
use serde::Serialize;

/// 所有 JSON 响应使用的 Content-Type
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// 根据扩展名猜测 MIME 类型
///
/// # 参数
///
/// * `extension` - 扩展名，可以带或不带前导点，大小写不敏感
///
/// # 返回值
///
/// 识别出的 MIME 类型，未知扩展名返回 `None`
pub fn guess_mime_type(extension: &str) -> Option<String> {
    let ext = extension.trim_start_matches('.');
    if ext.is_empty() {
        return None;
    }
    mime_guess::from_ext(ext).first().map(|mime| mime.to_string())
}

/// 将对象序列化为 JSON 并构建响应
///
/// # 参数
///
/// * `status` - 响应状态码
/// * `body` - 要序列化的对象
///
/// # 返回值
///
/// Content-Type 为 [`JSON_CONTENT_TYPE`] 的响应；序列化失败时返回空的 500 响应
pub fn render<T: Serialize>(status: StatusCode, body: &T) -> Response {
    let bytes = match serde_json::to_vec(body) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!("序列化响应失败: {}", e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(JSON_CONTENT_TYPE),
    );
    response
}
