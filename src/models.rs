//! 请求与响应的数据结构

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `GET /` 的原始查询参数
#[derive(Debug, Default, PartialEq, Eq)]
pub struct UploadQuery {
    pub filename: Option<String>,
    /// URL 编码的 JSON 对象，值必须为字符串
    pub metadata: Option<String>,
}

impl UploadQuery {
    /// 从解码后的查询参数键值对构建。
    ///
    /// 同一参数出现多次时取第一个值，未知参数被忽略。
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (name, value) in pairs {
            let slot = match name.as_str() {
                "filename" => &mut query.filename,
                "metadata" => &mut query.metadata,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

/// 校验后的上传请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub filename: String,
    pub metadata: BTreeMap<String, String>,
}

impl UploadRequest {
    /// 从查询参数构建上传请求。
    ///
    /// 文件名缺失或为空白时返回 `None`。元数据无法解析时使用空映射，
    /// 请求照常继续。
    pub fn from_query(query: UploadQuery) -> Option<Self> {
        let filename = query.filename?.trim().to_string();
        if filename.is_empty() {
            return None;
        }

        let metadata = match query.metadata.as_deref() {
            None => BTreeMap::new(),
            Some(raw) => decode_metadata(raw).unwrap_or_else(|e| {
                tracing::warn!("忽略无法解析的 metadata: {}", e);
                BTreeMap::new()
            }),
        };

        Some(Self { filename, metadata })
    }
}

/// 将 metadata 参数解析为字符串映射
///
/// 空白输入视为空映射。
pub fn decode_metadata(raw: &str) -> Result<BTreeMap<String, String>, serde_json::Error> {
    if raw.trim().is_empty() {
        return Ok(BTreeMap::new());
    }
    serde_json::from_str(raw)
}

/// 成功响应体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresignedUpload {
    pub metadata: BTreeMap<String, String>,
    pub signed_headers: BTreeMap<String, String>,
    pub url: String,
}

/// 错误响应体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub message: String,
}
