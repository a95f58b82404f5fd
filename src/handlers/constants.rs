use std::time::Duration;

/// 预签名上传 URL 的有效期（5 分钟）
pub const PRESIGN_EXPIRY: Duration = Duration::from_secs(5 * 60);

/// 列举存储桶调用的名称，用于日志和超时错误
pub const OP_LIST_BUCKETS: &str = "list_buckets";

/// 预签名调用的名称，用于日志和超时错误
pub const OP_PRESIGN_PUT: &str = "presign_put";
