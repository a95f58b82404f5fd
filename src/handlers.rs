//! HTTP请求处理模块
//!
//! 此模块包含服务唯一的请求处理器：生成预签名上传URL。

pub mod constants;
pub mod presign;

// 重新导出主要的公共接口
pub use presign::handle_presign;
