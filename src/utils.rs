//! 工具函数模块
//!
//! 此模块包含了项目中使用的各种工具函数：
//! - HTTP头部处理工具（包含MIME类型检测和JSON响应）
//! - 路径处理工具（文件扩展名获取）
//! - 对象键生成

pub mod headers;
pub mod key;
pub mod path;
