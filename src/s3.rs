//! S3模块
//!
//! 该模块负责处理与S3存储桶的交互，包括客户端配置、存储桶列举和预签名上传URL生成。

// 声明子模块
pub mod config;
pub mod presign;
pub mod s3_ops;
pub mod storage;

// 重新导出常用的类型
pub use config::build_s3_client;
pub use s3_ops::S3Storage;
pub use storage::{MockObjectStorage, ObjectStorage, PresignedPut, StorageError, UploadDescriptor};
