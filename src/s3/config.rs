//! S3配置模块
//!
//! 该模块负责根据 [`Settings`] 创建 S3 客户端。

use crate::config::Settings;
use aws_config::BehaviorVersion;
use aws_config::Region;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::Credentials;

/// 使用配置创建 S3 客户端。
///
/// 未配置静态凭据时，凭据由 AWS 默认凭据链解析
/// （`AWS_ACCESS_KEY_ID`、配置文件、实例角色等）。
///
/// # 参数
///
/// * `settings` - 启动时加载的配置。
///
/// # 返回值
///
/// 配置好的 `aws_sdk_s3::Client`，可在并发请求间共享。
pub async fn build_s3_client(settings: &Settings) -> Client {
    let mut loader =
        aws_config::defaults(BehaviorVersion::latest()).region(Region::new(settings.region.clone()));

    if let Some(credentials) = &settings.credentials {
        loader = loader.credentials_provider(Credentials::new(
            credentials.access_key_id.clone(),
            credentials.secret_access_key.clone(),
            None,
            None,
            "manual-credentials",
        ));
    }

    if let Some(endpoint) = &settings.endpoint_url {
        loader = loader.endpoint_url(endpoint);
    }

    let sdk_config = loader.load().await;
    let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
        .force_path_style(settings.force_path_style)
        .build();

    Client::from_conf(s3_config)
}
