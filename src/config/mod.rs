//! 预签名服务的配置模块。
//!
//! 该模块负责在启动时从环境变量加载配置。配置加载一次后不可变，
//! 通过 `AppState` 注入到处理器中。

use std::env;
use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// 默认监听地址
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// 默认区域
pub const DEFAULT_REGION: &str = "us-east-1";

/// 上游调用的默认超时时间（秒）
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 5;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("必须设置环境变量 {0}")]
    Missing(&'static str),

    #[error("环境变量 {name} 的值 `{value}` 无效: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("S3_ACCESS_KEY_ID 和 S3_SECRET_ACCESS_KEY 必须同时设置")]
    PartialCredentials,
}

/// 手动指定的静态凭据
#[derive(Clone, PartialEq, Eq)]
pub struct StaticCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
}

// 避免密钥出现在日志中
impl fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"***")
            .finish()
    }
}

/// 进程级只读配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// 目标存储桶名称
    pub bucket: String,
    /// S3 区域
    pub region: String,
    /// S3 兼容服务的端点 URL，未设置时使用 AWS 默认端点
    pub endpoint_url: Option<String>,
    /// 是否使用路径风格访问存储桶
    pub force_path_style: bool,
    /// 静态凭据，未设置时走 AWS 默认凭据链
    pub credentials: Option<StaticCredentials>,
    /// HTTP 监听地址
    pub listen_addr: String,
    /// 每次上游调用的超时时间
    pub upstream_timeout: Duration,
}

impl Settings {
    /// 从进程环境变量加载配置。
    ///
    /// # Errors
    ///
    /// 缺少必需变量或变量值无效时返回 [`ConfigError`]。
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 使用给定的查找函数加载配置。
    ///
    /// 空字符串与未设置等同。
    ///
    /// # 参数
    ///
    /// * `lookup` - 根据变量名返回变量值的函数。
    ///
    /// # 返回值
    ///
    /// 解析后的 [`Settings`]。
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let bucket = get("S3_BUCKET").ok_or(ConfigError::Missing("S3_BUCKET"))?;

        let region = get("S3_REGION")
            .or_else(|| get("AWS_REGION"))
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        let force_path_style = match get("S3_FORCE_PATH_STYLE") {
            None => false,
            Some(value) => parse_bool("S3_FORCE_PATH_STYLE", &value)?,
        };

        let credentials = match (get("S3_ACCESS_KEY_ID"), get("S3_SECRET_ACCESS_KEY")) {
            (Some(access_key_id), Some(secret_access_key)) => Some(StaticCredentials {
                access_key_id,
                secret_access_key,
            }),
            (None, None) => None,
            _ => return Err(ConfigError::PartialCredentials),
        };

        let upstream_timeout = match get("UPSTREAM_TIMEOUT_SECS") {
            None => Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
            Some(value) => {
                let secs = value.parse::<u64>().map_err(|e| ConfigError::Invalid {
                    name: "UPSTREAM_TIMEOUT_SECS",
                    value: value.clone(),
                    reason: e.to_string(),
                })?;
                if secs == 0 {
                    return Err(ConfigError::Invalid {
                        name: "UPSTREAM_TIMEOUT_SECS",
                        value,
                        reason: "必须大于 0".to_string(),
                    });
                }
                Duration::from_secs(secs)
            }
        };

        Ok(Self {
            bucket,
            region,
            endpoint_url: get("S3_ENDPOINT"),
            force_path_style,
            credentials,
            listen_addr: get("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string()),
            upstream_timeout,
        })
    }
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(ConfigError::Invalid {
            name,
            value: value.to_string(),
            reason: "应为 true 或 false".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_with_only_bucket() {
        let settings = Settings::from_lookup(lookup(&[("S3_BUCKET", "uploads")])).unwrap();

        assert_eq!(settings.bucket, "uploads");
        assert_eq!(settings.region, DEFAULT_REGION);
        assert_eq!(settings.listen_addr, "0.0.0.0:8080");
        assert_eq!(settings.upstream_timeout, Duration::from_secs(5));
        assert_eq!(settings.endpoint_url, None);
        assert_eq!(settings.credentials, None);
        assert!(!settings.force_path_style);
    }

    #[test]
    fn test_missing_bucket() {
        let err = Settings::from_lookup(lookup(&[("S3_REGION", "eu-west-1")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("S3_BUCKET")));

        // 空白值等同于未设置
        let err = Settings::from_lookup(lookup(&[("S3_BUCKET", "  ")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("S3_BUCKET")));
    }

    #[test]
    fn test_region_fallback() {
        let settings = Settings::from_lookup(lookup(&[
            ("S3_BUCKET", "uploads"),
            ("AWS_REGION", "ap-northeast-1"),
        ]))
        .unwrap();
        assert_eq!(settings.region, "ap-northeast-1");

        let settings = Settings::from_lookup(lookup(&[
            ("S3_BUCKET", "uploads"),
            ("S3_REGION", "eu-central-1"),
            ("AWS_REGION", "ap-northeast-1"),
        ]))
        .unwrap();
        assert_eq!(settings.region, "eu-central-1");
    }

    #[test]
    fn test_full_settings() {
        let settings = Settings::from_lookup(lookup(&[
            ("S3_BUCKET", "uploads"),
            ("S3_ENDPOINT", "http://localhost:9000"),
            ("S3_FORCE_PATH_STYLE", "TRUE"),
            ("S3_ACCESS_KEY_ID", "AKID"),
            ("S3_SECRET_ACCESS_KEY", "secret"),
            ("LISTEN_ADDR", "127.0.0.1:9090"),
            ("UPSTREAM_TIMEOUT_SECS", "12"),
        ]))
        .unwrap();

        assert_eq!(settings.endpoint_url.as_deref(), Some("http://localhost:9000"));
        assert!(settings.force_path_style);
        assert_eq!(
            settings.credentials,
            Some(StaticCredentials {
                access_key_id: "AKID".to_string(),
                secret_access_key: "secret".to_string(),
            })
        );
        assert_eq!(settings.listen_addr, "127.0.0.1:9090");
        assert_eq!(settings.upstream_timeout, Duration::from_secs(12));
    }

    #[test]
    fn test_partial_credentials_rejected() {
        let err = Settings::from_lookup(lookup(&[
            ("S3_BUCKET", "uploads"),
            ("S3_ACCESS_KEY_ID", "AKID"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::PartialCredentials));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = Settings::from_lookup(lookup(&[
            ("S3_BUCKET", "uploads"),
            ("UPSTREAM_TIMEOUT_SECS", "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                name: "UPSTREAM_TIMEOUT_SECS",
                ..
            }
        ));

        let err = Settings::from_lookup(lookup(&[
            ("S3_BUCKET", "uploads"),
            ("UPSTREAM_TIMEOUT_SECS", "0"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));

        let err = Settings::from_lookup(lookup(&[
            ("S3_BUCKET", "uploads"),
            ("S3_FORCE_PATH_STYLE", "maybe"),
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                name: "S3_FORCE_PATH_STYLE",
                ..
            }
        ));
    }

    #[test]
    fn test_debug_hides_secret() {
        let credentials = StaticCredentials {
            access_key_id: "AKID".to_string(),
            secret_access_key: "very-secret".to_string(),
        };
        let printed = format!("{:?}", credentials);
        assert!(printed.contains("AKID"));
        assert!(!printed.contains("very-secret"));
    }
}
