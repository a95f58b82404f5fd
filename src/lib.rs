//! 预签名上传服务库
//!
//! 这是一个基于Axum的单接口服务，主要功能包括：
//! - 校验配置的S3存储桶是否存在
//! - 根据文件扩展名推断Content-Type并生成随机对象键
//! - 生成5分钟有效的预签名PUT URL及上传时必须携带的请求头
//! - 支持CORS跨域请求

pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod s3;
pub mod utils;

use anyhow::Context;
use axum::routing::get;
use config::Settings;
use http::Method;
use s3::{ObjectStorage, S3Storage, build_s3_client};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, CorsLayer};
use tower_http::trace::TraceLayer;

/// 处理器共享的应用状态
///
/// 两个字段在启动后都不会被修改。
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn ObjectStorage>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(storage: Arc<dyn ObjectStorage>, settings: Settings) -> Self {
        Self {
            storage,
            settings: Arc::new(settings),
        }
    }

    /// 使用真实的 S3 客户端创建应用状态
    pub async fn from_settings(settings: Settings) -> Self {
        let client = build_s3_client(&settings).await;
        Self::new(Arc::new(S3Storage::new(Arc::new(client))), settings)
    }
}

/// 创建并配置Axum应用程序
///
/// 此函数设置了：
/// - CORS配置，允许GET和OPTIONS请求
/// - 请求追踪中间件
/// - `GET /` 预签名路由
///
/// # Returns
///
/// 返回配置好的Axum Router实例
pub fn app(state: AppState) -> axum::Router {
    // 配置 CORS
    let cors = CorsLayer::permissive()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(AllowHeaders::any());

    axum::Router::new()
        .route("/", get(handlers::handle_presign))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// 绑定监听地址
///
/// # Errors
///
/// 地址无效或端口已被占用时返回错误，错误信息包含地址。
pub async fn bind_listener(addr: &str) -> anyhow::Result<TcpListener> {
    match TcpListener::bind(addr).await {
        Ok(listener) => Ok(listener),
        Err(e) => {
            tracing::error!("无法监听 {}: {}", addr, e);
            Err(e).with_context(|| format!("无法监听 {}", addr))
        }
    }
}

/// 在已绑定的监听器上运行服务直到退出
pub async fn serve(listener: TcpListener, state: AppState) -> anyhow::Result<()> {
    tracing::info!("服务器运行在 http://{}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
