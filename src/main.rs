use anyhow::{Context, Result};
use presign_server::config::Settings;
use presign_server::{AppState, bind_listener, serve};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 加载 .env 文件
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_timer(tracing_subscriber::fmt::time::LocalTime::rfc_3339())
        .init();

    let settings = Settings::from_env().context("加载配置失败")?;
    tracing::info!("配置: {:?}", settings);

    let addr = settings.listen_addr.clone();
    let state = AppState::from_settings(settings).await;

    // 无法绑定端口时直接退出
    let listener = bind_listener(&addr).await?;
    serve(listener, state).await
}
