//! depositgate 主入口
//! HTTP 触发的充值地址生成服务

use std::sync::Arc;

use anyhow::{Context, Result};
use depositgate::{
    api, app_state::AppState, config::Config,
    infrastructure::{env_validator::EnvValidator, logging},
};

#[tokio::main]
async fn main() -> Result<()> {
    // ✅ 1. 加载配置（.env → CONFIG_PATH → 校验），只在启动时读取一次环境
    dotenvy::dotenv().ok();
    if std::env::var("CONFIG_PATH").is_err() {
        EnvValidator::validate_and_report()?;
    }
    let config = Arc::new(Config::load().context("Failed to load configuration")?);

    // ✅ 2. 初始化日志（guard 需持有到进程退出）
    let _log_guard = logging::init_logging(&config.logging)?;

    tracing::info!("🚀 Starting depositgate");
    tracing::debug!(?config, "configuration loaded");

    // ✅ 3. 初始化应用状态
    let state = Arc::new(AppState::new(config.clone())?);

    // ✅ 4. 启动服务器
    let app = api::routes(state);
    let bind_addr = config.server.bind_addr.clone();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;

    tracing::info!("🎉 Server listening on http://{}", bind_addr);
    tracing::info!("📖 OpenAPI: http://{}/openapi.json", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("⚠️ Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
