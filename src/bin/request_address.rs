//! 单次调用：为一个用户生成一个充值地址
//!
//! 用法: request_address <user_id> <wallet_type>
//! 结果以 JSON 输出到 stdout，日志输出到 stderr

use std::sync::Arc;

use anyhow::{Context, Result};
use depositgate::{
    app_state::AppState,
    config::Config,
    domain::UserId,
    infrastructure::{env_validator::EnvValidator, logging},
};
use serde_json::json;

fn args() -> Result<(String, String)> {
    let mut args = std::env::args().skip(1);
    match (args.next(), args.next()) {
        (Some(user_id), Some(wallet_type)) => Ok((user_id, wallet_type)),
        _ => anyhow::bail!("usage: request_address <user_id> <wallet_type>"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let (user_id, wallet_type) = args()?;

    // 与服务端相同的加载流程；控制台日志写 stderr
    dotenvy::dotenv().ok();
    if std::env::var("CONFIG_PATH").is_err() {
        EnvValidator::validate_and_report()?;
    }
    let config = Arc::new(Config::load().context("Failed to load configuration")?);
    let log_guard = logging::init_logging_with_writer(&config.logging, std::io::stderr)?;

    let state = AppState::new(config)?;

    let result = state
        .requester
        .request_wallet_address(&UserId::from(user_id), &wallet_type)
        .await;

    let output = match &result {
        Ok(wallet_address) => json!({ "success": true, "walletAddress": wallet_address }),
        Err(e) => json!({ "error": e.to_string() }),
    };
    println!("{}", output);

    // exit 不会运行析构，先刷出文件日志
    drop(log_guard);
    if result.is_err() {
        std::process::exit(1);
    }
    Ok(())
}
