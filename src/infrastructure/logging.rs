//! 日志系统配置模块
//! 支持结构化日志、日志级别配置和按天轮转的文件日志

use std::path::Path;

use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{
    fmt::{self, time::ChronoUtc, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

use crate::config::LoggingConfig;

/// 初始化日志系统（控制台输出到 stdout）
///
/// 开启文件日志时返回 WorkerGuard，调用方需持有到进程退出，否则缓冲日志会丢失
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<Option<WorkerGuard>> {
    init_logging_with_writer(config, std::io::stdout)
}

/// 初始化日志系统，控制台输出写入指定 writer（CLI 使用 stderr，stdout 留给结果）
pub fn init_logging_with_writer<W>(
    config: &LoggingConfig,
    console: W,
) -> anyhow::Result<Option<WorkerGuard>>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    // RUST_LOG 优先于配置中的级别
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let json = config.format == "json";

    if !config.enable_file_logging {
        if json {
            Registry::default()
                .with(filter)
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(console)
                        .with_timer(ChronoUtc::rfc_3339()),
                )
                .try_init()?;
        } else {
            Registry::default()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(console)
                        .with_timer(ChronoUtc::rfc_3339())
                        .with_ansi(true),
                )
                .try_init()?;
        }
        return Ok(None);
    }

    let (log_dir, file_prefix) = log_file_location(config.log_file_path.as_deref());
    std::fs::create_dir_all(log_dir)?;

    let file_appender = rolling::daily(log_dir, file_prefix);
    let (non_blocking_appender, guard) = non_blocking(file_appender);

    if json {
        let file_layer = fmt::layer()
            .json()
            .with_writer(non_blocking_appender)
            .with_timer(ChronoUtc::rfc_3339());
        let console_layer = fmt::layer()
            .json()
            .with_writer(console)
            .with_timer(ChronoUtc::rfc_3339());

        Registry::default()
            .with(filter)
            .with(file_layer)
            .with(console_layer)
            .try_init()?;
    } else {
        let file_layer = fmt::layer()
            .with_writer(non_blocking_appender)
            .with_timer(ChronoUtc::rfc_3339())
            .with_ansi(false);
        let console_layer = fmt::layer()
            .with_writer(console)
            .with_timer(ChronoUtc::rfc_3339())
            .with_ansi(true);

        Registry::default()
            .with(filter)
            .with(file_layer)
            .with(console_layer)
            .try_init()?;
    }

    Ok(Some(guard))
}

/// 解析日志文件路径：目录 + 文件名前缀，缺省为 ./logs/depositgate.log
fn log_file_location(path: Option<&str>) -> (&Path, &str) {
    let path = path.map(Path::new);
    let dir = path
        .and_then(|p| p.parent())
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("./logs"));
    let prefix = path
        .and_then(|p| p.file_name())
        .and_then(|n| n.to_str())
        .unwrap_or("depositgate.log");
    (dir, prefix)
}
