//! 配置管理模块
//! 支持从环境变量和配置文件加载配置，进程启动时构建一次后注入各组件

use std::{fmt, path::Path, time::Duration};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::infrastructure::log_redact::redact_secret;

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub processor: ProcessorConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// 支付处理商配置
#[derive(Clone, Serialize, Deserialize)]
pub struct ProcessorConfig {
    /// 创建静态钱包的接口地址
    pub api_url: String,
    /// 签名密钥，仅参与 MD5 签名，不会被发送
    pub api_key: String,
    /// 商户ID（请求头 merchant）
    pub merchant_id: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_addr: String,
    #[serde(default)]
    pub cors_allow_any: bool,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String, // "json" or "text"
    pub enable_file_logging: bool,
    pub log_file_path: Option<String>,
}

fn default_timeout_secs() -> u64 {
    30
}

impl ProcessorConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// 从环境变量读取（缺失的必填项留空，由 validate 报错）
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 从任意变量来源读取；PROCESSOR_TIMEOUT_SECS 无法解析时报错而不是回落默认值
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout_secs = match lookup("PROCESSOR_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().with_context(|| {
                format!("PROCESSOR_TIMEOUT_SECS must be a positive integer, got {:?}", raw)
            })?,
            None => default_timeout_secs(),
        };

        Ok(Self {
            api_url: lookup("API_URL").unwrap_or_default(),
            api_key: lookup("API_KEY").unwrap_or_default(),
            merchant_id: lookup("MERCHANT_ID").unwrap_or_default(),
            timeout_secs,
        })
    }
}

// 手写 Debug，避免密钥进入日志
impl fmt::Debug for ProcessorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessorConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &redact_secret(&self.api_key))
            .field("merchant_id", &self.merchant_id)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8088".into()),
            cors_allow_any: std::env::var("CORS_ALLOW_ANY")
                .ok()
                .map(|v| v == "1")
                .unwrap_or(false),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            format: std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".into()),
            enable_file_logging: std::env::var("LOG_FILE_ENABLED")
                .ok()
                .map(|v| v == "1")
                .unwrap_or(false),
            log_file_path: std::env::var("LOG_FILE_PATH").ok(),
        }
    }
}

impl Config {
    /// 从环境变量加载配置
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            processor: ProcessorConfig::from_env()?,
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
        })
    }

    /// 从配置文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        let config: Config =
            toml::from_str(&content).with_context(|| "Failed to parse config file as TOML")?;

        Ok(config)
    }

    /// 配置文件存在时只使用配置文件，否则使用环境变量
    pub fn from_env_and_file<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(path) if path.as_ref().exists() => Self::from_file(path),
            Some(path) => {
                tracing::warn!(
                    "⚠️ Config file {:?} not found, using environment variables",
                    path.as_ref()
                );
                Self::from_env()
            }
            None => Self::from_env(),
        }
    }

    /// 进程启动时的标准加载流程：.env → CONFIG_PATH（可选）→ 校验
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config_path = std::env::var("CONFIG_PATH").ok();
        let config = Self::from_env_and_file(config_path.as_deref())?;
        config.validate()?;

        Ok(config)
    }

    /// 验证配置有效性
    pub fn validate(&self) -> Result<()> {
        let p = &self.processor;

        if p.api_url.trim().is_empty() {
            anyhow::bail!("API_URL is required");
        }
        if !p.api_url.starts_with("http://") && !p.api_url.starts_with("https://") {
            anyhow::bail!("API_URL must start with http:// or https://");
        }
        if p.api_key.is_empty() {
            anyhow::bail!("API_KEY is required");
        }
        if p.merchant_id.trim().is_empty() {
            anyhow::bail!("MERCHANT_ID is required");
        }
        if p.timeout_secs == 0 {
            anyhow::bail!("PROCESSOR_TIMEOUT_SECS must be greater than 0");
        }

        // 验证日志级别
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            anyhow::bail!("LOG_LEVEL must be one of: {:?}", valid_levels);
        }

        // 验证日志格式
        if self.logging.format != "json" && self.logging.format != "text" {
            anyhow::bail!("LOG_FORMAT must be 'json' or 'text'");
        }

        Ok(())
    }
}
