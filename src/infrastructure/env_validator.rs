//! 环境变量验证器
//! 启动时一次性报告所有缺失或格式错误的环境变量

use std::env;

/// 支付处理商必需的环境变量
pub const REQUIRED_VARS: [&str; 3] = ["API_URL", "API_KEY", "MERCHANT_ID"];

#[derive(Debug)]
pub struct EnvValidator;

impl EnvValidator {
    /// 验证所有必需的环境变量
    pub fn validate_all() -> Result<(), Vec<String>> {
        Self::validate_with(|name| env::var(name).ok())
    }

    /// 使用自定义的变量来源验证（便于测试，不修改进程环境）
    pub fn validate_with<F>(lookup: F) -> Result<(), Vec<String>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut errors = Vec::new();

        for var in REQUIRED_VARS {
            match lookup(var) {
                Some(v) if !v.trim().is_empty() => {}
                _ => errors.push(format!("{} is required but not set", var)),
            }
        }

        // 验证 API_URL 格式
        if let Some(url) = lookup("API_URL").filter(|v| !v.trim().is_empty()) {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                errors.push("API_URL must start with http:// or https://".to_string());
            }
        }

        // 验证 PROCESSOR_TIMEOUT_SECS（如果设置）
        if let Some(timeout) = lookup("PROCESSOR_TIMEOUT_SECS") {
            match timeout.parse::<u64>() {
                Ok(0) | Err(_) => errors
                    .push("PROCESSOR_TIMEOUT_SECS must be a positive integer".to_string()),
                Ok(_) => {}
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// 验证并把错误逐条打印到 stderr（日志系统尚未初始化时调用）
    pub fn validate_and_report() -> Result<(), anyhow::Error> {
        Self::validate_all().map_err(|errors| {
            for error in &errors {
                eprintln!("❌ {}", error);
            }
            anyhow::anyhow!("Environment validation failed: {} error(s)", errors.len())
        })
    }
}
