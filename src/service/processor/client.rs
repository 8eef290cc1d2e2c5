//! 支付处理商 API 客户端
//!
//! 调用处理商的“创建静态钱包”接口，为用户生成充值地址
//! 鉴权方式：请求头 merchant + sign（见 signing 模块）

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, StatusCode};
use serde::Deserialize;

use super::{
    signing::{SignedRequestEnvelope, WalletRequest},
    AddressProvider,
};
use crate::{
    config::ProcessorConfig,
    infrastructure::log_redact::{redact_address, redact_hex_string, truncate_body},
};

/// 处理商客户端
pub struct ProcessorClient {
    api_url: String,
    api_key: String,
    merchant_id: String,
    client: reqwest::Client,
}

/// 处理商响应
#[derive(Debug, Deserialize)]
pub struct ProcessorResponse {
    /// 0 表示成功
    pub state: Option<i64>,
    pub result: Option<StaticWalletResult>,
}

/// 静态钱包信息（只使用 address，其余字段忽略）
#[derive(Debug, Deserialize)]
pub struct StaticWalletResult {
    pub address: Option<String>,
}

impl ProcessorClient {
    /// 创建新的处理商客户端（连接池在进程内复用）
    pub fn new(config: &ProcessorConfig) -> Result<Self> {
        Ok(Self {
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            merchant_id: config.merchant_id.clone(),
            client: reqwest::Client::builder()
                .timeout(config.timeout())
                .build()
                .context("Failed to create HTTP client")?,
        })
    }

    /// 创建静态钱包，返回充值地址
    pub async fn create_static_wallet(&self, request: &WalletRequest) -> Result<String> {
        let envelope = SignedRequestEnvelope::new(request, &self.api_key)?;

        tracing::info!(
            currency = request.currency,
            network = request.network,
            order_id = %request.order_id,
            sign = %redact_hex_string(&envelope.sign, 4),
            "🌐 调用处理商API创建静态钱包"
        );

        // 发送的字节必须与签名时的 JSON 完全一致
        let response = self
            .client
            .post(&self.api_url)
            .header("merchant", &self.merchant_id)
            .header("sign", &envelope.sign)
            .header(CONTENT_TYPE, "application/json")
            .body(envelope.body)
            .send()
            .await
            .context("Failed to send request to processor")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read processor response")?;

        if status != StatusCode::OK {
            tracing::error!(
                "❌ 处理商API错误 ({}): {}",
                status,
                truncate_body(&body)
            );
            return Err(anyhow::anyhow!("Processor returned status {}", status));
        }

        let parsed: ProcessorResponse = serde_json::from_str(&body).with_context(|| {
            format!("Failed to parse processor response: {}", truncate_body(&body))
        })?;

        let address = parsed
            .result
            .and_then(|r| r.address)
            .filter(|a| !a.is_empty())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Processor response has no result.address (state={:?}): {}",
                    parsed.state,
                    truncate_body(&body)
                )
            })?;

        tracing::info!(
            order_id = %request.order_id,
            address = %redact_address(&address),
            "✅ 静态钱包创建成功"
        );

        Ok(address)
    }
}

#[async_trait]
impl AddressProvider for ProcessorClient {
    async fn create_address(&self, request: &WalletRequest) -> Result<String> {
        self.create_static_wallet(request).await
    }
}
