//! 支付处理商模块
//!
//! - signing: 请求体构造与 MD5 签名
//! - client: reqwest 实现的处理商客户端

pub mod client;
pub mod signing;

use async_trait::async_trait;

pub use client::ProcessorClient;
pub use signing::{SignedRequestEnvelope, WalletRequest};

/// 充值地址提供方
///
/// 生产实现为 ProcessorClient；错误细节只用于日志，由调用方统一归一化
#[async_trait]
pub trait AddressProvider: Send + Sync {
    async fn create_address(&self, request: &WalletRequest) -> anyhow::Result<String>;
}
