//! 钱包地址服务
//!
//! 流程：校验钱包类型 → 构造并签名请求 → 调用处理商 → 归一化结果
//! 所有失败都被收敛为 WalletError 的两种类型，原始错误只写日志

use std::sync::Arc;

use crate::{
    domain::{UserId, WalletType},
    error::{WalletError, WalletResult},
    infrastructure::log_redact::redact_address,
    service::{
        address_ledger::AddressLedger,
        processor::{AddressProvider, WalletRequest},
    },
};

pub struct WalletAddressRequester {
    provider: Arc<dyn AddressProvider>,
    ledger: Option<Arc<dyn AddressLedger>>,
}

impl WalletAddressRequester {
    pub fn new(provider: Arc<dyn AddressProvider>) -> Self {
        Self {
            provider,
            ledger: None,
        }
    }

    /// 生成地址成功后通知台账
    pub fn with_ledger(mut self, ledger: Arc<dyn AddressLedger>) -> Self {
        self.ledger = Some(ledger);
        self
    }

    /// 按选择器字符串请求地址；未知类型直接返回 InvalidWalletType，不发起网络请求
    pub async fn request_wallet_address(
        &self,
        user_id: &UserId,
        wallet_type: &str,
    ) -> WalletResult {
        let wallet_type = match wallet_type.parse::<WalletType>() {
            Ok(wt) => wt,
            Err(e) => {
                tracing::warn!(wallet_type = %wallet_type, "invalid wallet type requested");
                return Err(e);
            }
        };

        self.request_for(user_id, wallet_type).await
    }

    /// 按已解析的钱包类型请求地址
    pub async fn request_for(&self, user_id: &UserId, wallet_type: WalletType) -> WalletResult {
        let request = WalletRequest::new(user_id, wallet_type);

        let address = match self.provider.create_address(&request).await {
            Ok(address) => address,
            Err(e) => {
                tracing::error!(
                    "Error generating {} wallet address for {}: {:#}",
                    wallet_type.as_key().to_uppercase(),
                    user_id,
                    e
                );
                return Err(WalletError::AddressGenerationFailed);
            }
        };

        if let Some(ledger) = &self.ledger {
            if let Err(e) = ledger.record(user_id, wallet_type, &address).await {
                tracing::warn!(
                    user_id = %user_id,
                    wallet_type = %wallet_type,
                    address = %redact_address(&address),
                    "⚠️ failed to record wallet address in ledger: {:#}",
                    e
                );
            }
        }

        Ok(address)
    }
}
