//! 地址台账
//!
//! 生成地址后可选地通知外部台账。具体存储不在本服务内实现，
//! 台账失败只记日志，不影响返回给调用方的结果

use async_trait::async_trait;

use crate::{
    domain::{UserId, WalletType},
    infrastructure::log_redact::redact_address,
};

#[async_trait]
pub trait AddressLedger: Send + Sync {
    async fn record(
        &self,
        user_id: &UserId,
        wallet_type: WalletType,
        address: &str,
    ) -> anyhow::Result<()>;
}

/// 只写结构化日志的台账
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLedger;

#[async_trait]
impl AddressLedger for TracingLedger {
    async fn record(
        &self,
        user_id: &UserId,
        wallet_type: WalletType,
        address: &str,
    ) -> anyhow::Result<()> {
        tracing::info!(
            user_id = %user_id,
            wallet_type = %wallet_type,
            address = %redact_address(address),
            "📒 wallet address recorded"
        );
        Ok(())
    }
}
