//! 钱包类型模块
//!
//! 固定的钱包类型集合，每种类型对应支付处理商的 (currency, network) 组合

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::WalletError;

/// 钱包类型（封闭集合，新增类型必须在此处显式声明）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum WalletType {
    /// Bitcoin 主网
    BtcWallet,
    /// Ethereum 主网
    EthWallet,
    /// Litecoin 主网
    LtcWallet,
    /// USDT (TRC-20)
    UsdtWallet,
    /// USDC (Polygon)
    UsdcWallet,
    /// TON
    TonWallet,
}

impl WalletType {
    /// 全部钱包类型
    pub const fn all() -> [WalletType; 6] {
        [
            WalletType::BtcWallet,
            WalletType::EthWallet,
            WalletType::LtcWallet,
            WalletType::UsdtWallet,
            WalletType::UsdcWallet,
            WalletType::TonWallet,
        ]
    }

    /// 请求选择器中使用的键，例如 `eth_wallet`
    pub const fn as_key(&self) -> &'static str {
        match self {
            WalletType::BtcWallet => "btc_wallet",
            WalletType::EthWallet => "eth_wallet",
            WalletType::LtcWallet => "ltc_wallet",
            WalletType::UsdtWallet => "usdt_wallet",
            WalletType::UsdcWallet => "usdc_wallet",
            WalletType::TonWallet => "ton_wallet",
        }
    }

    /// 处理商币种代码
    pub const fn currency(&self) -> &'static str {
        match self {
            WalletType::BtcWallet => "BTC",
            WalletType::EthWallet => "ETH",
            WalletType::LtcWallet => "LTC",
            WalletType::UsdtWallet => "USDT",
            WalletType::UsdcWallet => "USDC",
            WalletType::TonWallet => "TON",
        }
    }

    /// 处理商网络标识
    pub const fn network(&self) -> &'static str {
        match self {
            WalletType::BtcWallet => "btc",
            WalletType::EthWallet => "eth",
            WalletType::LtcWallet => "ltc",
            WalletType::UsdtWallet => "tron",
            WalletType::UsdcWallet => "polygon",
            WalletType::TonWallet => "ton",
        }
    }
}

impl fmt::Display for WalletType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

impl FromStr for WalletType {
    type Err = WalletError;

    /// 精确匹配（区分大小写，不做 trim）
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WalletType::all()
            .into_iter()
            .find(|wt| wt.as_key() == s)
            .ok_or(WalletError::InvalidWalletType)
    }
}
