//! depositgate - 支付处理商充值地址网关
//!
//! 把 (userId, walletType) 转换为处理商的签名请求，返回充值地址

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod error_body;
pub mod infrastructure;
pub mod service;

// 重新导出常用类型
pub use app_state::AppState;
pub use error::{AppError, AppErrorCode, WalletError, WalletResult};

pub mod prelude {
    pub use crate::{
        app_state::AppState,
        config::Config,
        domain::{UserId, WalletType},
        error::{AppError, WalletError, WalletResult},
        service::WalletAddressRequester,
    };
}
