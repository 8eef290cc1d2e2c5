//! Domain 模块
//!
//! 钱包类型表与用户标识

pub mod user_id;
pub mod wallet_type;

// 重新导出常用类型
pub use user_id::UserId;
pub use wallet_type::WalletType;
