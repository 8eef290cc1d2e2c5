//! 处理商请求签名
//!
//! 算法: sign = hex(md5(base64(json_body) + api_key))
//! base64 仅用于计算签名，实际发送的是未编码的 JSON 原文

use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use md5::{Digest, Md5};
use serde::Serialize;

use crate::domain::{UserId, WalletType};

/// 创建静态钱包的请求体（字段顺序即序列化顺序）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalletRequest {
    pub currency: &'static str,
    pub network: &'static str,
    pub order_id: String,
}

impl WalletRequest {
    pub fn new(user_id: &UserId, wallet_type: WalletType) -> Self {
        Self {
            currency: wallet_type.currency(),
            network: wallet_type.network(),
            order_id: user_id.as_str().to_string(),
        }
    }
}

/// 已签名的请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequestEnvelope {
    /// 发送给处理商的 JSON 原文
    pub body: String,
    /// body 的 base64 编码（仅参与签名）
    pub body_base64: String,
    /// 32 位小写十六进制 MD5
    pub sign: String,
}

impl SignedRequestEnvelope {
    /// 序列化并签名，同一 (payload, secret) 总是得到相同结果
    pub fn new<T: Serialize>(payload: &T, secret: &str) -> Result<Self> {
        let body = serde_json::to_string(payload).context("Failed to serialize payload")?;
        Ok(Self::from_body(body, secret))
    }

    pub fn from_body(body: String, secret: &str) -> Self {
        let body_base64 = STANDARD.encode(body.as_bytes());
        let sign = compute_sign(&body_base64, secret);
        Self {
            body,
            body_base64,
            sign,
        }
    }
}

/// hex(md5(body_base64 + secret))
pub fn compute_sign(body_base64: &str, secret: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(body_base64.as_bytes());
    hasher.update(secret.as_bytes());
    hex::encode(hasher.finalize())
}

/// 校验签名是否与 body 匹配（处理商侧的等价校验）
pub fn verify_sign(body: &str, secret: &str, sign: &str) -> bool {
    let expected = compute_sign(&STANDARD.encode(body.as_bytes()), secret);
    expected.eq_ignore_ascii_case(sign)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn test_request_body_for_eth_wallet() {
        let request = WalletRequest::new(&UserId::from(42u64), WalletType::EthWallet);
        let envelope = SignedRequestEnvelope::new(&request, SECRET).unwrap();

        assert_eq!(
            envelope.body,
            r#"{"currency":"ETH","network":"eth","order_id":"42"}"#
        );
        assert_eq!(
            envelope.body_base64,
            "eyJjdXJyZW5jeSI6IkVUSCIsIm5ldHdvcmsiOiJldGgiLCJvcmRlcl9pZCI6IjQyIn0="
        );
        assert_eq!(envelope.sign, "f0256c3331b4bae1312a4fcf3fde80e9");
    }

    #[test]
    fn test_sign_is_deterministic() {
        let request = WalletRequest::new(&UserId::from("user-1"), WalletType::UsdtWallet);
        let a = SignedRequestEnvelope::new(&request, SECRET).unwrap();
        let b = SignedRequestEnvelope::new(&request, SECRET).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_changed_body_byte_changes_sign() {
        let a = SignedRequestEnvelope::from_body(
            r#"{"currency":"ETH","network":"eth","order_id":"42"}"#.to_string(),
            SECRET,
        );
        let b = SignedRequestEnvelope::from_body(
            r#"{"currency":"ETH","network":"eth","order_id":"43"}"#.to_string(),
            SECRET,
        );
        assert_ne!(a.sign, b.sign);
        assert_eq!(b.sign, "afd51f6c1cc1b46c473c00689654d21b");
    }

    #[test]
    fn test_changed_secret_changes_sign() {
        let body = r#"{"currency":"BTC","network":"btc","order_id":"1"}"#.to_string();
        let a = SignedRequestEnvelope::from_body(body.clone(), SECRET);
        let b = SignedRequestEnvelope::from_body(body, "other-secret");
        assert_ne!(a.sign, b.sign);
    }

    #[test]
    fn test_verify_sign() {
        let envelope = SignedRequestEnvelope::from_body(
            r#"{"currency":"TON","network":"ton","order_id":"9"}"#.to_string(),
            SECRET,
        );
        assert_eq!(envelope.sign.len(), 32);
        assert!(verify_sign(&envelope.body, SECRET, &envelope.sign));
        assert!(verify_sign(
            &envelope.body,
            SECRET,
            &envelope.sign.to_uppercase()
        ));
        assert!(!verify_sign(&envelope.body, "wrong", &envelope.sign));
    }

    #[test]
    fn test_every_wallet_type_reaches_body() {
        for wt in WalletType::all() {
            let request = WalletRequest::new(&UserId::from("u"), wt);
            let value: serde_json::Value =
                serde_json::from_str(&SignedRequestEnvelope::new(&request, SECRET).unwrap().body)
                    .unwrap();
            assert_eq!(value["currency"], wt.currency());
            assert_eq!(value["network"], wt.network());
            assert_eq!(value["order_id"], "u");
        }
    }
}
