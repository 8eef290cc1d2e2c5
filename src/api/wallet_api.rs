//! 钱包地址 API
//! 为用户生成指定币种/网络的充值地址

use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::{
    api::middleware::TraceId, app_state::AppState, domain::UserId, error::AppError,
};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Request/Response Models
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateWalletRequest {
    /// 用户ID（字符串或数字），原样作为处理商 order_id
    #[schema(value_type = String, example = "42")]
    pub user_id: UserId,
    /// btc_wallet | eth_wallet | ltc_wallet | usdt_wallet | usdc_wallet | ton_wallet
    /// 缺失或非字符串时按无效钱包类型处理
    #[schema(value_type = String, example = "eth_wallet")]
    pub wallet_type: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateWalletResponse {
    pub success: bool,
    pub wallet_address: String,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Handlers
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// POST /api/v1/wallets/address
#[utoipa::path(
    post,
    path = "/api/v1/wallets/address",
    request_body = GenerateWalletRequest,
    responses(
        (status = 200, description = "Wallet address generated", body = GenerateWalletResponse),
        (status = 400, description = "Invalid wallet type or request body", body = crate::error_body::ErrorBodyDoc),
        (status = 502, description = "Processor failed to generate an address", body = crate::error_body::ErrorBodyDoc)
    ),
    tag = "wallets"
)]
pub async fn generate_wallet_address(
    State(state): State<Arc<AppState>>,
    TraceId(trace_id): TraceId,
    payload: Result<Json<GenerateWalletRequest>, JsonRejection>,
) -> Result<Json<GenerateWalletResponse>, AppError> {
    let Json(req) = payload.map_err(|e| AppError::from(e).with_trace_id(trace_id.clone()))?;
    let wallet_type = req
        .wallet_type
        .as_ref()
        .and_then(Value::as_str)
        .unwrap_or_default();

    let wallet_address = state
        .requester
        .request_wallet_address(&req.user_id, wallet_type)
        .await
        .map_err(|e| AppError::from(e).with_trace_id(trace_id.clone()))?;

    Ok(Json(GenerateWalletResponse {
        success: true,
        wallet_address,
    }))
}
