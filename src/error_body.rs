use serde::Serialize;
use utoipa::ToSchema;

/// 错误响应体（仅用于 OpenAPI 文档，实际由 AppError 序列化）
#[derive(Serialize, ToSchema)]
pub struct ErrorBodyDoc {
    /// 对外错误信息，例如 "Invalid wallet type"
    pub error: String,
    /// 机器可读错误码，例如 "invalid_wallet_type"
    pub code: String,
    pub trace_id: Option<String>,
}
