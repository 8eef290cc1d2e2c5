use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// 钱包地址请求的业务错误（对调用方只暴露这两种）
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WalletError {
    /// 钱包类型不在固定集合内，未发起任何网络请求
    #[error("Invalid wallet type")]
    InvalidWalletType,
    /// 处理商返回非 200、响应缺少 result、网络异常或超时
    #[error("Failed to generate wallet address")]
    AddressGenerationFailed,
}

impl WalletError {
    pub fn code(&self) -> AppErrorCode {
        match self {
            WalletError::InvalidWalletType => AppErrorCode::InvalidWalletType,
            WalletError::AddressGenerationFailed => AppErrorCode::AddressGenerationFailed,
        }
    }
}

/// 钱包地址请求结果
pub type WalletResult = Result<String, WalletError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppErrorCode {
    // HTTP 基础错误码
    NotFound,
    InvalidParameter,

    // 业务错误码
    InvalidWalletType,
    AddressGenerationFailed,
}

impl AppErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppErrorCode::NotFound => "not_found",
            AppErrorCode::InvalidParameter => "invalid_parameter",
            AppErrorCode::InvalidWalletType => "invalid_wallet_type",
            AppErrorCode::AddressGenerationFailed => "address_generation_failed",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppError {
    pub code: AppErrorCode,
    pub message: String,
    pub status: StatusCode,
    pub trace_id: Option<String>,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    code: &'a str,
    trace_id: Option<&'a str>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: &self.message,
            code: self.code.as_str(),
            trace_id: self.trace_id.as_deref(),
        };
        (self.status, Json(body)).into_response()
    }
}

impl AppError {
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self {
            code: AppErrorCode::InvalidParameter,
            message: msg.into(),
            status: StatusCode::BAD_REQUEST,
            trace_id: None,
        }
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self {
            code: AppErrorCode::NotFound,
            message: msg.into(),
            status: StatusCode::NOT_FOUND,
            trace_id: None,
        }
    }

    /// 设置追踪ID
    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }
}

impl From<WalletError> for AppError {
    fn from(err: WalletError) -> Self {
        let status = match err {
            WalletError::InvalidWalletType => StatusCode::BAD_REQUEST,
            WalletError::AddressGenerationFailed => StatusCode::BAD_GATEWAY,
        };
        Self {
            code: err.code(),
            message: err.to_string(),
            status,
            trace_id: None,
        }
    }
}

// 从 axum JSON 解析错误转换（不回显原始请求体）
impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(err: axum::extract::rejection::JsonRejection) -> Self {
        Self::invalid_parameter(format!("Invalid request body: {}", err.body_text()))
    }
}
