//! 测试辅助模块
//! 提供本地桩处理商（axum）和测试配置

#![allow(dead_code)]

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
    Router,
};
use depositgate::config::{Config, LoggingConfig, ProcessorConfig, ServerConfig};

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_MERCHANT_ID: &str = "test-merchant";

/// 桩处理商的响应方式
#[derive(Clone)]
pub enum StubBehavior {
    /// 200 + result.address
    Address(String),
    /// 任意状态码 + 原始响应体
    Status(u16, String),
    /// 200 但没有 result 字段
    MissingResult,
    /// 延迟后返回地址
    Slow(Duration, String),
}

/// 桩处理商收到的请求
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub merchant: Option<String>,
    pub sign: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

#[derive(Clone)]
struct StubState {
    behavior: StubBehavior,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

pub struct StubProcessor {
    pub url: String,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl StubProcessor {
    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.captured.lock().unwrap().clone()
    }
}

fn header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

async fn create_wallet(
    State(state): State<StubState>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    state.captured.lock().unwrap().push(CapturedRequest {
        merchant: header(&headers, "merchant"),
        sign: header(&headers, "sign"),
        content_type: header(&headers, "content-type"),
        body: String::from_utf8_lossy(&body).to_string(),
    });

    match state.behavior {
        StubBehavior::Address(address) => (StatusCode::OK, success_body(&address)),
        StubBehavior::Status(code, body) => (StatusCode::from_u16(code).unwrap(), body),
        StubBehavior::MissingResult => (StatusCode::OK, r#"{"state":0}"#.to_string()),
        StubBehavior::Slow(delay, address) => {
            tokio::time::sleep(delay).await;
            (StatusCode::OK, success_body(&address))
        }
    }
}

fn success_body(address: &str) -> String {
    serde_json::json!({
        "state": 0,
        "result": {
            "wallet_uuid": "0b9a3a5c-0000-4000-8000-000000000001",
            "uuid": "0b9a3a5c-0000-4000-8000-000000000002",
            "address": address,
            "network": "eth",
            "currency": "ETH",
            "url": "https://pay.processor.test/wallet/1"
        }
    })
    .to_string()
}

/// 在 127.0.0.1 随机端口启动桩处理商
pub async fn spawn_stub(behavior: StubBehavior) -> StubProcessor {
    let captured = Arc::new(Mutex::new(Vec::new()));
    let state = StubState {
        behavior,
        captured: captured.clone(),
    };

    let app = Router::new()
        .route("/v1/wallet", post(create_wallet))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubProcessor {
        url: format!("http://{}/v1/wallet", addr),
        captured,
    }
}

/// 一个当前没有任何进程监听的地址
pub async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/v1/wallet", addr)
}

pub fn processor_config(api_url: &str, timeout_secs: u64) -> ProcessorConfig {
    ProcessorConfig {
        api_url: api_url.to_string(),
        api_key: TEST_API_KEY.to_string(),
        merchant_id: TEST_MERCHANT_ID.to_string(),
        timeout_secs,
    }
}

pub fn test_config(api_url: &str) -> Config {
    Config {
        processor: processor_config(api_url, 5),
        server: ServerConfig {
            bind_addr: "127.0.0.1:0".to_string(),
            cors_allow_any: false,
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
            format: "text".to_string(),
            enable_file_logging: false,
            log_file_path: None,
        },
    }
}
