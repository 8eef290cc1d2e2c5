use std::sync::Arc;

use axum::{
    middleware::from_fn,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{OpenApi, ToSchema};

use crate::{
    api::middleware::{trace_id_middleware, TraceId},
    app_state::AppState,
    error::AppError,
};

pub mod middleware;
pub mod wallet_api;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "depositgate API",
        description = "Deposit address generation via the payment processor"
    ),
    paths(wallet_api::generate_wallet_address, healthz),
    components(schemas(
        wallet_api::GenerateWalletRequest,
        wallet_api::GenerateWalletResponse,
        Healthz,
        crate::domain::WalletType,
        crate::error_body::ErrorBodyDoc
    )),
    tags(
        (name = "wallets", description = "充值地址生成"),
        (name = "health", description = "健康检查")
    )
)]
pub struct ApiDoc;

#[derive(Debug, Serialize, ToSchema)]
pub struct Healthz {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}

pub fn routes(state: Arc<AppState>) -> Router {
    let cors_allow_any = state.config.server.cors_allow_any;

    let router = Router::new()
        .route(
            "/api/v1/wallets/address",
            post(wallet_api::generate_wallet_address),
        )
        .route("/healthz", get(healthz))
        .route("/openapi.json", get(openapi_json))
        .fallback(not_found)
        .with_state(state)
        .layer(from_fn(trace_id_middleware))
        .layer(TraceLayer::new_for_http());

    if cors_allow_any {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

/// GET /healthz（不访问处理商）
#[utoipa::path(
    get,
    path = "/healthz",
    responses((status = 200, description = "Service is up", body = Healthz)),
    tag = "health"
)]
pub async fn healthz() -> Json<Healthz> {
    Json(Healthz {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

async fn not_found(TraceId(trace_id): TraceId) -> AppError {
    AppError::not_found("Route not found").with_trace_id(trace_id)
}
