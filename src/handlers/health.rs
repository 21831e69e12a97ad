use axum::{extract::State, http::StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::middleware::{ApiResponse, ApiResult};
use crate::types::Operation;
use crate::AppState;

/// GET / - service banner
pub async fn root() -> ApiResult<Value> {
    let version = env!("CARGO_PKG_VERSION");

    let queries: Vec<&str> = Operation::ALL
        .iter()
        .filter(|op| !op.is_mutation())
        .map(|op| op.name())
        .collect();
    let mutations: Vec<&str> = Operation::ALL
        .iter()
        .filter(|op| op.is_mutation())
        .map(|op| op.name())
        .collect();

    Ok(ApiResponse::success(json!({
        "name": "Record API",
        "version": version,
        "endpoints": {
            "home": "/ (public)",
            "health": "/health (public)",
            "graphql": "/graphql (POST {operation, variables})",
        },
        "operations": {
            "queries": queries,
            "mutations": mutations,
        }
    })))
}

/// GET /health - liveness including a store probe
pub async fn health(State(state): State<Arc<AppState>>) -> ApiResponse<Value> {
    let now = chrono::Utc::now();

    match state.store.health_check().await {
        Ok(()) => ApiResponse::success(json!({
            "status": "ok",
            "timestamp": now,
            "store": "ok"
        })),
        Err(e) => {
            tracing::warn!("Store health check failed: {}", e);
            ApiResponse::with_status(
                json!({
                    "status": "degraded",
                    "timestamp": now,
                    "store": "unavailable"
                }),
                StatusCode::SERVICE_UNAVAILABLE,
            )
        }
    }
}
