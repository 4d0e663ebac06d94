// admin-console/src/api/handlers/system_handler.rs
use axum::{extract::State, routing::get, Router};
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::error::AppResult;
use crate::types::ApiResponse;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub environment: String,
    pub mock_latency_enabled: bool,
}

pub async fn health_handler(
    State(app_state): State<AppState>,
) -> AppResult<ApiResponse<HealthResponse>> {
    let config = &app_state.config;

    Ok(ApiResponse::success(HealthResponse {
        status: "ok".to_string(),
        environment: config.environment.clone(),
        mock_latency_enabled: config.mock.latency_enabled,
    }))
}

pub fn system_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(app_state)
}
