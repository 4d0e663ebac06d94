// admin-console/src/api/handlers/dashboard_handler.rs
use axum::{extract::State, routing::get, Router};

use crate::api::AppState;
use crate::domain::dashboard_model::*;
use crate::error::AppResult;
use crate::types::ApiResponse;

pub async fn header_config_handler(
    State(app_state): State<AppState>,
) -> AppResult<ApiResponse<HeaderConfig>> {
    Ok(ApiResponse::success(
        app_state.dashboard_service.header_config().await,
    ))
}

pub async fn server_stats_handler(
    State(app_state): State<AppState>,
) -> AppResult<ApiResponse<ServerStatsResponse>> {
    Ok(ApiResponse::success(
        app_state.dashboard_service.server_stats().await,
    ))
}

pub async fn traffic_bar_handler(
    State(app_state): State<AppState>,
) -> AppResult<ApiResponse<TrafficBarResponse>> {
    Ok(ApiResponse::success(
        app_state.dashboard_service.traffic_bar().await,
    ))
}

pub async fn staff_list_handler(
    State(app_state): State<AppState>,
) -> AppResult<ApiResponse<StaffListResponse>> {
    Ok(ApiResponse::success(
        app_state.dashboard_service.staff_list().await,
    ))
}

pub async fn topology_handler(
    State(app_state): State<AppState>,
) -> AppResult<ApiResponse<TopologyResponse>> {
    Ok(ApiResponse::success(app_state.dashboard_service.topology().await))
}

pub async fn category_pie_handler(
    State(app_state): State<AppState>,
) -> AppResult<ApiResponse<CategoryPieResponse>> {
    Ok(ApiResponse::success(
        app_state.dashboard_service.category_pie().await,
    ))
}

pub async fn access_trend_handler(
    State(app_state): State<AppState>,
) -> AppResult<ApiResponse<AccessTrendResponse>> {
    Ok(ApiResponse::success(
        app_state.dashboard_service.access_trend().await,
    ))
}

pub async fn device_overview_handler(
    State(app_state): State<AppState>,
) -> AppResult<ApiResponse<DeviceOverviewResponse>> {
    Ok(ApiResponse::success(
        app_state.dashboard_service.device_overview().await,
    ))
}

pub async fn localization_handler(
    State(app_state): State<AppState>,
) -> AppResult<ApiResponse<LocalizationResponse>> {
    Ok(ApiResponse::success(
        app_state.dashboard_service.localization().await,
    ))
}

pub async fn notifications_handler(
    State(app_state): State<AppState>,
) -> AppResult<ApiResponse<NotificationResponse>> {
    Ok(ApiResponse::success(
        app_state.dashboard_service.notifications().await,
    ))
}

pub fn dashboard_router(app_state: AppState) -> Router {
    Router::new()
        .route("/dashboard/header", get(header_config_handler))
        .route("/dashboard/server-stats", get(server_stats_handler))
        .route("/dashboard/traffic-bar", get(traffic_bar_handler))
        .route("/dashboard/staff", get(staff_list_handler))
        .route("/dashboard/topology", get(topology_handler))
        .route("/dashboard/category-pie", get(category_pie_handler))
        .route("/dashboard/access-trend", get(access_trend_handler))
        .route("/dashboard/device-overview", get(device_overview_handler))
        .route("/dashboard/localization", get(localization_handler))
        .route("/dashboard/notifications", get(notifications_handler))
        .with_state(app_state)
}
