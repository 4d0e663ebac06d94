// admin-console/src/api/mod.rs
use axum::{http::Uri, middleware, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::logging::{inject_request_context, logging_middleware};
use crate::middleware::cors_layer;
use crate::repository::{
    department_repository::DepartmentRepository, role_repository::RoleRepository,
};
use crate::service::{
    dashboard_service::DashboardService, department_service::DepartmentService,
    latency::MockLatency, role_service::RoleService,
};

pub mod dto;
pub mod handlers;

use handlers::{
    dashboard_handler::dashboard_router, department_handler::department_router,
    role_handler::role_router, schema_handler::schema_router, system_handler::system_router,
};

/// 統一されたアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub department_service: Arc<DepartmentService>,
    pub role_service: Arc<RoleService>,
    pub dashboard_service: Arc<DashboardService>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// シードデータ入りのモックストアで状態を組み立てる
    pub fn new(config: &AppConfig) -> Self {
        let latency = MockLatency::new(config.mock.latency_enabled);

        Self {
            department_service: Arc::new(DepartmentService::new(
                DepartmentRepository::new(),
                latency,
            )),
            role_service: Arc::new(RoleService::new(RoleRepository::new(), latency)),
            dashboard_service: Arc::new(DashboardService::new(latency)),
            config: Arc::new(config.clone()),
        }
    }
}

/// どのルートにも一致しないリクエスト
async fn route_not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

/// 全ルーターを束ねたアプリケーション
pub fn app_router(app_state: AppState) -> Router {
    let cors = cors_layer(&app_state.config);

    Router::new()
        .merge(system_router(app_state.clone()))
        .merge(department_router(app_state.clone()))
        .merge(role_router(app_state.clone()))
        .merge(dashboard_router(app_state.clone()))
        .merge(schema_router(app_state))
        .fallback(route_not_found)
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(inject_request_context))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
