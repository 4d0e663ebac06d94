// admin-console/src/api/handlers/department_handler.rs
use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Router,
};
use tracing::info;

use crate::api::dto::department_dto::{CreateDepartmentRequest, UpdateDepartmentRequest};
use crate::api::AppState;
use crate::domain::department_model::Department;
use crate::error::AppResult;
use crate::extractors::ValidatedJson;
use crate::types::ApiResponse;

// --- 部門管理ハンドラー ---

/// 部門ツリー取得
pub async fn list_departments_handler(
    State(app_state): State<AppState>,
) -> AppResult<ApiResponse<Vec<Department>>> {
    let departments = app_state.department_service.list_departments().await;
    Ok(ApiResponse::success(departments))
}

/// 部門作成
pub async fn create_department_handler(
    State(app_state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateDepartmentRequest>,
) -> AppResult<ApiResponse<Department>> {
    info!(
        code = %payload.code,
        parent_id = ?payload.parent_id,
        "Creating department"
    );

    let department = app_state
        .department_service
        .create_department(payload.into_service_input())
        .await;

    Ok(ApiResponse::success(department).with_message("Department created"))
}

/// 部門更新
pub async fn update_department_handler(
    State(app_state): State<AppState>,
    Path(department_id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateDepartmentRequest>,
) -> AppResult<ApiResponse<Department>> {
    if !payload.has_updates() {
        info!(department_id = %department_id, "Department update without changes");
    }

    let department = app_state
        .department_service
        .update_department(&department_id, payload.into_service_input())
        .await?;

    Ok(ApiResponse::success(department).with_message("Department updated"))
}

/// 部門削除（配下の部門も削除）
pub async fn delete_department_handler(
    State(app_state): State<AppState>,
    Path(department_id): Path<String>,
) -> AppResult<ApiResponse<()>> {
    app_state
        .department_service
        .delete_department(&department_id)
        .await?;

    Ok(ApiResponse::ok().with_message("Department deleted"))
}

pub fn department_router(app_state: AppState) -> Router {
    Router::new()
        .route("/system/dept/list", get(list_departments_handler))
        .route("/system/dept", post(create_department_handler))
        .route(
            "/system/dept/{id}",
            put(update_department_handler).delete(delete_department_handler),
        )
        .with_state(app_state)
}
