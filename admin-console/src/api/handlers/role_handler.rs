// admin-console/src/api/handlers/role_handler.rs
use axum::{
    extract::{Path, Query, State},
    routing::{get, post, put},
    Router,
};
use tracing::info;

use crate::api::dto::role_dto::{
    role_filter, DeleteRolesResponse, RoleRequest, UpdatePermissionsRequest,
};
use crate::api::AppState;
use crate::domain::menu_model::MenuTreeNode;
use crate::domain::role_model::Role;
use crate::error::AppResult;
use crate::extractors::ValidatedJson;
use crate::schema::table::{FetchDataParams, FetchDataResult};
use crate::types::ApiResponse;

// --- ロール管理ハンドラー ---

/// ロール一覧取得（`page` / `pageSize` / `name` / `status`）
pub async fn list_roles_handler(
    State(app_state): State<AppState>,
    Query(params): Query<FetchDataParams>,
) -> AppResult<ApiResponse<FetchDataResult<Role>>> {
    let (page, page_size) = params.pagination.get_pagination();
    let filter = role_filter(&params)?;

    info!(
        page = %page,
        page_size = %page_size,
        name = ?filter.name,
        status = ?filter.status,
        "Fetching roles list"
    );

    let result = app_state
        .role_service
        .list_roles(&filter, page, page_size)
        .await;

    Ok(ApiResponse::success(result))
}

/// ロール作成
pub async fn create_role_handler(
    State(app_state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RoleRequest>,
) -> AppResult<ApiResponse<Role>> {
    let role = app_state
        .role_service
        .create_role(payload.into_service_input())
        .await?;

    Ok(ApiResponse::success(role).with_message("Role created"))
}

/// ロール更新
pub async fn update_role_handler(
    State(app_state): State<AppState>,
    Path(role_id): Path<String>,
    ValidatedJson(payload): ValidatedJson<RoleRequest>,
) -> AppResult<ApiResponse<Role>> {
    let role = app_state
        .role_service
        .update_role(&role_id, payload.into_service_input())
        .await?;

    Ok(ApiResponse::success(role).with_message("Role updated"))
}

/// ロール削除（`1,2,3` のようにまとめて指定できる）
pub async fn delete_roles_handler(
    State(app_state): State<AppState>,
    Path(ids): Path<String>,
) -> AppResult<ApiResponse<DeleteRolesResponse>> {
    let deleted_count = app_state.role_service.delete_roles(&ids).await?;

    Ok(ApiResponse::success(DeleteRolesResponse { deleted_count }).with_message("Roles deleted"))
}

/// 付与メニューのID一覧
pub async fn get_permissions_handler(
    State(app_state): State<AppState>,
    Path(role_id): Path<String>,
) -> AppResult<ApiResponse<Vec<String>>> {
    let menu_ids = app_state.role_service.get_permissions(&role_id).await?;
    Ok(ApiResponse::success(menu_ids))
}

/// 付与メニュー更新
pub async fn update_permissions_handler(
    State(app_state): State<AppState>,
    Path(role_id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdatePermissionsRequest>,
) -> AppResult<ApiResponse<()>> {
    app_state
        .role_service
        .update_permissions(&role_id, payload.menu_ids)
        .await?;

    Ok(ApiResponse::ok().with_message("Permissions updated"))
}

/// 権限設定用メニューツリー
pub async fn menu_tree_handler(
    State(app_state): State<AppState>,
) -> AppResult<ApiResponse<Vec<MenuTreeNode>>> {
    Ok(ApiResponse::success(app_state.role_service.menu_tree().await))
}

pub fn role_router(app_state: AppState) -> Router {
    Router::new()
        .route("/system/role/list", get(list_roles_handler))
        .route("/system/role", post(create_role_handler))
        // PUT は単一ID、DELETE はカンマ区切りのID
        .route(
            "/system/role/{id}",
            put(update_role_handler).delete(delete_roles_handler),
        )
        .route(
            "/system/role/{id}/permissions",
            get(get_permissions_handler).put(update_permissions_handler),
        )
        .route("/system/menu/tree", get(menu_tree_handler))
        .with_state(app_state)
}
