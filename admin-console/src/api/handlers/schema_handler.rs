// admin-console/src/api/handlers/schema_handler.rs
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Router,
};
use serde_json::{Map, Value};
use tracing::info;

use crate::api::AppState;
use crate::error::AppResult;
use crate::extractors::EnvelopeJson;
use crate::schema::catalog::{get_schema, SchemaDocument, DEPARTMENT_FORM, SCHEMA_NAMES};
use crate::types::ApiResponse;
use crate::utils::error_helper::{bad_request_error, not_found_error};

async fn load_schema(app_state: &AppState, name: &str) -> AppResult<SchemaDocument> {
    // 部門フォームだけは現在の部門ツリーから親部門の候補を作る
    let departments = if name == DEPARTMENT_FORM {
        app_state.department_service.list_departments().await
    } else {
        Vec::new()
    };

    get_schema(name, &departments)
        .ok_or_else(|| not_found_error("Schema", name, "schema_handler::load_schema"))
}

/// 登録済みスキーマ名の一覧
pub async fn list_schemas_handler() -> AppResult<ApiResponse<Vec<&'static str>>> {
    Ok(ApiResponse::success(SCHEMA_NAMES.to_vec()))
}

/// スキーマ取得
pub async fn get_schema_handler(
    State(app_state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<ApiResponse<SchemaDocument>> {
    let document = load_schema(&app_state, &name).await?;
    Ok(ApiResponse::success(document))
}

/// フォームの入力値をルールで検査（違反があれば 400）
pub async fn check_form_values_handler(
    State(app_state): State<AppState>,
    Path(name): Path<String>,
    EnvelopeJson(values): EnvelopeJson<Map<String, Value>>,
) -> AppResult<ApiResponse<()>> {
    let document = load_schema(&app_state, &name).await?;
    let form = document.as_form().ok_or_else(|| {
        bad_request_error(
            &format!("Schema '{}' is not a form", name),
            "schema_handler::check_form_values_handler",
        )
    })?;

    form.check_values(&values)?;

    info!(schema = %name, fields = values.len(), "Form values accepted");
    Ok(ApiResponse::ok())
}

pub fn schema_router(app_state: AppState) -> Router {
    Router::new()
        .route("/schemas", get(list_schemas_handler))
        .route("/schemas/{name}", get(get_schema_handler))
        .route("/schemas/{name}/values", post(check_form_values_handler))
        .with_state(app_state)
}
