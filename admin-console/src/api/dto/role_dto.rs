// admin-console/src/api/dto/role_dto.rs
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::status::Status;
use crate::error::AppResult;
use crate::schema::table::FetchDataParams;
use crate::service::role_service::{RoleFilter, RoleInput};
use crate::utils::error_helper::bad_request_error;
use crate::utils::validation::{self, role};

// --- リクエストDTO ---

/// ロール作成・更新リクエスト
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RoleRequest {
    #[validate(
        length(
            min = 1,
            max = role::NAME_MAX_LENGTH,
            message = "Role name must be between 1 and 20 characters"
        ),
        custom(function = validation::validate_not_empty_or_whitespace)
    )]
    pub name: String,

    #[validate(
        length(
            min = 1,
            max = role::CODE_MAX_LENGTH,
            message = "Role code must be between 1 and 30 characters"
        ),
        custom(function = validation::validate_role_code)
    )]
    pub code: String,

    #[validate(custom(function = validation::validate_status))]
    pub status: Option<String>,

    pub sort: Option<i32>,

    #[validate(length(
        max = role::REMARK_MAX_LENGTH,
        message = "Remark must be 200 characters or less"
    ))]
    pub remark: Option<String>,
}

impl RoleRequest {
    pub fn into_service_input(self) -> RoleInput {
        RoleInput {
            name: self.name.trim().to_string(),
            code: self.code,
            status: self
                .status
                .as_deref()
                .and_then(Status::from_str)
                .unwrap_or_default(),
            sort: self.sort.unwrap_or(0),
            remark: self.remark.filter(|remark| !remark.trim().is_empty()),
        }
    }
}

/// 付与メニューの更新リクエスト
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePermissionsRequest {
    pub menu_ids: Vec<String>,
}

/// 一覧の検索条件をサービス層の条件に変換（不正な状態は 400）
pub fn role_filter(params: &FetchDataParams) -> AppResult<RoleFilter> {
    let status = match params.filter_str("status") {
        Some(value) => Some(Status::from_str(value).ok_or_else(|| {
            bad_request_error(
                &format!("Invalid status filter: '{}'", value),
                "role_dto::role_filter",
            )
        })?),
        None => None,
    };

    Ok(RoleFilter {
        name: params.filter_str("name").map(str::to_string),
        status,
    })
}

// --- レスポンスDTO ---

/// 一括削除の結果
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRolesResponse {
    pub deleted_count: usize,
}
