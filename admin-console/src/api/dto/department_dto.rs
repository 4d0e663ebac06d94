// admin-console/src/api/dto/department_dto.rs
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::domain::status::Status;
use crate::service::department_service::{CreateDepartmentInput, UpdateDepartmentInput};
use crate::utils::validation::{self, department};

/// 明示的な `null` を `Some(None)` として受け取る
fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// 空文字の親IDは「親なし」
fn normalize_parent_id(parent_id: Option<String>) -> Option<String> {
    parent_id
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
}

// --- リクエストDTO ---

/// 部門作成リクエスト
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDepartmentRequest {
    #[serde(default)]
    pub parent_id: Option<String>,

    #[validate(
        length(
            min = 1,
            max = department::NAME_MAX_LENGTH,
            message = "Department name must be between 1 and 50 characters"
        ),
        custom(function = validation::validate_not_empty_or_whitespace)
    )]
    pub name: String,

    #[validate(
        length(
            min = 1,
            max = department::CODE_MAX_LENGTH,
            message = "Department code must be between 1 and 50 characters"
        ),
        custom(function = validation::validate_department_code)
    )]
    pub code: String,

    #[validate(length(
        max = department::LEADER_MAX_LENGTH,
        message = "Leader must be 50 characters or less"
    ))]
    #[serde(default)]
    pub leader: String,

    #[validate(custom(function = validation::validate_status))]
    pub status: Option<String>,

    pub sort: Option<i32>,

    #[validate(length(
        max = department::DESCRIPTION_MAX_LENGTH,
        message = "Description must be 200 characters or less"
    ))]
    pub description: Option<String>,
}

impl CreateDepartmentRequest {
    pub fn into_service_input(self) -> CreateDepartmentInput {
        CreateDepartmentInput {
            parent_id: normalize_parent_id(self.parent_id),
            name: self.name.trim().to_string(),
            code: self.code,
            leader: self.leader,
            status: self
                .status
                .as_deref()
                .and_then(Status::from_str)
                .unwrap_or_default(),
            sort: self.sort.unwrap_or(0),
            description: self.description,
        }
    }
}

/// 部門更新リクエスト（送られた項目だけを更新）
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDepartmentRequest {
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub parent_id: Option<Option<String>>,

    #[validate(
        length(
            min = 1,
            max = department::NAME_MAX_LENGTH,
            message = "Department name must be between 1 and 50 characters"
        ),
        custom(function = validation::validate_not_empty_or_whitespace)
    )]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[validate(
        length(
            min = 1,
            max = department::CODE_MAX_LENGTH,
            message = "Department code must be between 1 and 50 characters"
        ),
        custom(function = validation::validate_department_code)
    )]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[validate(length(
        max = department::LEADER_MAX_LENGTH,
        message = "Leader must be 50 characters or less"
    ))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leader: Option<String>,

    #[validate(custom(function = validation::validate_status))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<i32>,

    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
}

impl UpdateDepartmentRequest {
    pub fn into_service_input(self) -> UpdateDepartmentInput {
        UpdateDepartmentInput {
            parent_id: self.parent_id.map(normalize_parent_id),
            name: self.name.map(|name| name.trim().to_string()),
            code: self.code,
            leader: self.leader,
            status: self.status.as_deref().and_then(Status::from_str),
            sort: self.sort,
            description: self.description,
        }
    }

    pub fn has_updates(&self) -> bool {
        self.parent_id.is_some()
            || self.name.is_some()
            || self.code.is_some()
            || self.leader.is_some()
            || self.status.is_some()
            || self.sort.is_some()
            || self.description.is_some()
    }
}
