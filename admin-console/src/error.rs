// src/error.rs

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::collections::BTreeMap;
use thiserror::Error;
use validator::ValidationErrors;

use crate::types::ApiResponse;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Item not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Multiple validation errors")]
    ValidationErrors(Vec<String>),

    #[error("Validation failed")]
    ValidationFailure(#[from] ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl AppError {
    /// エンベロープの `code` に入るステータス
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::NotFound(_) => 404,
            AppError::ValidationError(_)
            | AppError::ValidationErrors(_)
            | AppError::ValidationFailure(_)
            | AppError::BadRequest(_) => 400,
            AppError::Conflict(_) => 409,
            AppError::InternalServerError(_) => 500,
        }
    }

    /// "field: message" 形式のエラーをフィールドごとにまとめる
    fn group_field_errors(errors: &[String]) -> BTreeMap<String, Vec<String>> {
        let mut field_errors: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for error in errors {
            if let Some((field, message)) = error.split_once(": ") {
                field_errors
                    .entry(field.to_string())
                    .or_default()
                    .push(message.to_string());
            }
        }
        field_errors
    }
}

// axum でエラーをレスポンスエンベロープに変換するための実装
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.status_code();

        let (message, data) = match self {
            AppError::NotFound(message) => (message, None),
            AppError::ValidationError(message) => {
                let errors = vec![message.clone()];
                (
                    message,
                    Some(json!({
                        "errorType": "validation_error",
                        "errors": errors,
                        "fieldErrors": AppError::group_field_errors(&errors),
                    })),
                )
            }
            AppError::ValidationErrors(errors) => (
                "Validation failed".to_string(),
                Some(json!({
                    "errorType": "validation_errors",
                    "fieldErrors": AppError::group_field_errors(&errors),
                    "errors": errors,
                })),
            ),
            AppError::ValidationFailure(errors) => {
                let errors: Vec<String> = errors
                    .field_errors()
                    .into_iter()
                    .flat_map(|(field, errors)| {
                        errors.iter().map(move |e| {
                            let message = e
                                .message
                                .as_ref()
                                .map_or_else(|| "Invalid value".to_string(), |m| m.to_string());
                            format!("{}: {}", field, message)
                        })
                    })
                    .collect();
                (
                    "Validation failed".to_string(),
                    Some(json!({
                        "errorType": "validation_errors",
                        "fieldErrors": AppError::group_field_errors(&errors),
                        "errors": errors,
                    })),
                )
            }
            AppError::BadRequest(message) => (message, None),
            AppError::Conflict(message) => (message, None),
            AppError::InternalServerError(message) => {
                // サーバーログには詳細を出す
                tracing::error!(error = %message, "Internal server error");
                ("An internal server error occurred".to_string(), None)
            }
        };

        let envelope = ApiResponse {
            code,
            message,
            data,
        };
        (envelope.http_status(), Json(envelope)).into_response()
    }
}

// Result 型のエイリアス
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body, http::StatusCode};
    use serde_json::Value;

    async fn render(error: AppError) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_is_rendered_as_envelope() {
        let (status, json) = render(AppError::NotFound("not found".to_string())).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["code"], 404);
        assert_eq!(json["message"], "not found");
        assert!(json.get("data").is_none());
    }

    #[tokio::test]
    async fn test_validation_errors_are_grouped_by_field() {
        let errors = vec![
            "name: must not be empty".to_string(),
            "name: too long".to_string(),
            "code: must not be empty".to_string(),
        ];
        let (status, json) = render(AppError::ValidationErrors(errors)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], 400);
        assert_eq!(json["data"]["errors"].as_array().unwrap().len(), 3);
        assert_eq!(
            json["data"]["fieldErrors"]["name"].as_array().unwrap().len(),
            2
        );
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let (status, json) =
            render(AppError::InternalServerError("lock poisoned".to_string())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["message"], "An internal server error occurred");
    }

    #[test]
    fn test_conflict_status_code() {
        assert_eq!(AppError::Conflict("dup".to_string()).status_code(), 409);
    }
}
