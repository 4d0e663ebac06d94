use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// 成功時のステータスコード
pub const SUCCESS_CODE: u16 = 200;

/// 統一レスポンスエンベロープ `{ code, message, data }`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub code: u16,
    #[serde(alias = "msg", default)]
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: SUCCESS_CODE,
            message: "success".to_string(),
            data: Some(data),
        }
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = message.to_string();
        self
    }

    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    /// `code` に対応する HTTP ステータス（不正な値は 500 扱い）
    pub fn http_status(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl ApiResponse<()> {
    /// ペイロードなしの成功レスポンス（削除など）
    pub fn ok() -> Self {
        Self {
            code: SUCCESS_CODE,
            message: "success".to_string(),
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.http_status(), Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_response() {
        let data = vec!["item1", "item2"];
        let response = ApiResponse::success(data.clone());

        assert!(response.is_success());
        assert_eq!(response.message, "success");
        assert_eq!(response.data, Some(data));
    }

    #[test]
    fn test_ok_response_omits_data() {
        let json = serde_json::to_value(ApiResponse::ok()).unwrap();

        assert_eq!(json["code"], 200);
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_msg_alias_is_accepted() {
        let response: ApiResponse<serde_json::Value> =
            serde_json::from_str(r#"{"code":404,"msg":"not found"}"#).unwrap();

        assert!(!response.is_success());
        assert_eq!(response.message, "not found");
        assert!(response.data.is_none());
        assert_eq!(response.http_status(), StatusCode::NOT_FOUND);
    }
}
