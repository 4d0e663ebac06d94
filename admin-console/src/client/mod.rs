// admin-console/src/client/mod.rs

//! コンソール API の HTTP クライアント
//!
//! レスポンスエンベロープ `{ code, message, data }` を解き、`code == 200` なら
//! `data` を、それ以外は `ClientError` を返す。リトライはしない。

use reqwest::{Method, RequestBuilder, Url};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

use crate::config::AppConfig;
use crate::types::ApiResponse;

pub mod department;
pub mod role;

/// リクエストのタイムアウト
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// サーバーがメッセージを返さなかったときの文言
pub const REQUEST_FAILED_MESSAGE: &str = "Request failed";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error";

#[derive(Debug, Error)]
pub enum ClientError {
    /// エンベロープの `code` が 200 以外
    #[error("{message}")]
    Api { code: u16, message: String },

    /// 接続失敗・タイムアウトなど
    #[error("{0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

impl ClientError {
    /// エンベロープのコード（通信エラーなどは `None`）
    pub fn code(&self) -> Option<u16> {
        match self {
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.code() == Some(404)
    }

    fn network(error: reqwest::Error) -> Self {
        let message = error.to_string();
        if message.is_empty() {
            Self::Network(NETWORK_ERROR_MESSAGE.to_string())
        } else {
            Self::Network(message)
        }
    }
}

fn non_empty(message: String) -> Option<String> {
    Some(message).filter(|m| !m.trim().is_empty())
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ClientError::InvalidBaseUrl(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(base_url.to_string()));
        }

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ClientError::network)?;

        Ok(Self { http, base_url })
    }

    /// `API_BASE_URL` を使って作成
    pub fn from_config(config: &AppConfig) -> Result<Self, ClientError> {
        Self::new(&config.api_base_url)
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// ベース URL の後ろにパスセグメントを足す（各セグメントはエンコードされる）
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn request(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        self.http.request(method, self.url(segments))
    }

    pub async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ClientError> {
        self.send(self.request(Method::GET, segments)).await
    }

    pub async fn get_with_query<T, Q>(
        &self,
        segments: &[&str],
        query: &Q,
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.send(self.request(Method::GET, segments).query(query))
            .await
    }

    pub async fn post<T, B>(&self, segments: &[&str], body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(self.request(Method::POST, segments).json(body))
            .await
    }

    pub async fn put<T, B>(&self, segments: &[&str], body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(self.request(Method::PUT, segments).json(body))
            .await
    }

    pub async fn delete<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ClientError> {
        self.send(self.request(Method::DELETE, segments)).await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let response = request.send().await.map_err(ClientError::network)?;
        let status = response.status();
        let body = response.text().await.map_err(ClientError::network)?;

        let envelope: ApiResponse<Value> = match serde_json::from_str(&body) {
            Ok(envelope) => envelope,
            Err(e) if status.is_success() => return Err(ClientError::Decode(e.to_string())),
            Err(_) => {
                let message = status
                    .canonical_reason()
                    .map(str::to_string)
                    .unwrap_or_else(|| REQUEST_FAILED_MESSAGE.to_string());
                tracing::warn!(status = status.as_u16(), "Request failed without envelope");
                return Err(ClientError::Api {
                    code: status.as_u16(),
                    message,
                });
            }
        };

        if !envelope.is_success() {
            tracing::warn!(
                code = envelope.code,
                message = %envelope.message,
                "Request rejected"
            );
            return Err(ClientError::Api {
                code: envelope.code,
                message: non_empty(envelope.message)
                    .unwrap_or_else(|| REQUEST_FAILED_MESSAGE.to_string()),
            });
        }

        serde_json::from_value(envelope.data.unwrap_or(Value::Null))
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}
