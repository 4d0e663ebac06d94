// src/logging/mod.rs

use axum::{
    body::Body,
    extract::MatchedPath,
    http::{HeaderValue, Request, StatusCode},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

/// RUST_LOG が未設定の場合のフィルタ
pub const DEFAULT_LOG_FILTER: &str = "admin_console=info,tower_http=info";

#[macro_export]
macro_rules! log_with_context {
    ($level:expr, $msg:expr $(, $($key:expr => $value:expr),* $(,)?)?) => {
        match $level {
            tracing::Level::ERROR => {
                tracing::error!(
                    message = $msg
                    $(, $($key = ?$value,)*)?
                );
            }
            tracing::Level::WARN => {
                tracing::warn!(
                    message = $msg
                    $(, $($key = ?$value,)*)?
                );
            }
            tracing::Level::INFO => {
                tracing::info!(
                    message = $msg
                    $(, $($key = ?$value,)*)?
                );
            }
            tracing::Level::DEBUG => {
                tracing::debug!(
                    message = $msg
                    $(, $($key = ?$value,)*)?
                );
            }
            _ => {}
        }
    };
}

/// トレーシングの初期化（二重初期化は無視する）
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(fmt::layer())
        .try_init();
}

/// リクエスト ID を受け渡すヘッダー
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// 外部から受け取るリクエスト ID の最大長
const MAX_REQUEST_ID_LEN: usize = 64;

/// コンソール API へのリクエスト 1 件分の文脈
#[derive(Clone, Debug)]
pub struct RequestContext {
    pub request_id: String,
    pub method: String,
    pub path: String,
    /// ルーティングで一致したパターン（`/system/dept/{id}` など）
    pub route: Option<String>,
}

impl RequestContext {
    pub fn from_request(req: &Request<Body>) -> Self {
        let request_id = req
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|id| !id.is_empty() && id.len() <= MAX_REQUEST_ID_LEN)
            .map(str::to_string)
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        Self {
            request_id,
            method: req.method().to_string(),
            path: req.uri().path().to_string(),
            route: req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched| matched.as_str().to_string()),
        }
    }

    /// ログ用のルート名（一致しなければ `unmatched`）
    pub fn route_label(&self) -> &str {
        self.route.as_deref().unwrap_or("unmatched")
    }
}

/// 完了ログのレベル（5xx は ERROR、4xx は WARN）
pub fn completion_level(status: StatusCode) -> Level {
    if status.is_server_error() {
        Level::ERROR
    } else if status.is_client_error() {
        Level::WARN
    } else {
        Level::INFO
    }
}

/// 開始・完了をログに出し、レスポンスにリクエスト ID を付ける
pub async fn logging_middleware(req: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let context = req.extensions().get::<RequestContext>().cloned();

    if let Some(context) = &context {
        log_with_context!(
            Level::DEBUG,
            "Request started",
            "request_id" => &context.request_id,
            "method" => &context.method,
            "route" => context.route_label(),
        );
    }

    let mut response = next.run(req).await;

    if let Some(context) = &context {
        let status = response.status();
        log_with_context!(
            completion_level(status),
            "Request completed",
            "request_id" => &context.request_id,
            "method" => &context.method,
            "path" => &context.path,
            "route" => context.route_label(),
            "status" => status.as_u16(),
            "duration_ms" => start.elapsed().as_millis(),
        );

        if let Ok(value) = HeaderValue::from_str(&context.request_id) {
            response.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
    }

    response
}

/// `RequestContext` を拡張に入れる
pub async fn inject_request_context(mut req: Request<Body>, next: Next) -> Response {
    let context = RequestContext::from_request(&req);
    req.extensions_mut().insert(context);
    next.run(req).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_with_id(id: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method("PUT").uri("/system/dept/3");
        if let Some(id) = id {
            builder = builder.header(REQUEST_ID_HEADER, id);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn test_context_keeps_incoming_request_id() {
        let context = RequestContext::from_request(&request_with_id(Some(" trace-42 ")));
        assert_eq!(context.request_id, "trace-42");
        assert_eq!(context.method, "PUT");
        assert_eq!(context.path, "/system/dept/3");
        assert_eq!(context.route_label(), "unmatched");
    }

    #[test]
    fn test_context_generates_id_for_missing_or_oversized_header() {
        let generated = RequestContext::from_request(&request_with_id(None));
        assert!(Uuid::parse_str(&generated.request_id).is_ok());

        let long = "x".repeat(MAX_REQUEST_ID_LEN + 1);
        let replaced = RequestContext::from_request(&request_with_id(Some(&long)));
        assert_ne!(replaced.request_id, long);
    }

    #[test]
    fn test_completion_level_by_status() {
        assert_eq!(completion_level(StatusCode::OK), Level::INFO);
        assert_eq!(completion_level(StatusCode::CONFLICT), Level::WARN);
        assert_eq!(completion_level(StatusCode::INTERNAL_SERVER_ERROR), Level::ERROR);
    }
}
