// tests/common/app_helper.rs

use admin_console::{
    api::{app_router, AppState},
    config::AppConfig,
};
use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::common;

/// シードデータ入りのアプリ（擬似遅延なし）
pub fn setup_app() -> Router {
    common::init_test_env();
    app_router(AppState::new(&AppConfig::for_testing()))
}

/// 実ポートでアプリを起動してベースURLを返す
pub async fn spawn_app() -> String {
    let app = setup_app();

    let addr = SocketAddr::from(([127, 0, 0, 1], 0));
    let listener = TcpListener::bind(addr).await.unwrap();
    let actual_addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app.into_make_service())
            .await
            .unwrap();
    });

    format!("http://{}", actual_addr)
}
