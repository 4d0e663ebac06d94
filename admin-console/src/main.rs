// src/main.rs
use tokio::net::TcpListener;

use admin_console::api::{app_router, AppState};
use admin_console::config::AppConfig;
use admin_console::logging::init_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    tracing::info!("Starting admin console server...");

    // 設定を読み込む
    let app_config = AppConfig::from_env().map_err(|e| {
        tracing::error!(error = %e, "Failed to load configuration");
        e
    })?;
    tracing::info!("Configuration loaded: {:?}", app_config);

    if app_config.is_development() {
        tracing::info!("Running in development mode");
    }
    if app_config.mock.latency_enabled {
        if app_config.is_production() {
            tracing::warn!("Mock latency is enabled in production");
        } else {
            tracing::info!("Mock latency is enabled");
        }
    }

    // シードデータ入りのストアとルーター
    let app_state = AppState::new(&app_config);
    let router = app_router(app_state);

    let server_addr = app_config.server_addr();
    tracing::info!("Router configured. Server listening on {}", server_addr);

    let listener = TcpListener::bind(&server_addr).await?;
    axum::serve(listener, router.into_make_service()).await?;

    Ok(())
}
