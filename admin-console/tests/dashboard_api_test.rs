// tests/dashboard_api_test.rs

mod common;

use axum::http::{header, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use common::{
    app_helper::setup_app,
    request::{empty_request, read_json, send},
};

async fn get_data(path: &str) -> Value {
    let app = setup_app();
    let (status, body) = send(&app, empty_request("GET", path)).await;
    assert_eq!(status, StatusCode::OK, "{}", path);
    assert_eq!(body["code"], 200, "{}", path);
    body["data"].clone()
}

#[tokio::test]
async fn test_every_dashboard_panel_responds() {
    let paths = [
        "/dashboard/header",
        "/dashboard/server-stats",
        "/dashboard/traffic-bar",
        "/dashboard/staff",
        "/dashboard/topology",
        "/dashboard/category-pie",
        "/dashboard/access-trend",
        "/dashboard/device-overview",
        "/dashboard/localization",
        "/dashboard/notifications",
    ];

    for path in paths {
        let data = get_data(path).await;
        assert!(data.is_object(), "{}", path);
    }
}

#[tokio::test]
async fn test_chart_series_match_axis_length() {
    let traffic = get_data("/dashboard/traffic-bar").await;
    let categories = traffic["categories"].as_array().unwrap().len();
    for series in traffic["series"].as_array().unwrap() {
        assert_eq!(series["data"].as_array().unwrap().len(), categories);
    }

    let trend = get_data("/dashboard/access-trend").await;
    let x_axis = trend["xAxis"].as_array().unwrap().len();
    for series in trend["series"].as_array().unwrap() {
        assert_eq!(series["data"].as_array().unwrap().len(), x_axis);
    }
}

#[tokio::test]
async fn test_staff_and_topology_shape() {
    let staff = get_data("/dashboard/staff").await;
    let first = &staff["list"][0];
    assert!(first["statusType"].is_string());
    assert!(first["dept"].is_string());

    let topology = get_data("/dashboard/topology").await;
    assert!(topology["centerNode"]["name"].is_string());
    assert!(!topology["nodes"].as_array().unwrap().is_empty());
    assert!(!topology["connections"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_localization_progress_percentage() {
    let localization = get_data("/dashboard/localization").await;
    let progress = &localization["progress"];

    let current = progress["current"].as_f64().unwrap();
    let total = progress["total"].as_f64().unwrap();
    let percentage = progress["percentage"].as_f64().unwrap();
    assert!((percentage - (current / total * 1000.0).round() / 10.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_health_reports_environment() {
    let data = get_data("/health").await;

    assert_eq!(data["status"], "ok");
    assert_eq!(data["environment"], "test");
    assert_eq!(data["mockLatencyEnabled"], false);
}

#[tokio::test]
async fn test_cors_preflight_allows_configured_origin() {
    let app = setup_app();

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/system/dept/list")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "http://localhost:5173"
    );
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = setup_app();

    let response = app
        .oneshot(empty_request("GET", "/dashboard/unknown"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = read_json(response).await;
    assert_eq!(body["code"], 404);
    assert_eq!(body["message"], "No route for /dashboard/unknown");
}
