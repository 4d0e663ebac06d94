// tests/schema_api_test.rs

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{
    app_helper::setup_app,
    request::{create_request, empty_request, raw_request, send},
};

#[tokio::test]
async fn test_list_schema_names() {
    let app = setup_app();

    let (status, body) = send(&app, empty_request("GET", "/schemas")).await;

    assert_eq!(status, StatusCode::OK);
    let names = body["data"].as_array().unwrap();
    assert_eq!(names.len(), 5);
    assert!(names.contains(&json!("dept-table")));
    assert!(names.contains(&json!("role-form")));
}

#[tokio::test]
async fn test_get_table_schema() {
    let app = setup_app();

    let (status, body) = send(&app, empty_request("GET", "/schemas/role-table")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["kind"], "table");
    let schema = &body["data"]["schema"];
    assert!(!schema["columns"].as_array().unwrap().is_empty());
    assert_eq!(schema["pagination"]["pageSize"], 10);
}

#[tokio::test]
async fn test_department_form_tracks_live_tree() {
    let app = setup_app();

    let (_, before) = send(&app, empty_request("GET", "/schemas/dept-form")).await;
    assert_eq!(before["data"]["kind"], "form");
    let parent = &before["data"]["schema"]["items"][0];
    assert_eq!(parent["prop"], "parentId");
    assert_eq!(parent["type"], "cascader");
    assert_eq!(parent["options"][0]["value"], "");
    assert_eq!(parent["options"][1]["value"], "1");

    send(&app, empty_request("DELETE", "/system/dept/1")).await;

    let (_, after) = send(&app, empty_request("GET", "/schemas/dept-form")).await;
    let options = after["data"]["schema"]["items"][0]["options"]
        .as_array()
        .unwrap();
    assert_eq!(options.len(), 1);
}

#[tokio::test]
async fn test_unknown_schema_is_not_found() {
    let app = setup_app();

    let (status, body) = send(&app, empty_request("GET", "/schemas/user-form")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);
}

#[tokio::test]
async fn test_check_form_values() {
    let app = setup_app();

    let (status, body) = send(
        &app,
        create_request(
            "POST",
            "/schemas/role-form/values",
            &json!({ "name": "監査担当", "code": "AUDITOR", "status": "enable", "sort": 3 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 200);

    let (status, body) = send(
        &app,
        create_request(
            "POST",
            "/schemas/role-form/values",
            &json!({ "name": "A", "status": "archived", "sort": 5000 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let field_errors = body["data"]["fieldErrors"].as_object().unwrap();
    assert_eq!(field_errors["name"], json!(["2〜20文字で入力してください"]));
    assert_eq!(field_errors["code"], json!(["ロールコードを入力してください"]));
    assert_eq!(
        field_errors["status"],
        json!(["value is not one of the allowed options"])
    );
    assert_eq!(field_errors["sort"], json!(["value must be between 0 and 999"]));
}

#[tokio::test]
async fn test_check_values_on_non_form_schema() {
    let app = setup_app();

    let (status, _) = send(
        &app,
        create_request("POST", "/schemas/role-search/values", &json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_check_values_rejects_broken_body_with_envelope() {
    let app = setup_app();

    let (status, body) = send(
        &app,
        raw_request("POST", "/schemas/role-form/values", "application/json", "{"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
    assert!(body["message"].as_str().unwrap().contains("JSON"));

    let (status, body) = send(
        &app,
        raw_request("POST", "/schemas/role-form/values", "text/plain", "name=x"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
}
