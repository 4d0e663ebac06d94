// tests/department_api_test.rs

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

use common::{
    app_helper::setup_app,
    request::{create_request, empty_request, raw_request, send},
};

fn find<'a>(nodes: &'a Value, id: &str) -> Option<&'a Value> {
    nodes.as_array()?.iter().find_map(|node| {
        if node["id"] == id {
            Some(node)
        } else {
            find(&node["children"], id)
        }
    })
}

#[tokio::test]
async fn test_list_departments_returns_seed_tree() {
    let app = setup_app();

    let (status, body) = send(&app, empty_request("GET", "/system/dept/list")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 200);
    let roots = body["data"].as_array().unwrap();
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0]["code"], "HEADQUARTER");
    assert_eq!(roots[0]["children"].as_array().unwrap().len(), 2);

    // 葉には children キーがない
    let marketing = find(&body["data"], "5").unwrap();
    assert!(marketing.get("children").is_none());
    assert_eq!(marketing["createTime"], "2023-01-02 00:00:00");
}

#[tokio::test]
async fn test_create_department_under_parent() {
    let app = setup_app();

    let (status, body) = send(
        &app,
        create_request(
            "POST",
            "/system/dept",
            &json!({
                "parentId": "5",
                "name": "広報グループ",
                "code": "PR",
                "leader": "広報リーダー",
                "sort": 1
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Department created");
    let created = &body["data"];
    let id = created["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());
    assert_eq!(created["parentId"], "5");
    assert_eq!(created["status"], "enable");
    assert!(created.get("children").is_none());

    let (_, list) = send(&app, empty_request("GET", "/system/dept/list")).await;
    let marketing = find(&list["data"], "5").unwrap();
    let children = marketing["children"].as_array().unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0]["id"], id.as_str());
}

#[tokio::test]
async fn test_create_department_with_unknown_parent_goes_to_root() {
    let app = setup_app();

    let (status, body) = send(
        &app,
        create_request(
            "POST",
            "/system/dept",
            &json!({ "parentId": "missing", "name": "新規", "code": "NEW" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["parentId"], "missing");

    let (_, list) = send(&app, empty_request("GET", "/system/dept/list")).await;
    let roots = list["data"].as_array().unwrap();
    assert_eq!(roots.len(), 2);
    assert_eq!(roots[1]["code"], "NEW");
}

#[tokio::test]
async fn test_create_department_validation_errors() {
    let app = setup_app();

    let (status, body) = send(
        &app,
        create_request(
            "POST",
            "/system/dept",
            &json!({ "name": "  ", "code": "bad code", "status": "archived" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
    assert_eq!(body["message"], "Validation failed");
    let field_errors = body["data"]["fieldErrors"].as_object().unwrap();
    assert!(field_errors.contains_key("name"));
    assert!(field_errors.contains_key("code"));
    assert!(field_errors.contains_key("status"));
}

#[tokio::test]
async fn test_create_department_malformed_json() {
    let app = setup_app();

    let request = raw_request("POST", "/system/dept", "application/json", "{\"name\":");
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
}

#[tokio::test]
async fn test_update_department_merges_fields() {
    let app = setup_app();

    let (status, body) = send(
        &app,
        create_request(
            "PUT",
            "/system/dept/3",
            &json!({
                "id": "999",
                "name": "API開発グループ",
                "status": "disable",
                "createTime": "1999-01-01 00:00:00"
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Department updated");
    let updated = &body["data"];
    assert_eq!(updated["id"], "3");
    assert_eq!(updated["name"], "API開発グループ");
    assert_eq!(updated["status"], "disable");
    assert_eq!(updated["code"], "BACKEND");
    assert_eq!(updated["createTime"], "2023-01-03 00:00:00");

    // 木の中の位置は変わらない
    let (_, list) = send(&app, empty_request("GET", "/system/dept/list")).await;
    let rnd = find(&list["data"], "2").unwrap();
    assert_eq!(rnd["children"][0]["name"], "API開発グループ");
}

#[tokio::test]
async fn test_update_department_keeps_children() {
    let app = setup_app();

    let (status, body) = send(
        &app,
        create_request("PUT", "/system/dept/2", &json!({ "leader": "新CTO" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["leader"], "新CTO");
    assert_eq!(body["data"]["children"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_update_missing_department_is_not_found() {
    let app = setup_app();

    let (status, body) = send(
        &app,
        create_request("PUT", "/system/dept/404", &json!({ "name": "なし" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);
}

#[tokio::test]
async fn test_delete_department_removes_subtree() {
    let app = setup_app();

    let (status, body) = send(&app, empty_request("DELETE", "/system/dept/2")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Department deleted");
    assert!(body.get("data").is_none());

    let (_, list) = send(&app, empty_request("GET", "/system/dept/list")).await;
    assert!(find(&list["data"], "2").is_none());
    assert!(find(&list["data"], "3").is_none());
    assert!(find(&list["data"], "4").is_none());
    assert!(find(&list["data"], "5").is_some());

    // 二度目は存在しない
    let (status, _) = send(&app, empty_request("DELETE", "/system/dept/2")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_last_child_drops_children_key() {
    let app = setup_app();

    send(&app, empty_request("DELETE", "/system/dept/3")).await;
    let (status, _) = send(&app, empty_request("DELETE", "/system/dept/4")).await;
    assert_eq!(status, StatusCode::OK);

    let (_, list) = send(&app, empty_request("GET", "/system/dept/list")).await;
    let rnd = find(&list["data"], "2").unwrap();
    assert!(rnd.get("children").is_none());
}

#[tokio::test]
async fn test_delete_root_department_empties_tree() {
    let app = setup_app();

    let (status, _) = send(&app, empty_request("DELETE", "/system/dept/1")).await;
    assert_eq!(status, StatusCode::OK);

    let (_, list) = send(&app, empty_request("GET", "/system/dept/list")).await;
    assert_eq!(list["data"], json!([]));
}
