//! User API integration tests.
//!
//! Run with: `cargo test -p navsite-api --test users_test`
//! Requires Docker for testcontainers (Postgres).

mod helpers;

use axum::http::StatusCode;
use helpers::{api_path, create_user, setup_test_app};
use serde_json::{json, Value};

fn is_display_date(date: &str) -> bool {
    let Some(rest) = date.strip_suffix('日') else {
        return false;
    };
    let parts: Vec<&str> = rest.split(['年', '月']).collect();
    parts.len() == 3
        && parts[0].len() == 4
        && parts
            .iter()
            .all(|p| !p.is_empty() && !p.starts_with('0') && p.chars().all(|c| c.is_ascii_digit()))
}

#[tokio::test]
async fn test_create_then_get_user() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client
        .post(&api_path("/users"))
        .json(&json!({ "name": "Ann", "email": "a@x.com" }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let body = response.json::<Value>();
    assert_eq!(body["message"], "用户创建成功");
    let id = body["id"].as_i64().unwrap();

    let response = client.get(&api_path(&format!("/users/{}", id))).await;
    response.assert_status_ok();
    let user = response.json::<Value>();
    assert_eq!(user["id"], id);
    assert_eq!(user["name"], "Ann");
    assert_eq!(user["email"], "a@x.com");
    assert!(is_display_date(user["date"].as_str().unwrap()), "{}", user["date"]);
    assert_eq!(user["created_at"], user["updated_at"]);
}

#[tokio::test]
async fn test_list_users_ordered_by_id() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client.get(&api_path("/users")).await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));

    let first = create_user(client, "Ann", "a@x.com").await;
    let second = create_user(client, "Bob", "b@x.com").await;

    let users = client.get(&api_path("/users")).await.json::<Vec<Value>>();
    let ids: Vec<i64> = users.iter().map(|u| u["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![first, second]);
}

#[tokio::test]
async fn test_get_missing_user_returns_404() {
    let app = setup_test_app().await;

    let response = app.client().get(&api_path("/users/9999")).await;
    response.assert_status_not_found();
    assert_eq!(response.json::<Value>(), json!({ "message": "用户不存在" }));
}

#[tokio::test]
async fn test_non_numeric_id_returns_400() {
    let app = setup_test_app().await;

    let response = app.client().get(&api_path("/users/abc")).await;
    response.assert_status_bad_request();
    assert!(response.json::<Value>()["message"].is_string());
}

#[tokio::test]
async fn test_update_user() {
    let app = setup_test_app().await;
    let client = app.client();
    let id = create_user(client, "Ann", "a@x.com").await;
    let before = client
        .get(&api_path(&format!("/users/{}", id)))
        .await
        .json::<Value>();

    let response = client
        .put(&api_path(&format!("/users/{}", id)))
        .json(&json!({ "name": "Anna", "email": "anna@x.com" }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({ "message": "用户更新成功" }));

    let after = client
        .get(&api_path(&format!("/users/{}", id)))
        .await
        .json::<Value>();
    assert_eq!(after["name"], "Anna");
    assert_eq!(after["email"], "anna@x.com");
    assert_eq!(after["date"], before["date"]);
    assert_eq!(after["created_at"], before["created_at"]);
}

#[tokio::test]
async fn test_update_missing_user_returns_404() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .put(&api_path("/users/424242"))
        .json(&json!({ "name": "Ghost", "email": "g@x.com" }))
        .await;
    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["message"], "用户不存在");
}

#[tokio::test]
async fn test_delete_user() {
    let app = setup_test_app().await;
    let client = app.client();
    let id = create_user(client, "Ann", "a@x.com").await;

    let response = client.delete(&api_path(&format!("/users/{}", id))).await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({ "message": "用户删除成功" }));

    let response = client.delete(&api_path(&format!("/users/{}", id))).await;
    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["message"], "用户不存在");
}

#[tokio::test]
async fn test_create_user_without_email_is_server_error() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post(&api_path("/users"))
        .json(&json!({ "name": "NoEmail" }))
        .await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>(), json!({ "message": "服务器错误" }));

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(app.pool())
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post(&api_path("/users"))
        .bytes(axum::body::Bytes::from_static(b"{not json"))
        .content_type("application/json")
        .await;
    response.assert_status_bad_request();
    assert!(response.json::<Value>()["message"].is_string());
}
