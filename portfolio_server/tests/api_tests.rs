//! Integration tests for the contact API router.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use portfolio_server::{AppState, MessageStore, create_router};

fn test_app() -> Router {
    create_router(AppState::new(MessageStore::in_memory(), 50))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn put(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("PUT")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

fn contact(name: &str) -> Value {
    json!({
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase()),
        "subject": "Collaboration",
        "message": "Loved the vehicle counting project."
    })
}

#[tokio::test]
async fn health_reports_healthy() {
    let app = test_app();
    let (status, body) = get_json(&app, "/api/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body["message"].as_str().unwrap().contains("running"));
}

#[tokio::test]
async fn post_then_get_round_trips() {
    let app = test_app();
    let (status, body) = post_json(&app, "/api/contact", contact("Jane")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(
        body["message"],
        "Thank you for your message! I'll get back to you soon."
    );
    let id = body["id"].as_str().unwrap().to_string();

    let (status, message) = get_json(&app, &format!("/api/contact/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(message["id"], id.as_str());
    assert_eq!(message["name"], "Jane");
    assert_eq!(message["email"], "jane@example.com");
    assert_eq!(message["status"], "new");
    assert!(message["timestamp"].is_string());
}

#[tokio::test]
async fn invalid_input_is_unprocessable() {
    let app = test_app();

    let mut bad_email = contact("Jane");
    bad_email["email"] = json!("not-an-email");
    let (status, body) = post_json(&app, "/api/contact", bad_email).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());

    let (status, body) =
        post_json(&app, "/api/contact", json!({ "name": "Jane", "email": "jane@example.com" }))
            .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());

    let mut blank = contact("Jane");
    blank["message"] = json!("  ");
    let (status, _) = post_json(&app, "/api/contact", blank).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, list) = get_json(&app, "/api/contact").await;
    assert_eq!(list.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn unknown_id_is_not_found() {
    let app = test_app();
    let (status, body) = get_json(&app, "/api/contact/does-not-exist").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Message not found");

    let (status, body) = put(&app, "/api/contact/does-not-exist/status?status=read").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Message not found");
}

#[tokio::test]
async fn list_is_newest_first_and_honours_limit() {
    let app = test_app();
    for name in ["Ann", "Bob", "Cid"] {
        let (status, _) = post_json(&app, "/api/contact", contact(name)).await;
        assert_eq!(status, StatusCode::OK);
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    let (status, list) = get_json(&app, "/api/contact").await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Cid", "Bob", "Ann"]);

    let (_, limited) = get_json(&app, "/api/contact?limit=1").await;
    let limited = limited.as_array().unwrap();
    assert_eq!(limited.len(), 1);
    assert_eq!(limited[0]["name"], "Cid");
}

#[tokio::test]
async fn status_update_persists() {
    let app = test_app();
    let (_, body) = post_json(&app, "/api/contact", contact("Jane")).await;
    let id = body["id"].as_str().unwrap().to_string();

    let (status, body) = put(&app, &format!("/api/contact/{id}/status?status=replied")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Status updated successfully");

    let (_, message) = get_json(&app, &format!("/api/contact/{id}")).await;
    assert_eq!(message["status"], "replied");

    let (status, _) = put(&app, &format!("/api/contact/{id}/status?status=deleted")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let (status, _) = put(&app, &format!("/api/contact/{id}/status")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, message) = get_json(&app, &format!("/api/contact/{id}")).await;
    assert_eq!(message["status"], "replied");
}

#[tokio::test]
async fn stats_count_messages() {
    let app = test_app();
    let (_, empty) = get_json(&app, "/api/stats").await;
    assert_eq!(empty["total_messages"], 0);

    for name in ["Ann", "Bob"] {
        post_json(&app, "/api/contact", contact(name)).await;
    }
    let (status, stats) = get_json(&app, "/api/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["total_messages"], 2);
    assert_eq!(stats["messages_this_month"], 2);
    assert!(stats["last_updated"].is_string());
}

#[tokio::test]
async fn file_backed_store_survives_restart() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("messages.json");

    let app = create_router(AppState::new(MessageStore::open(&path).unwrap(), 50));
    let (_, body) = post_json(&app, "/api/contact", contact("Jane")).await;
    let id = body["id"].as_str().unwrap().to_string();

    let restarted = create_router(AppState::new(MessageStore::open(&path).unwrap(), 50));
    let (status, message) = get_json(&restarted, &format!("/api/contact/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(message["name"], "Jane");
}

#[tokio::test]
async fn default_limit_comes_from_state() {
    let app = create_router(AppState::new(MessageStore::in_memory(), 2));
    for name in ["Ann", "Bob", "Cid"] {
        post_json(&app, "/api/contact", contact(name)).await;
    }
    let (_, list) = get_json(&app, "/api/contact").await;
    assert_eq!(list.as_array().unwrap().len(), 2);
}
