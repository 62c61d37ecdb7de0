//! # リード受付 API のテスト
//!
//! `POST /leads` の検証・永続化・通知・エラー変換をルーター経由で検証する。

mod common;

use std::sync::Arc;

use common::{body_json, post_json, post_raw, test_app, test_app_with};
use http::StatusCode;
use nova_api::config::ApiConfig;
use nova_infra::mock::{FailingDocumentStore, MockDocumentStore, RecordingNotificationSender};
use pretty_assertions::assert_eq;
use serde_json::json;

fn jane() -> serde_json::Value {
    json!({
        "name": "Jane Doe",
        "email": "jane@example.com",
        "description": "Interested in automation services for support."
    })
}

#[tokio::test]
async fn test_正しいリードはokとidを返す() {
    let store = MockDocumentStore::new();
    let app = test_app(Arc::new(store.clone()));

    let response = post_json(app, "/leads", &jane()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["ok"], true);
    let id = body["id"].as_str().unwrap();
    assert!(!id.is_empty());

    let docs = store.documents("lead");
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].id.to_string(), id);
    assert_eq!(docs[0].body["email"], "jane@example.com");
}

#[tokio::test]
async fn test_名前が2文字未満なら422でnameを示す() {
    let store = MockDocumentStore::new();
    let app = test_app(Arc::new(store.clone()));
    let mut payload = jane();
    payload["name"] = json!("J");

    let response = post_json(app, "/leads", &payload).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["field"], "name");
    assert_eq!(body["status"], 422);
    assert!(store.documents("lead").is_empty());
}

#[tokio::test]
async fn test_メールアドレスが不正なら422でemailを示す() {
    let app = test_app(Arc::new(MockDocumentStore::new()));
    let mut payload = jane();
    payload["email"] = json!("not-an-email");

    let response = post_json(app, "/leads", &payload).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["field"], "email");
}

#[tokio::test]
async fn test_必須フィールドの欠落はそのフィールドの422になる() {
    let app = test_app(Arc::new(MockDocumentStore::new()));

    let response = post_json(
        app,
        "/leads",
        &json!({ "name": "Jane Doe", "email": "jane@example.com" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["field"], "description");
}

#[tokio::test]
async fn test_必須フィールドがnullの場合もそのフィールドの422になる() {
    let app = test_app(Arc::new(MockDocumentStore::new()));
    let mut payload = jane();
    payload["name"] = serde_json::Value::Null;

    let response = post_json(app, "/leads", &payload).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["field"], "name");
}

#[tokio::test]
async fn test_予算が長すぎると422でbudgetを示す() {
    let app = test_app(Arc::new(MockDocumentStore::new()));
    let mut payload = jane();
    payload["budget"] = json!("9".repeat(121));

    let response = post_json(app, "/leads", &payload).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["field"], "budget");
}

#[tokio::test]
async fn test_型が一致しない場合は422を返す() {
    let app = test_app(Arc::new(MockDocumentStore::new()));
    let mut payload = jane();
    payload["name"] = json!(42);

    let response = post_json(app, "/leads", &payload).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_jsonとして不正なボディは400を返す() {
    let app = test_app(Arc::new(MockDocumentStore::new()));

    let response = post_raw(app, "/leads", "{ not json".to_string()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_保存に失敗した場合は500と原因のメッセージを返す() {
    let app = test_app(Arc::new(FailingDocumentStore::new("connection refused")));

    let response = post_json(app, "/leads", &jane()).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.starts_with("Database error: "), "detail: {detail}");
    assert!(detail.contains("connection refused"), "detail: {detail}");
}

#[tokio::test]
async fn test_同一内容の送信でも毎回異なるidを返す() {
    let store = MockDocumentStore::new();

    let first = body_json(post_json(test_app(Arc::new(store.clone())), "/leads", &jane()).await).await;
    let second =
        body_json(post_json(test_app(Arc::new(store.clone())), "/leads", &jane()).await).await;

    assert_ne!(first["id"], second["id"]);
    assert_eq!(store.documents("lead").len(), 2);
}

#[tokio::test]
async fn test_受付後に新規リード通知が設定した宛先へ送られる() {
    let sender = Arc::new(RecordingNotificationSender::new());
    let config = ApiConfig::from_lookup(|key| {
        (key == "NOTIFICATION_TO_ADDRESS").then(|| "ops@example.com".to_string())
    })
    .unwrap();
    let app = test_app_with(Arc::new(MockDocumentStore::new()), sender.clone(), config);

    let response = post_json(app, "/leads", &jane()).await;
    assert_eq!(response.status(), StatusCode::OK);

    for _ in 0..100 {
        if !sender.sent().is_empty() {
            break;
        }
        tokio::task::yield_now().await;
    }

    let sent = sender.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "ops@example.com");
    assert_eq!(sent[0].subject, "New lead: Jane Doe <jane@example.com>");
}
