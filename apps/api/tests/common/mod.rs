//! # 統合テスト共通ヘルパー

use std::sync::Arc;

use axum::{Router, body::Body};
use http::{Request, Response};
use nova_api::{
    app_builder::{AppDependencies, build_app},
    config::ApiConfig,
};
use nova_infra::{mock::RecordingNotificationSender, repository::DocumentStore};
use tower::ServiceExt;

/// デフォルト設定でテスト用ルーターを構築する
pub fn test_app(document_store: Arc<dyn DocumentStore>) -> Router {
    test_app_with(
        document_store,
        Arc::new(RecordingNotificationSender::new()),
        ApiConfig::from_lookup(|_| None).unwrap(),
    )
}

pub fn test_app_with(
    document_store: Arc<dyn DocumentStore>,
    sender: Arc<RecordingNotificationSender>,
    config: ApiConfig,
) -> Router {
    build_app(
        &config,
        AppDependencies {
            document_store,
            notification_sender: sender,
        },
    )
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: &serde_json::Value) -> Response<Body> {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: String) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
