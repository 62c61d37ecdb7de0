//! # アプリケーション構築
//!
//! 依存（ストア・通知）から State を組み立て、ルーターとレイヤーを定義する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{HeaderValue, Request},
    routing::{get, post},
};
use nova_infra::{notification::NotificationSender, repository::DocumentStore};
use nova_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer},
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    config::ApiConfig,
    handler::{
        LeadState,
        ProbeState,
        create_lead,
        db_probe,
        list_testimonials,
        openapi_json,
        service_status,
    },
    usecase::{LeadNotifier, LeadUseCase},
};

/// ルーター構築に必要なインフラ依存
pub struct AppDependencies {
    pub document_store:      Arc<dyn DocumentStore>,
    pub notification_sender: Arc<dyn NotificationSender>,
}

/// State の組み立てとルーター定義を行う
pub fn build_app(config: &ApiConfig, deps: AppDependencies) -> Router {
    let notifier = LeadNotifier::new(deps.notification_sender, config.notification_to.clone());
    let lead_state = Arc::new(LeadState {
        usecase: LeadUseCase::new(deps.document_store.clone(), notifier),
    });
    let probe_state = Arc::new(ProbeState {
        document_store: deps.document_store,
    });

    Router::new()
        .route("/", get(service_status))
        .route("/testimonials", get(list_testimonials))
        .route("/openapi.json", get(openapi_json))
        .route("/test", get(db_probe))
        .with_state(probe_state)
        .route("/leads", post(create_lead))
        .with_state(lead_state)
        .layer(cors_layer(&config.frontend_url))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| make_request_span(request)),
        )
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}

/// CORS レイヤーを構築する
///
/// - `*`: 全オリジン・全メソッド・全ヘッダーを許可（Cookie は送らせない）
/// - それ以外: 指定オリジンのみ許可し、認証情報付きリクエストも受け付ける
///
/// オリジンがヘッダー値として不正な場合は全許可にフォールバックする。
///
/// `FRONTEND_URL` を設定した場合は `*` を併記せず、設定したオリジン以外は許可しない。
pub fn cors_layer(frontend_url: &str) -> CorsLayer {
    if frontend_url == "*" {
        return permissive_cors();
    }

    match HeaderValue::from_str(frontend_url) {
        Ok(origin) => CorsLayer::new()
            .allow_origin(AllowOrigin::exact(origin))
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true),
        Err(_) => {
            tracing::warn!(
                frontend_url,
                "FRONTEND_URL がオリジンとして不正なため全オリジンを許可します"
            );
            permissive_cors()
        }
    }
}

fn permissive_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
