//! # OpenAPI ドキュメント配信ハンドラ

use axum::Json;
use utoipa::OpenApi;

use crate::openapi::ApiDoc;

/// `GET /openapi.json`
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
