//! # API エラー定義
//!
//! API 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! | エラー種別 | HTTP ステータス |
//! |-----------|----------------|
//! | `BadRequest` | 400 |
//! | `UnprocessableBody` | 422 |
//! | `Validation` | 422（`field` 付き） |
//! | `Database` | 500（原因のメッセージを detail に含める） |

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use nova_domain::DomainError;
use nova_infra::InfraError;
use nova_shared::ErrorResponse;
use thiserror::Error;

/// API で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
    /// リクエストボディが JSON として解釈できない
    #[error("不正なリクエスト: {0}")]
    BadRequest(String),

    /// JSON は正しいが、型が期待と一致しない
    #[error("処理できないリクエスト: {0}")]
    UnprocessableBody(String),

    /// 入力値の検証失敗
    #[error("バリデーションエラー ({field}): {message}")]
    Validation {
        field:   &'static str,
        message: String,
    },

    /// 永続化の失敗
    #[error("データベースエラー: {0}")]
    Database(#[from] InfraError),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation { field, message } => Self::Validation { field, message },
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(e) => Self::UnprocessableBody(e.body_text()),
            other => Self::BadRequest(other.body_text()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self {
            ApiError::BadRequest(msg) => ErrorResponse::bad_request(msg),
            ApiError::UnprocessableBody(msg) => ErrorResponse::new(
                "unprocessable-entity",
                "Unprocessable Entity",
                422,
                msg,
            ),
            ApiError::Validation { field, message } => {
                ErrorResponse::validation_error(field, message)
            }
            ApiError::Database(e) => {
                tracing::error!(
                    error.category = "infrastructure",
                    error.kind = "database",
                    span_trace = %e.span_trace(),
                    "データベースエラー: {}",
                    e
                );
                ErrorResponse::database_error(&e)
            }
        };

        let status =
            StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(body)).into_response()
    }
}
