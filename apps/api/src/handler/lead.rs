//! # リード受付ハンドラ
//!
//! `POST /leads` で問い合わせフォームの送信を受け付ける。
//!
//! ## レスポンス
//!
//! | ステータス | 条件 |
//! |-----------|------|
//! | 200 | 受付成功（`{"ok": true, "id": "..."}`） |
//! | 400 | JSON として解釈できない |
//! | 422 | 型の不一致、またはフィールドの検証失敗 |
//! | 500 | 永続化の失敗 |

use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use nova_domain::lead::{LeadId, LeadInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::ApiError, usecase::LeadUseCase};

/// リード受付用の State
pub struct LeadState {
    pub usecase: LeadUseCase,
}

/// リード受付リクエスト
///
/// 省略または `null` の必須フィールドは空文字として扱い、
/// 文字数・形式の検証でフィールド単位のエラーにする。
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateLeadRequest {
    /// 氏名（2〜120 文字）
    #[schema(required = true)]
    pub name:        Option<String>,
    /// メールアドレス
    #[schema(required = true)]
    pub email:       Option<String>,
    /// 予算（任意、120 文字以内）
    pub budget:      Option<String>,
    /// 相談内容（10〜5000 文字）
    #[schema(required = true)]
    pub description: Option<String>,
}

impl From<CreateLeadRequest> for LeadInput {
    fn from(req: CreateLeadRequest) -> Self {
        Self {
            name:        req.name.unwrap_or_default(),
            email:       req.email.unwrap_or_default(),
            budget:      req.budget,
            description: req.description.unwrap_or_default(),
        }
    }
}

/// リード受付レスポンス
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateLeadResponse {
    pub ok: bool,
    /// 採番されたリード ID
    pub id: String,
}

impl CreateLeadResponse {
    fn created(id: &LeadId) -> Self {
        Self {
            ok: true,
            id: id.to_string(),
        }
    }
}

/// リード受付エンドポイント
#[utoipa::path(
    post,
    path = "/leads",
    tag = "leads",
    request_body = CreateLeadRequest,
    responses(
        (status = 200, description = "受付成功", body = CreateLeadResponse),
        (status = 400, description = "JSON が不正", body = nova_shared::ErrorResponse),
        (status = 422, description = "バリデーションエラー", body = nova_shared::ErrorResponse),
        (status = 500, description = "データベースエラー", body = nova_shared::ErrorResponse)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_lead(
    State(state): State<Arc<LeadState>>,
    payload: Result<Json<CreateLeadRequest>, JsonRejection>,
) -> Result<Json<CreateLeadResponse>, ApiError> {
    let Json(req) = payload?;

    let id = state.usecase.submit(req.into()).await?;

    Ok(Json(CreateLeadResponse::created(&id)))
}
