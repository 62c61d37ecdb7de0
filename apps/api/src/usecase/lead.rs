//! # リード受付ユースケース
//!
//! 1. 入力を検証する（違反があれば永続化せずに返す）
//! 2. `lead` コレクションへ 1 件挿入し、採番された ID を得る
//! 3. 新規リード通知をバックグラウンドで送信する
//!
//! 永続化の失敗はリトライせずにそのまま返す。同一内容の送信も重複排除しない。

use std::sync::Arc;

use nova_domain::{
    lead::{Lead, LeadId, LeadInput},
    notification::LeadNotification,
};
use nova_infra::{InfraError, repository::DocumentStore};
use nova_shared::{event_log::event, log_business_event};

use super::LeadNotifier;
use crate::error::ApiError;

/// リードを保存するコレクション名
pub const LEAD_COLLECTION: &str = "lead";

/// リード受付ユースケース
pub struct LeadUseCase {
    document_store: Arc<dyn DocumentStore>,
    notifier:       LeadNotifier,
}

impl LeadUseCase {
    pub fn new(document_store: Arc<dyn DocumentStore>, notifier: LeadNotifier) -> Self {
        Self {
            document_store,
            notifier,
        }
    }

    /// リードを受け付ける
    #[tracing::instrument(skip_all)]
    pub async fn submit(&self, input: LeadInput) -> Result<LeadId, ApiError> {
        let lead = Lead::new(input)?;

        let document = serde_json::to_value(&lead).map_err(InfraError::from)?;
        let id = self
            .document_store
            .insert_one(LEAD_COLLECTION, document)
            .await?;
        let lead_id = LeadId::from_uuid(id.into_uuid());

        log_business_event!(
            event.category = event::category::LEAD,
            event.action = event::action::LEAD_CREATED,
            event.entity_type = event::entity_type::LEAD,
            event.entity_id = %lead_id,
            event.result = event::result::SUCCESS,
            "リードを受け付けました"
        );

        self.notifier.spawn(LeadNotification::from_lead(&lead));

        Ok(lead_id)
    }
}
