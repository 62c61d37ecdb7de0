//! # テスト用モック実装
//!
//! ユースケース・ハンドラテストで使用するインメモリ実装。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! nova-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use nova_domain::notification::{EmailMessage, NotificationError};
use serde_json::Value;

use crate::{
    error::InfraError,
    notification::NotificationSender,
    repository::{
        DocumentId,
        DocumentStore,
        document_store::stamp_timestamps,
    },
};

// ===== MockDocumentStore =====

/// 保存済みドキュメント
#[derive(Debug, Clone)]
pub struct StoredDocument {
    pub id:         DocumentId,
    pub collection: String,
    pub body:       Value,
}

/// インメモリの DocumentStore
#[derive(Clone, Default)]
pub struct MockDocumentStore {
    documents: Arc<Mutex<Vec<StoredDocument>>>,
}

impl MockDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定コレクションの保存済みドキュメントを返す
    pub fn documents(&self, collection: &str) -> Vec<StoredDocument> {
        self.documents
            .lock()
            .unwrap()
            .iter()
            .filter(|d| d.collection == collection)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl DocumentStore for MockDocumentStore {
    async fn insert_one(
        &self,
        collection: &str,
        document: Value,
    ) -> Result<DocumentId, InfraError> {
        let id = DocumentId::new();
        let body = stamp_timestamps(document, Utc::now())?;
        self.documents.lock().unwrap().push(StoredDocument {
            id,
            collection: collection.to_string(),
            body,
        });
        Ok(id)
    }

    async fn list_collections(&self) -> Result<Vec<String>, InfraError> {
        let mut collections: Vec<String> = self
            .documents
            .lock()
            .unwrap()
            .iter()
            .map(|d| d.collection.clone())
            .collect();
        collections.sort();
        collections.dedup();
        Ok(collections)
    }
}

// ===== FailingDocumentStore =====

/// すべての操作が失敗する DocumentStore（DB 障害のシミュレーション）
#[derive(Clone)]
pub struct FailingDocumentStore {
    message: String,
}

impl FailingDocumentStore {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl DocumentStore for FailingDocumentStore {
    async fn insert_one(
        &self,
        _collection: &str,
        _document: Value,
    ) -> Result<DocumentId, InfraError> {
        Err(InfraError::unexpected(self.message.clone()))
    }

    async fn list_collections(&self) -> Result<Vec<String>, InfraError> {
        Err(InfraError::unexpected(self.message.clone()))
    }
}

// ===== RecordingNotificationSender =====

/// 送信したメールを記録する NotificationSender
#[derive(Clone, Default)]
pub struct RecordingNotificationSender {
    sent: Arc<Mutex<Vec<EmailMessage>>>,
}

impl RecordingNotificationSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// 送信済みメールを返す
    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationSender for RecordingNotificationSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError> {
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn mockストアは挿入したコレクションを重複なく返す() {
        let store = MockDocumentStore::new();
        store.insert_one("lead", serde_json::json!({})).await.unwrap();
        store.insert_one("lead", serde_json::json!({})).await.unwrap();
        store.insert_one("contact", serde_json::json!({})).await.unwrap();

        let collections = store.list_collections().await.unwrap();

        assert_eq!(collections, vec!["contact".to_string(), "lead".to_string()]);
        assert_eq!(store.documents("lead").len(), 2);
    }
}
