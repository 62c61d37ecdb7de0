//! # ヘルスチェックハンドラ
//!
//! - `GET /`: サービス稼働表示（常に `{"status": "ok", ...}`）
//! - `GET /test`: DB 疎通プローブ
//!
//! プローブは失敗をすべて `db: false` に変換し、HTTP ステータスは常に 200 を返す。

use std::{sync::Arc, time::Duration};

use axum::{Json, extract::State};
use nova_infra::repository::DocumentStore;
use nova_shared::{DbProbeResponse, ServiceStatusResponse};

/// DB 疎通確認のタイムアウト
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// サービス稼働表示エンドポイント
#[utoipa::path(
    get,
    path = "/",
    tag = "root",
    responses(
        (status = 200, description = "サーバー稼働中", body = ServiceStatusResponse)
    )
)]
pub async fn service_status() -> Json<ServiceStatusResponse> {
    Json(ServiceStatusResponse::ok())
}

/// DB 疎通プローブ用の State
pub struct ProbeState {
    pub document_store: Arc<dyn DocumentStore>,
}

/// DB 疎通プローブエンドポイント
///
/// コレクション一覧の取得を軽量な疎通確認として使う。
#[utoipa::path(
    get,
    path = "/test",
    tag = "health",
    responses(
        (status = 200, description = "プローブ結果（DB 障害時も 200）", body = DbProbeResponse)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn db_probe(State(state): State<Arc<ProbeState>>) -> Json<DbProbeResponse> {
    let db = match tokio::time::timeout(PROBE_TIMEOUT, state.document_store.list_collections())
        .await
    {
        Ok(Ok(_)) => true,
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "db probe: list collections failed");
            false
        }
        Err(_) => {
            tracing::warn!("db probe: timed out");
            false
        }
    };

    Json(DbProbeResponse::new(db))
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use nova_infra::{
        InfraError,
        mock::{FailingDocumentStore, MockDocumentStore},
        repository::{DocumentId, UnavailableDocumentStore},
    };
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    use super::*;

    /// 応答を返さない DocumentStore（DB がハングした状態）
    struct HangingDocumentStore;

    #[async_trait]
    impl DocumentStore for HangingDocumentStore {
        async fn insert_one(
            &self,
            _collection: &str,
            _document: Value,
        ) -> Result<DocumentId, InfraError> {
            std::future::pending().await
        }

        async fn list_collections(&self) -> Result<Vec<String>, InfraError> {
            std::future::pending().await
        }
    }

    async fn probe_with(store: Arc<dyn DocumentStore>) -> DbProbeResponse {
        let state = Arc::new(ProbeState {
            document_store: store,
        });
        let Json(response) = db_probe(State(state)).await;
        response
    }

    #[tokio::test]
    async fn test_dbに接続できる場合はdb_trueを返す() {
        let response = probe_with(Arc::new(MockDocumentStore::new())).await;

        assert_eq!(response, DbProbeResponse { ok: true, db: true });
    }

    #[tokio::test]
    async fn test_db障害時もok_trueでdb_falseを返す() {
        let response = probe_with(Arc::new(FailingDocumentStore::new("connection refused"))).await;

        assert_eq!(response, DbProbeResponse { ok: true, db: false });
    }

    #[tokio::test]
    async fn test_db未設定の場合はdb_falseを返す() {
        let response = probe_with(Arc::new(UnavailableDocumentStore)).await;

        assert!(!response.db);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dbが応答しない場合はタイムアウトしてdb_falseを返す() {
        let response = probe_with(Arc::new(HangingDocumentStore)).await;

        assert_eq!(response, DbProbeResponse { ok: true, db: false });
    }
}
