//! # DocumentStore
//!
//! コレクション名で分類した JSON ドキュメントを保存する汎用ストア。
//!
//! ## 設計方針
//!
//! - **挿入のみ**: 更新・削除は提供しない
//! - **ID はストアが採番**: UUID v7 を生成して返す
//! - **タイムスタンプ付与**: 保存時に `created_at` / `updated_at` を本文へ追記する
//! - **疎通確認**: `list_collections` を軽量なヘルスチェックとして使う
//! - **スキーマ準備**: 初回アクセス時にマイグレーションを適用する。失敗した場合は
//!   次のアクセスで再試行するため、起動時に DB が落ちていても復旧後に動作する
//!
//! ## テーブル構造
//!
//! ```text
//! documents
//! ├── id          UUID PRIMARY KEY
//! ├── collection  TEXT      -- "lead" など
//! ├── body        JSONB     -- ドキュメント本文（タイムスタンプ含む）
//! ├── created_at  TIMESTAMPTZ
//! └── updated_at  TIMESTAMPTZ
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use derive_more::Display;
use serde_json::Value;
use sqlx::PgPool;
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::{db, error::InfraError};

/// ストアが採番したドキュメント ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display("{_0}")]
pub struct DocumentId(Uuid);

impl DocumentId {
    /// 新しい ID を生成する（UUID v7）
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// 内部の UUID を取得する
    pub fn into_uuid(self) -> Uuid {
        self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

/// ドキュメントストアトレイト
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// コレクションにドキュメントを 1 件挿入し、採番した ID を返す
    ///
    /// `document` は JSON オブジェクトである必要がある。
    async fn insert_one(&self, collection: &str, document: Value)
    -> Result<DocumentId, InfraError>;

    /// ドキュメントが存在するコレクション名を昇順で返す
    async fn list_collections(&self) -> Result<Vec<String>, InfraError>;
}

/// 本文に `created_at` / `updated_at` を追記する
///
/// JSON オブジェクト以外は保存できないためエラーにする。
pub(crate) fn stamp_timestamps(document: Value, now: DateTime<Utc>) -> Result<Value, InfraError> {
    let Value::Object(mut map) = document else {
        return Err(InfraError::unexpected(
            "ドキュメントは JSON オブジェクトである必要があります",
        ));
    };

    let timestamp = serde_json::to_value(now)?;
    map.insert("created_at".to_string(), timestamp.clone());
    map.insert("updated_at".to_string(), timestamp);

    Ok(Value::Object(map))
}

/// PostgreSQL 実装の DocumentStore
#[derive(Debug)]
pub struct PostgresDocumentStore {
    pool:         PgPool,
    schema_ready: OnceCell<()>,
}

impl PostgresDocumentStore {
    /// 新しいストアインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            schema_ready: OnceCell::new(),
        }
    }

    /// マイグレーションを適用する（成功するまで呼び出しごとに再試行する）
    ///
    /// 一度成功した後はマイグレーションを再実行しない。
    pub async fn ensure_schema(&self) -> Result<(), InfraError> {
        self.schema_ready
            .get_or_try_init(|| async {
                db::run_migrations(&self.pool).await?;
                Ok::<(), InfraError>(())
            })
            .await?;
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for PostgresDocumentStore {
    #[tracing::instrument(skip(self, document), level = "debug")]
    async fn insert_one(
        &self,
        collection: &str,
        document: Value,
    ) -> Result<DocumentId, InfraError> {
        self.ensure_schema().await?;

        let id = DocumentId::new();
        let now = Utc::now();
        let body = stamp_timestamps(document, now)?;

        sqlx::query(
            r#"
            INSERT INTO documents (id, collection, body, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(id.into_uuid())
        .bind(collection)
        .bind(&body)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(id)
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn list_collections(&self) -> Result<Vec<String>, InfraError> {
        self.ensure_schema().await?;

        let collections = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT collection FROM documents ORDER BY collection",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(collections)
    }
}

/// データベース未設定時の DocumentStore
///
/// すべての操作が [`InfraErrorKind::Unavailable`](crate::InfraErrorKind::Unavailable)
/// で失敗する。`DATABASE_URL` なしでもサーバーを起動できるようにするために使う。
#[derive(Debug, Clone, Default)]
pub struct UnavailableDocumentStore;

const UNAVAILABLE_REASON: &str = "DATABASE_URL が設定されていません";

#[async_trait]
impl DocumentStore for UnavailableDocumentStore {
    async fn insert_one(
        &self,
        _collection: &str,
        _document: Value,
    ) -> Result<DocumentId, InfraError> {
        Err(InfraError::unavailable(UNAVAILABLE_REASON))
    }

    async fn list_collections(&self) -> Result<Vec<String>, InfraError> {
        Err(InfraError::unavailable(UNAVAILABLE_REASON))
    }
}
