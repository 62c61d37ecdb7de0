//! # NOVA インフラ層
//!
//! 外部システムとの接続・通信を担当するインフラストラクチャ層。
//!
//! ## 責務
//!
//! - **データベース接続**: PostgreSQL への接続プール管理
//! - **ドキュメントストア**: コレクション名 + JSON ドキュメントの汎用永続化
//! - **通知送信**: メール通知の抽象化（現状は Noop のみ）
//!
//! ## 依存関係
//!
//! ```text
//! api → infra → domain
//!   ↘           ↗
//!     shared
//! ```
//!
//! ## モジュール構成
//!
//! - [`db`] - PostgreSQL データベース接続管理
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - ドキュメントストア実装
//! - [`notification`] - 通知送信
//! - `mock` - テスト用インメモリ実装（`test-utils` feature）

pub mod db;
pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod notification;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
