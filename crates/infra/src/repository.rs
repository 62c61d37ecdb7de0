//! # リポジトリ実装
//!
//! 永続化の具体的な実装を提供する。
//!
//! - [`document_store`] - コレクション名 + JSON ドキュメントの汎用ストア

pub mod document_store;

pub use document_store::{
    DocumentId,
    DocumentStore,
    PostgresDocumentStore,
    UnavailableDocumentStore,
};
