//! # NOVA 共有ユーティリティ
//!
//! NOVA Automations API の全クレートから使用される共通ユーティリティ。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum への依存は持たない（`IntoResponse` 変換は API 層の責務）
//! - ログ初期化など重い依存は feature で切り出す

pub mod error_response;
pub mod event_log;
pub mod health;
pub mod observability;

pub use error_response::ErrorResponse;
pub use health::{DbProbeResponse, ServiceStatusResponse};
