//! # NOVA Automations API
//!
//! マーケティングサイト向けの小さな API サーバー。
//!
//! ## エンドポイント
//!
//! | メソッド | パス | 内容 |
//! |---------|------|------|
//! | GET | `/` | サービス稼働表示 |
//! | GET | `/test` | DB 疎通プローブ |
//! | POST | `/leads` | 問い合わせ（リード）の受付 |
//! | GET | `/testimonials` | お客様の声（固定 3 件） |
//! | GET | `/openapi.json` | OpenAPI ドキュメント |
//!
//! ## モジュール構成
//!
//! - [`app_builder`] - ルーター構築と CORS 設定
//! - [`config`] - アプリケーション設定（環境変数からの読み込み）
//! - [`error`] - API エラー定義と HTTP レスポンスへの変換
//! - [`handler`] - HTTP リクエストハンドラ
//! - [`openapi`] - OpenAPI 仕様定義
//! - [`usecase`] - ユースケース（リード受付と通知）

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod openapi;
pub mod usecase;
