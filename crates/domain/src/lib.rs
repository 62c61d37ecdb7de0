//! # NOVA ドメイン層
//!
//! リード（見込み客の問い合わせ）とお客様の声（テスティモニアル）の
//! ドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **Newtype パターン**: 入力値を検証済みの型で表現し、不正な値の存在を排除
//! - **インフラ非依存**: 永続化や HTTP の詳細を持たない
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメインエラー
//! - [`lead`] - リードと入力値オブジェクト
//! - [`notification`] - 新規リード通知
//! - [`testimonial`] - お客様の声

#[macro_use]
mod macros;

pub mod error;
pub mod lead;
pub mod notification;
pub mod testimonial;

pub use error::DomainError;
