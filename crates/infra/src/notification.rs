//! # 通知送信
//!
//! メール通知の送信を担当するインフラストラクチャモジュール。
//!
//! `NotificationSender` trait でメール送信を抽象化する。
//! 現状の実装はログ出力のみの Noop。

mod noop;

use async_trait::async_trait;
pub use noop::NoopNotificationSender;
use nova_domain::notification::{EmailMessage, NotificationError};

/// メール送信トレイト
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// メールを送信する
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError>;
}
