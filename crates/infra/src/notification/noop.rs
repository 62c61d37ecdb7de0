//! Noop 通知送信実装
//!
//! メールを実際に送信せず、件名をログに出力する。

use async_trait::async_trait;
use nova_domain::notification::{EmailMessage, NotificationError};

use super::NotificationSender;

/// Noop 通知送信（ログ出力のみ）
#[derive(Debug, Clone)]
pub struct NoopNotificationSender;

#[async_trait]
impl NotificationSender for NoopNotificationSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError> {
        tracing::info!(to = %email.to, "{}", email.subject);
        Ok(())
    }
}
