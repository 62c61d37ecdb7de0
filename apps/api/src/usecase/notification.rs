//! # 新規リード通知
//!
//! リード受付後のメール通知を fire-and-forget で送信する。
//!
//! - 送信は `tokio::spawn` したタスクで行い、レスポンスを待たせない
//! - 送信失敗はログに残すのみで、呼び出し元には返さない
//! - プロセス終了時に未完了のタスクは破棄されうる

use std::sync::Arc;

use nova_domain::notification::LeadNotification;
use nova_infra::notification::NotificationSender;
use nova_shared::{event_log::event, log_business_event};
use tokio::task::JoinHandle;

/// 新規リード通知サービス
#[derive(Clone)]
pub struct LeadNotifier {
    sender:    Arc<dyn NotificationSender>,
    recipient: String,
}

impl LeadNotifier {
    pub fn new(sender: Arc<dyn NotificationSender>, recipient: impl Into<String>) -> Self {
        Self {
            sender,
            recipient: recipient.into(),
        }
    }

    /// 通知を送信する（失敗してもエラーを返さない）
    pub async fn notify(&self, notification: &LeadNotification) {
        let email = notification.to_email(&self.recipient);

        match self.sender.send_email(&email).await {
            Ok(()) => {
                log_business_event!(
                    event.category = event::category::NOTIFICATION,
                    event.action = event::action::NOTIFICATION_SENT,
                    event.result = event::result::SUCCESS,
                    notification.recipient = %email.to,
                    "新規リード通知を送信しました"
                );
            }
            Err(e) => {
                log_business_event!(
                    event.category = event::category::NOTIFICATION,
                    event.action = event::action::NOTIFICATION_FAILED,
                    event.result = event::result::FAILURE,
                    notification.recipient = %email.to,
                    error = %e,
                    "新規リード通知の送信に失敗しました"
                );
            }
        }
    }

    /// 通知をバックグラウンドタスクで送信する
    ///
    /// 返り値の `JoinHandle` は待たずに捨ててよい。
    pub fn spawn(&self, notification: LeadNotification) -> JoinHandle<()> {
        let notifier = self.clone();
        tokio::spawn(async move { notifier.notify(&notification).await })
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use nova_domain::notification::{EmailMessage, NotificationError};
    use nova_infra::mock::RecordingNotificationSender;
    use pretty_assertions::assert_eq;

    use super::*;

    struct FailingSender;

    #[async_trait]
    impl NotificationSender for FailingSender {
        async fn send_email(&self, _email: &EmailMessage) -> Result<(), NotificationError> {
            Err(NotificationError::SendFailed("smtp down".to_string()))
        }
    }

    fn jane() -> LeadNotification {
        LeadNotification {
            name:  "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_spawnしたタスクが宛先に通知を送る() {
        let sender = RecordingNotificationSender::new();
        let notifier = LeadNotifier::new(Arc::new(sender.clone()), "sales@example.com");

        notifier.spawn(jane()).await.unwrap();

        let sent = sender.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "sales@example.com");
        assert_eq!(sent[0].subject, "New lead: Jane Doe <jane@example.com>");
    }

    #[tokio::test]
    async fn test_送信失敗してもタスクはパニックしない() {
        let notifier = LeadNotifier::new(Arc::new(FailingSender), "sales@example.com");

        let result = notifier.spawn(jane()).await;

        assert!(result.is_ok());
    }
}
