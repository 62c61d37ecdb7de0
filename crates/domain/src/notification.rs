//! # 通知
//!
//! 新規リード受付時のメール通知に関するドメインモデルを定義する。
//!
//! 通知は fire-and-forget で送信し、失敗してもリード受付には影響しない。

use thiserror::Error;

use crate::lead::Lead;

/// 通知送信エラー
#[derive(Debug, Error)]
pub enum NotificationError {
    /// メール送信に失敗
    #[error("メール送信に失敗: {0}")]
    SendFailed(String),
}

/// メールメッセージ
///
/// NotificationSender に渡される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    /// 送信先メールアドレス
    pub to:        String,
    /// 件名
    pub subject:   String,
    /// プレーンテキスト本文
    pub text_body: String,
}

/// 新規リード通知
///
/// リードから通知に必要な項目だけを取り出したもの。
/// spawn したタスクへ move できるよう、所有権を持つ値で保持する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadNotification {
    pub name:  String,
    pub email: String,
}

impl LeadNotification {
    pub fn from_lead(lead: &Lead) -> Self {
        Self {
            name:  lead.name().to_string(),
            email: lead.email().to_string(),
        }
    }

    /// 通知の要約行（`New lead: 名前 <メールアドレス>`）
    pub fn summary(&self) -> String {
        format!("New lead: {} <{}>", self.name, self.email)
    }

    /// 指定した宛先へのメールを組み立てる
    pub fn to_email(&self, recipient: &str) -> EmailMessage {
        EmailMessage {
            to:        recipient.to_string(),
            subject:   self.summary(),
            text_body: format!(
                "A new lead was submitted.\n\nName: {}\nEmail: {}\n",
                self.name, self.email
            ),
        }
    }
}
