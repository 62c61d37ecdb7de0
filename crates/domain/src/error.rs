//! # ドメイン層エラー定義
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 422 Unprocessable Entity | 入力値の検証失敗 |

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// `field` は API のリクエストボディ上のフィールド名（`"name"`, `"email"` など）。
    #[error("バリデーションエラー ({field}): {message}")]
    Validation {
        field:   &'static str,
        message: String,
    },
}

impl DomainError {
    /// バリデーションエラーを生成する
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// エラー対象のフィールド名を返す
    pub fn field(&self) -> &'static str {
        match self {
            Self::Validation { field, .. } => field,
        }
    }
}
