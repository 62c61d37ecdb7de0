//! # API 設定
//!
//! 環境変数から API サーバーの設定を読み込む。
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|-----------|------|
//! | `API_HOST` | No | `0.0.0.0` | バインドアドレス |
//! | `API_PORT` | No | `8000` | ポート番号 |
//! | `DATABASE_URL` | No | - | PostgreSQL 接続 URL（未設定時は DB なしで起動） |
//! | `FRONTEND_URL` | No | `*` | CORS で許可するオリジン |
//! | `NOTIFICATION_TO_ADDRESS` | No | `sales@nova-automations.example.com` | 新規リード通知の宛先 |

use std::env;

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_FRONTEND_URL: &str = "*";
const DEFAULT_NOTIFICATION_TO: &str = "sales@nova-automations.example.com";

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API_PORT は有効なポート番号である必要があります: {0:?}")]
    InvalidPort(String),
}

/// API サーバーの設定
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// バインドアドレス
    pub host:            String,
    /// ポート番号
    pub port:            u16,
    /// データベース接続 URL
    pub database_url:    Option<String>,
    /// CORS で許可するオリジン（`*` は全許可）
    pub frontend_url:    String,
    /// 新規リード通知の宛先
    pub notification_to: String,
}

impl ApiConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意のキー参照関数から設定を読み込む
    ///
    /// 空文字列は未設定として扱う。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let port = match get("API_PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: get("API_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            database_url: get("DATABASE_URL"),
            frontend_url: get("FRONTEND_URL").unwrap_or_else(|| DEFAULT_FRONTEND_URL.to_string()),
            notification_to: get("NOTIFICATION_TO_ADDRESS")
                .unwrap_or_else(|| DEFAULT_NOTIFICATION_TO.to_string()),
        })
    }
}
