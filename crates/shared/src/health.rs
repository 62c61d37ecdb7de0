//! # ヘルスチェック共通型
//!
//! `GET /`（サービス稼働表示）と `GET /test`（DB 疎通プローブ）の
//! レスポンス型を提供する。

use serde::{Deserialize, Serialize};

/// サービス名（`GET /` で返す）
pub const SERVICE_NAME: &str = "NOVA Automations API";

/// サービス稼働レスポンス
///
/// ## 使用例
///
/// ```
/// use nova_shared::ServiceStatusResponse;
///
/// let response = ServiceStatusResponse::ok();
/// assert_eq!(response.status, "ok");
/// assert_eq!(response.service, "NOVA Automations API");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ServiceStatusResponse {
    /// 稼働状態（常に `"ok"`）
    pub status:  String,
    /// サービス名
    pub service: String,
}

impl ServiceStatusResponse {
    /// 稼働中を表すレスポンスを作成する
    pub fn ok() -> Self {
        Self {
            status:  "ok".to_string(),
            service: SERVICE_NAME.to_string(),
        }
    }
}

/// DB 疎通プローブのレスポンス
///
/// `ok` はプロセスが応答したことを示すため常に `true`。
/// `db` はデータベースへの疎通確認結果。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DbProbeResponse {
    pub ok: bool,
    pub db: bool,
}

impl DbProbeResponse {
    /// プローブ結果からレスポンスを作成する
    pub fn new(db: bool) -> Self {
        Self { ok: true, db }
    }
}
