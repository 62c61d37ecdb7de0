//! # OpenAPI 仕様定義
//!
//! utoipa を使用して OpenAPI 仕様を Rust の型から自動生成する。
//! `ApiDoc::openapi()` で OpenAPI ドキュメントを取得できる。

use utoipa::OpenApi;

use crate::handler::{health, lead, testimonial};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "NOVA Automations API",
        version = "1.0.0",
        description = "NOVA Automations のマーケティングサイト向け API"
    ),
    paths(
        health::service_status,
        health::db_probe,
        lead::create_lead,
        testimonial::list_testimonials,
    ),
    tags(
        (name = "root", description = "サービス稼働表示"),
        (name = "health", description = "DB 疎通プローブ"),
        (name = "leads", description = "問い合わせ（リード）の受付"),
        (name = "content", description = "サイト掲載コンテンツ"),
    )
)]
pub struct ApiDoc;
