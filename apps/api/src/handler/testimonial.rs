//! # お客様の声ハンドラ

use axum::Json;
use nova_domain::testimonial::Testimonial;

/// お客様の声一覧エンドポイント
#[utoipa::path(
    get,
    path = "/testimonials",
    tag = "content",
    responses(
        (status = 200, description = "お客様の声（3 件）", body = Vec<Testimonial>)
    )
)]
pub async fn list_testimonials() -> Json<Vec<Testimonial>> {
    Json(Testimonial::featured())
}
