//! # お客様の声
//!
//! サイトに掲載する固定のテスティモニアル。DB には保存せず、
//! リクエストのたびにリテラルから組み立てる。

use serde::Serialize;

/// テスティモニアル
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Testimonial {
    /// 発言者名
    pub name:   String,
    /// 肩書き（役職, 会社名）
    pub role:   String,
    /// 推薦コメント
    pub quote:  String,
    /// アバター画像の参照（未設定時は `null`）
    pub avatar: Option<String>,
}

impl Testimonial {
    fn new(name: &str, role: &str, quote: &str) -> Self {
        Self {
            name:   name.to_string(),
            role:   role.to_string(),
            quote:  quote.to_string(),
            avatar: None,
        }
    }

    /// 掲載中のテスティモニアル一覧（3 件）
    pub fn featured() -> Vec<Self> {
        vec![
            Self::new(
                "Maya Patel",
                "COO, Horizon",
                "They automated our onboarding and support. NPS went up and costs went down.",
            ),
            Self::new(
                "James Turner",
                "Head of Sales, Northbeam",
                "The AI SDR added pipeline from day one. We booked 4.7x more demos.",
            ),
            Self::new(
                "Lena Fischer",
                "CX Lead, Lumos",
                "Agent-first helpdesk deflected 52% of tickets, with seamless escalation.",
            ),
        ]
    }
}
