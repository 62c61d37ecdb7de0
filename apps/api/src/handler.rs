//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、ロジックはユースケース層・ドメイン層に委譲
//!
//! ## モジュール構成
//!
//! ```text
//! handler.rs              # 親モジュール（re-export）
//! └── handler/
//!     ├── health.rs       # サービス稼働表示・DB 疎通プローブ
//!     ├── lead.rs         # リード受付
//!     ├── openapi.rs      # OpenAPI ドキュメント配信
//!     └── testimonial.rs  # お客様の声
//! ```

pub mod health;
pub mod lead;
pub mod openapi;
pub mod testimonial;

pub use health::{ProbeState, db_probe, service_status};
pub use lead::{LeadState, create_lead};
pub use openapi::openapi_json;
pub use testimonial::list_testimonials;
