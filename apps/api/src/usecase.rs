//! # ユースケース層
//!
//! ハンドラから呼ばれるアプリケーションロジックを配置する。

pub mod lead;
pub mod notification;

pub use lead::LeadUseCase;
pub use notification::LeadNotifier;
