//! # Domain Services
//!
//! - **CaptionService**: キャプション文字列の生成

pub mod caption;

pub use caption::{CaptionService, MAX_CAPTION_LEN};
