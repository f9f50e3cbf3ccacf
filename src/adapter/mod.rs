//! Adapter Layer
//!
//! 外部システム（環境変数, Telegram Bot API）との統合

pub mod auth;
pub mod config;
pub mod telegram;
