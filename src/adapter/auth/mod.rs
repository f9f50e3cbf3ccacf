//! Authentication Module
//!
//! Bot トークンによる認証関連の機能

pub mod bot_auth;

pub use bot_auth::create_telegram_session;
