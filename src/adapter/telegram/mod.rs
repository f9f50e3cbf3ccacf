//! Telegram Adapter Modules
//!
//! Telegram Bot API 統合のためのアダプターモジュール

pub mod client;
pub mod markdown;
pub mod media_group;
pub mod models;

pub use client::{TelegramSession, TelegramSessionFactory};
