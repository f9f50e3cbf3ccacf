//! # Configuration DTO
//!
//! 検証済みのプロセス設定

use std::fmt;

use crate::domain::entities::ChatTarget;

pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

/// 検証済み設定
///
/// 起動時に一度だけ構築される。`Debug` 出力ではトークンを伏せる。
#[derive(Clone, PartialEq, Eq)]
pub struct Configuration {
    /// Bot トークン（認証情報）
    pub bot_token: String,
    /// 送信先
    pub chat_id: ChatTarget,
    /// スレッド/トピックID
    pub thread_id: Option<i64>,
    /// Bot API のベースURL（末尾の `/` なし）
    pub api_url: String,
}

impl Configuration {
    pub fn new(bot_token: impl Into<String>, chat_id: ChatTarget, thread_id: Option<i64>) -> Self {
        Self {
            bot_token: bot_token.into(),
            chat_id,
            thread_id,
            api_url: DEFAULT_API_URL.to_string(),
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .field("thread_id", &self.thread_id)
            .field("api_url", &self.api_url)
            .finish()
    }
}
