//! Telegram Bot API Models
//!
//! Bot API のリクエスト/レスポンス型

use serde::{Deserialize, Serialize};

/// Bot API 共通レスポンス
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub description: Option<String>,
    pub error_code: Option<i64>,
    pub result: Option<T>,
}

impl<T> ApiResponse<T> {
    /// エラー説明（なければ "unknown error"）
    pub fn error_description(&self) -> String {
        match (&self.error_code, &self.description) {
            (Some(code), Some(desc)) => format!("{} {}", code, desc),
            (None, Some(desc)) => desc.clone(),
            (Some(code), None) => code.to_string(),
            (None, None) => "unknown error".to_string(),
        }
    }
}

/// getMe の結果
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct BotUser {
    pub id: i64,
    pub is_bot: bool,
    pub username: Option<String>,
    pub first_name: String,
}

impl BotUser {
    pub fn display_name(&self) -> String {
        match &self.username {
            Some(username) => format!("@{}", username),
            None => self.first_name.clone(),
        }
    }
}

/// 送信済みメッセージ（必要なフィールドのみ）
#[derive(Debug, Clone, Deserialize)]
pub struct SentMessage {
    pub message_id: i64,
}

/// sendMediaGroup の `media` 要素
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InputMediaDocument {
    #[serde(rename = "type")]
    pub media_type: &'static str,
    /// `attach://<name>` 形式の参照
    pub media: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<&'static str>,
}

impl InputMediaDocument {
    pub fn attached(attach_name: &str) -> Self {
        Self {
            media_type: "document",
            media: format!("attach://{}", attach_name),
            caption: None,
            parse_mode: None,
        }
    }

    /// 空でないキャプションのみ設定する
    pub fn with_caption(mut self, caption: &str, parse_mode: &'static str) -> Self {
        if !caption.is_empty() {
            self.caption = Some(caption.to_string());
            self.parse_mode = Some(parse_mode);
        }
        self
    }
}
