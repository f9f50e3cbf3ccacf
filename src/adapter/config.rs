//! Environment Configuration
//!
//! 環境変数から設定を読み込んで検証する

use std::collections::HashMap;

use thiserror::Error;

use crate::application::dto::configuration::{Configuration, DEFAULT_API_URL};
use crate::domain::entities::ChatTarget;

pub const BOT_TOKEN_VAR: &str = "BOT_TOKEN";
pub const CHAT_ID_VAR: &str = "CHATID";
pub const THREAD_ID_VAR: &str = "MESSAGE_THREAD_ID";
pub const API_URL_VAR: &str = "BOT_API_URL";

/// 設定の検証エラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid BOT_TOKEN")]
    MissingBotToken,

    #[error("invalid CHAT_ID")]
    MissingChatId,

    #[error("invalid MESSAGE_THREAD_ID: {value:?}")]
    InvalidThreadId { value: String },
}

/// 環境変数ベースの設定ローダー
///
/// 呼び出し側が `std::env::vars()` をマップに集めて渡す
pub struct EnvConfig;

impl EnvConfig {
    /// キーと値のマップから設定を検証する（副作用なし）
    ///
    /// BOT_TOKEN → CHATID → MESSAGE_THREAD_ID の順に検証し、最初のエラーを返す。
    pub fn from_map(vars: &HashMap<String, String>) -> Result<Configuration, ConfigError> {
        let bot_token = match vars.get(BOT_TOKEN_VAR) {
            Some(token) if !token.is_empty() => token.clone(),
            _ => return Err(ConfigError::MissingBotToken),
        };

        let chat_id = vars
            .get(CHAT_ID_VAR)
            .map(|raw| ChatTarget::parse(raw))
            .ok_or(ConfigError::MissingChatId)?;

        let thread_id = parse_thread_id(vars.get(THREAD_ID_VAR).map(String::as_str))?;

        let api_url = vars
            .get(API_URL_VAR)
            .filter(|url| !url.is_empty())
            .map(String::as_str)
            .unwrap_or(DEFAULT_API_URL);

        Ok(Configuration::new(bot_token, chat_id, thread_id).with_api_url(api_url))
    }
}

/// MESSAGE_THREAD_ID を解釈する
///
/// 未設定または空文字列は「スレッドなし」。前後の空白は無視する
pub fn parse_thread_id(raw: Option<&str>) -> Result<Option<i64>, ConfigError> {
    match raw {
        None | Some("") => Ok(None),
        Some(value) => value
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidThreadId {
                value: value.to_string(),
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_valid_numeric_chat_id() {
        let config =
            EnvConfig::from_map(&vars(&[("BOT_TOKEN", "123:abc"), ("CHATID", "12345")])).unwrap();

        assert_eq!(config.bot_token, "123:abc");
        assert_eq!(config.chat_id, ChatTarget::Id(12345));
        assert_eq!(config.thread_id, None);
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_symbolic_chat_id_is_not_an_error() {
        let config =
            EnvConfig::from_map(&vars(&[("BOT_TOKEN", "t"), ("CHATID", "@mychannel")])).unwrap();

        assert_eq!(config.chat_id, ChatTarget::Username("@mychannel".to_string()));
    }

    #[test]
    fn test_missing_bot_token() {
        let result = EnvConfig::from_map(&vars(&[("CHATID", "1")]));

        assert_eq!(result, Err(ConfigError::MissingBotToken));
    }

    #[test]
    fn test_empty_bot_token_is_missing() {
        let result = EnvConfig::from_map(&vars(&[("BOT_TOKEN", ""), ("CHATID", "1")]));

        assert_eq!(result, Err(ConfigError::MissingBotToken));
    }

    #[test]
    fn test_bot_token_checked_before_chat_id() {
        let result = EnvConfig::from_map(&vars(&[("MESSAGE_THREAD_ID", "abc")]));

        assert_eq!(result, Err(ConfigError::MissingBotToken));
    }

    #[test]
    fn test_missing_chat_id() {
        let result = EnvConfig::from_map(&vars(&[("BOT_TOKEN", "t")]));

        assert_eq!(result, Err(ConfigError::MissingChatId));
    }

    #[test]
    fn test_chat_id_checked_before_thread_id() {
        let result =
            EnvConfig::from_map(&vars(&[("BOT_TOKEN", "t"), ("MESSAGE_THREAD_ID", "abc")]));

        assert_eq!(result, Err(ConfigError::MissingChatId));
    }

    #[test]
    fn test_thread_id_numeric() {
        let config = EnvConfig::from_map(&vars(&[
            ("BOT_TOKEN", "t"),
            ("CHATID", "1"),
            ("MESSAGE_THREAD_ID", "42"),
        ]))
        .unwrap();

        assert_eq!(config.thread_id, Some(42));
    }

    #[test]
    fn test_numeric_values_tolerate_trailing_whitespace() {
        let config = EnvConfig::from_map(&vars(&[
            ("BOT_TOKEN", "t"),
            ("CHATID", " 12345\n"),
            ("MESSAGE_THREAD_ID", "42 "),
        ]))
        .unwrap();

        assert_eq!(config.chat_id, ChatTarget::Id(12345));
        assert_eq!(config.thread_id, Some(42));
    }

    #[test]
    fn test_thread_id_empty_is_absent() {
        let config = EnvConfig::from_map(&vars(&[
            ("BOT_TOKEN", "t"),
            ("CHATID", "1"),
            ("MESSAGE_THREAD_ID", ""),
        ]))
        .unwrap();

        assert_eq!(config.thread_id, None);
    }

    #[test]
    fn test_thread_id_invalid() {
        let result = EnvConfig::from_map(&vars(&[
            ("BOT_TOKEN", "t"),
            ("CHATID", "1"),
            ("MESSAGE_THREAD_ID", "abc"),
        ]));

        assert_eq!(
            result,
            Err(ConfigError::InvalidThreadId {
                value: "abc".to_string()
            })
        );
    }

    #[test]
    fn test_custom_api_url() {
        let config = EnvConfig::from_map(&vars(&[
            ("BOT_TOKEN", "t"),
            ("CHATID", "1"),
            ("BOT_API_URL", "http://127.0.0.1:8081/"),
        ]))
        .unwrap();

        assert_eq!(config.api_url, "http://127.0.0.1:8081");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ConfigError::MissingBotToken.to_string(), "invalid BOT_TOKEN");
        assert_eq!(ConfigError::MissingChatId.to_string(), "invalid CHAT_ID");
        assert!(ConfigError::InvalidThreadId {
            value: "x".to_string()
        }
        .to_string()
        .starts_with("invalid MESSAGE_THREAD_ID"));
    }

    #[test]
    fn test_parse_thread_id() {
        assert_eq!(parse_thread_id(None), Ok(None));
        assert_eq!(parse_thread_id(Some("")), Ok(None));
        assert_eq!(parse_thread_id(Some("7")), Ok(Some(7)));
        assert!(parse_thread_id(Some("7a")).is_err());
        assert!(parse_thread_id(Some("  ")).is_err());
    }
}
