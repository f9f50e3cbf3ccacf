//! Bot Authentication
//!
//! Bot トークンを検証してセッションを開始する

use std::time::Duration;

use anyhow::{Context, Result};
use log::info;
use reqwest::Client;

use crate::adapter::telegram::client::{method_url, read_response, TelegramSession};
use crate::adapter::telegram::models::BotUser;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// ログ用にトークンの秘密部分を伏せる
///
/// `<bot id>:<secret>` 形式なら bot id だけ残す
pub fn mask_token(bot_token: &str) -> String {
    match bot_token.split_once(':') {
        Some((id, _)) => format!("{}:***", id),
        None => "***".to_string(),
    }
}

/// HTTPクライアントを作成
///
/// 大きなファイルを送るため全体のタイムアウトは設定しない（接続のみ）
pub fn build_http_client() -> Result<Client> {
    Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .build()
        .context("Failed to create HTTP client")
}

/// Bot トークンで認証し、セッションを作成する
pub async fn create_telegram_session(api_url: &str, bot_token: &str) -> Result<TelegramSession> {
    let http = build_http_client()?;

    let response = http
        .get(method_url(api_url, bot_token, "getMe"))
        .send()
        .await
        .map_err(|e| e.without_url())
        .context("Failed to reach Telegram Bot API")?;

    let bot: BotUser = read_response("getMe", response)
        .await
        .with_context(|| format!("Failed to authenticate bot {}", mask_token(bot_token)))?;

    info!("Logged in as {}", bot.display_name());

    Ok(TelegramSession::new(http, api_url, bot_token, bot))
}
