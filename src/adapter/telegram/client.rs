//! Telegram Client
//!
//! MessagingSession / SessionFactory の Telegram Bot API 実装

use std::ops::Range;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use log::{debug, info};
use reqwest::multipart::{Form, Part};
use reqwest::{Body, Client};
use serde::de::DeserializeOwned;
use tokio::fs::File;
use tokio_util::io::ReaderStream;

use super::markdown::TelegramCaption;
use super::media_group::{attach_name, plan_deliveries, Delivery};
use super::models::{ApiResponse, BotUser, InputMediaDocument, SentMessage};
use crate::domain::repositories::{MessagingSession, SendRequest, SessionFactory};

/// Bot API メソッドのURLを組み立てる
pub fn method_url(api_url: &str, bot_token: &str, method: &str) -> String {
    format!("{}/bot{}/{}", api_url, bot_token, method)
}

/// Bot API レスポンスを検証して結果を取り出す
pub async fn read_response<T: DeserializeOwned>(
    method: &str,
    response: reqwest::Response,
) -> Result<T> {
    let status = response.status();
    let body: ApiResponse<T> = response
        .json()
        .await
        .map_err(|e| e.without_url())
        .with_context(|| format!("Failed to parse {} response (HTTP {})", method, status))?;

    if !body.ok || !status.is_success() {
        bail!("Telegram API error in {}: {}", method, body.error_description());
    }

    body.result
        .with_context(|| format!("{} returned no result", method))
}

/// 認証済みの Bot API セッション
pub struct TelegramSession {
    http: Client,
    api_url: String,
    bot_token: String,
    bot: BotUser,
    closed: AtomicBool,
}

impl TelegramSession {
    pub fn new(http: Client, api_url: &str, bot_token: &str, bot: BotUser) -> Self {
        Self {
            http,
            api_url: api_url.to_string(),
            bot_token: bot_token.to_string(),
            bot,
            closed: AtomicBool::new(false),
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, form: Form) -> Result<T> {
        let url = method_url(&self.api_url, &self.bot_token, method);
        let response = self
            .http
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| e.without_url())
            .with_context(|| format!("{} request failed", method))?;

        read_response(method, response).await
    }

    /// 送信先・スレッドなど共通のフォームフィールド
    fn base_form(request: &SendRequest) -> Form {
        let form = Form::new().text("chat_id", request.chat.to_string());
        match request.thread_id {
            Some(thread_id) => form.text("message_thread_id", thread_id.to_string()),
            None => form,
        }
    }

    /// ファイルをメモリに読み込まずにストリームで添付する
    async fn file_part(path: &str) -> Result<Part> {
        let file = File::open(path)
            .await
            .with_context(|| format!("Failed to read {}", path))?;
        let length = file
            .metadata()
            .await
            .with_context(|| format!("Failed to stat {}", path))?
            .len();
        let file_name = Path::new(path)
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string());

        debug!("Attaching {} ({} bytes)", file_name, length);
        let body = Body::wrap_stream(ReaderStream::new(file));
        Ok(Part::stream_with_length(body, length).file_name(file_name))
    }

    async fn send_document(&self, request: &SendRequest, index: usize) -> Result<()> {
        let path = &request.files.paths()[index];
        let caption = request.captions.get(index).unwrap_or_default();

        let mut form = Self::base_form(request).part("document", Self::file_part(path).await?);
        if !caption.is_empty() {
            let caption = TelegramCaption::prepare(caption, request.parse_mode);
            form = form
                .text("caption", caption.text)
                .text("parse_mode", caption.parse_mode);
        }

        let message: SentMessage = self.call("sendDocument", form).await?;
        debug!("sendDocument delivered message {}", message.message_id);
        Ok(())
    }

    async fn send_album(&self, request: &SendRequest, range: Range<usize>) -> Result<()> {
        let mut form = Self::base_form(request);
        let mut media = Vec::with_capacity(range.len());

        for index in range {
            let name = attach_name(index);
            let mut entry = InputMediaDocument::attached(&name);
            let caption = request.captions.get(index).unwrap_or_default();
            if !caption.is_empty() {
                let caption = TelegramCaption::prepare(caption, request.parse_mode);
                entry = entry.with_caption(&caption.text, caption.parse_mode);
            }
            media.push(entry);
            form = form.part(name, Self::file_part(&request.files.paths()[index]).await?);
        }

        let media_json = serde_json::to_string(&media).context("Failed to encode media group")?;
        form = form.text("media", media_json);

        let messages: Vec<SentMessage> = self.call("sendMediaGroup", form).await?;
        debug!("sendMediaGroup delivered {} message(s)", messages.len());
        Ok(())
    }
}

#[async_trait]
impl MessagingSession for TelegramSession {
    async fn send_files(&self, request: &SendRequest) -> Result<()> {
        if self.is_closed() {
            bail!("Session already closed");
        }

        for delivery in plan_deliveries(request.files.len()) {
            match delivery {
                Delivery::Document(index) => self.send_document(request, index).await?,
                Delivery::Album(range) => self.send_album(request, range).await?,
            }
        }
        Ok(())
    }

    async fn close(&self) -> Result<()> {
        if !self.closed.swap(true, Ordering::SeqCst) {
            info!("Session for {} closed", self.bot.display_name());
        }
        Ok(())
    }
}

/// TelegramSession を生成するファクトリ
pub struct TelegramSessionFactory {
    api_url: String,
}

impl TelegramSessionFactory {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
        }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[async_trait]
impl SessionFactory for TelegramSessionFactory {
    async fn open(&self, bot_token: &str) -> Result<Box<dyn MessagingSession>> {
        let session =
            crate::adapter::auth::create_telegram_session(&self.api_url, bot_token).await?;
        Ok(Box::new(session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_session() -> TelegramSession {
        let bot = BotUser {
            id: 1,
            is_bot: true,
            username: Some("build_bot".to_string()),
            first_name: "Build".to_string(),
        };
        TelegramSession::new(Client::new(), "http://127.0.0.1:1", "1:token", bot)
    }

    #[test]
    fn test_method_url() {
        assert_eq!(
            method_url("https://api.telegram.org", "123:abc", "getMe"),
            "https://api.telegram.org/bot123:abc/getMe"
        );
    }

    #[tokio::test]
    async fn test_close_is_idempotent() {
        let session = test_session();

        session.close().await.unwrap();
        session.close().await.unwrap();

        assert!(session.is_closed());
    }

    #[tokio::test]
    async fn test_send_after_close_fails() {
        use crate::domain::entities::{CaptionSet, ChatTarget, FileSet};
        use crate::domain::repositories::ParseMode;

        let session = test_session();
        session.close().await.unwrap();

        let files = FileSet::new(vec!["a.zip".to_string()]).unwrap();
        let request = SendRequest {
            chat: ChatTarget::Id(1),
            captions: CaptionSet::for_files(&files, "c".to_string()),
            files,
            thread_id: None,
            parse_mode: ParseMode::Markdown,
        };

        let err = session.send_files(&request).await.unwrap_err();
        assert!(err.to_string().contains("closed"));
    }

    #[tokio::test]
    async fn test_missing_file_is_error() {
        let err = TelegramSession::file_part("/nonexistent/artifact.zip")
            .await
            .unwrap_err();

        assert!(err.to_string().contains("/nonexistent/artifact.zip"));
    }

    #[tokio::test]
    async fn test_file_part_reads_existing_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), b"kernel").unwrap();

        let part = TelegramSession::file_part(file.path().to_str().unwrap()).await;

        assert!(part.is_ok());
    }
}
