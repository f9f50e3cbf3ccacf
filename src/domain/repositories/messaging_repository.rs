//! # Messaging Repository Traits
//!
//! メッセージングバックエンドとのセッションを抽象化

use anyhow::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::{CaptionSet, ChatTarget, FileSet};

/// キャプションの描画モード
///
/// `Markdown` は `**bold**` / `__italic__` 形式。
/// バックエンド固有の方言への変換は Adapter層で行う
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    #[default]
    Markdown,
}

/// 1回の送信操作に渡すパラメータ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendRequest {
    /// 送信先
    pub chat: ChatTarget,
    /// 送信するファイル（順序付き）
    pub files: FileSet,
    /// ファイルとインデックスが揃ったキャプション
    pub captions: CaptionSet,
    /// スレッド/トピックID（任意のルーティングパラメータ）
    pub thread_id: Option<i64>,
    pub parse_mode: ParseMode,
}

/// 認証済みセッション
///
/// 1回の公開操作の間だけ排他的に所有される
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MessagingSession: Send + Sync {
    /// 全ファイルを1つのメッセージとして送信
    ///
    /// # Errors
    ///
    /// 送信に失敗した場合。一部のファイルが届いたとは仮定しないこと
    async fn send_files(&self, request: &SendRequest) -> Result<()>;

    /// セッションを解放
    async fn close(&self) -> Result<()>;
}

/// セッションを生成するファクトリ
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SessionFactory: Send + Sync {
    /// トークンで認証してセッションを開始
    async fn open(&self, bot_token: &str) -> Result<Box<dyn MessagingSession>>;
}
