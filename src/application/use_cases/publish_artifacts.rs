//! # Publish Artifacts Use Case
//!
//! ビルド成果物を1つのマルチ添付メッセージとして送信するユースケース

use std::sync::Arc;

use anyhow::{Context, Result};
use log::{info, warn};

use crate::application::dto::Configuration;
use crate::domain::entities::{BuildMetadata, CaptionSet, FileSet, FileSetError};
use crate::domain::repositories::{ParseMode, SendRequest, SessionFactory};
use crate::domain::services::CaptionService;

/// 送信前に確定した内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishPlan {
    pub files: FileSet,
    pub captions: CaptionSet,
}

/// 公開結果のサマリー
#[derive(Debug, Clone)]
pub struct PublishSummary {
    /// 送信したファイル数
    pub file_count: usize,
    /// 最後のファイルに付けたキャプション
    pub caption: String,
}

/// 成果物公開ユースケース
///
/// セッションを取得し、全ファイルを1回の送信操作で届け、
/// 結果にかかわらずセッションを解放する
pub struct PublishArtifactsUseCase<F: SessionFactory> {
    session_factory: Arc<F>,
}

impl<F: SessionFactory> PublishArtifactsUseCase<F> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `session_factory` - セッションファクトリ
    pub fn new(session_factory: Arc<F>) -> Self {
        Self { session_factory }
    }

    /// ファイルセットとキャプションを確定する（ネットワークアクセスなし）
    ///
    /// # Errors
    ///
    /// ファイルが1つもない場合は `FileSetError::Empty`
    pub fn prepare(
        files: Vec<String>,
        metadata: &BuildMetadata,
    ) -> Result<PublishPlan, FileSetError> {
        let files = FileSet::new(files)?;
        let captions = CaptionService::caption_set(&files, metadata);
        Ok(PublishPlan { files, captions })
    }

    /// 成果物を送信
    ///
    /// # Arguments
    ///
    /// * `config` - 検証済み設定
    /// * `files` - 送信するファイルパス（順序付き）
    /// * `metadata` - キャプションに使うビルド情報
    ///
    /// # Errors
    ///
    /// ファイルが空の場合はセッションを開かずにエラーを返す。
    /// ログイン・送信に失敗した場合もエラー（部分的な成功は報告しない）
    pub async fn execute(
        &self,
        config: &Configuration,
        files: Vec<String>,
        metadata: &BuildMetadata,
    ) -> Result<PublishSummary> {
        let plan = Self::prepare(files, metadata)?;
        self.publish(config, plan).await
    }

    /// 確定済みの内容を送信
    pub async fn publish(
        &self,
        config: &Configuration,
        plan: PublishPlan,
    ) -> Result<PublishSummary> {
        let summary = PublishSummary {
            file_count: plan.files.len(),
            caption: plan.captions.caption().to_string(),
        };

        let request = SendRequest {
            chat: config.chat_id.clone(),
            files: plan.files,
            captions: plan.captions,
            thread_id: config.thread_id,
            parse_mode: ParseMode::Markdown,
        };

        info!("Logging in with bot");
        let session = self
            .session_factory
            .open(&config.bot_token)
            .await
            .context("Failed to start session")?;

        info!("Sending {} file(s) to {}", request.files.len(), request.chat);
        let sent = session.send_files(&request).await;

        // 送信の成否にかかわらず必ず解放する
        let closed = session.close().await;
        drop(session);

        sent.context("Failed to send files")?;
        if let Err(e) = closed {
            warn!("Failed to close session after successful send: {:#}", e);
        }

        Ok(summary)
    }
}
