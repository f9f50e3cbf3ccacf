//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use log::info;

use crate::adapter::config::EnvConfig;
use crate::adapter::telegram::TelegramSessionFactory;
use crate::application::dto::Configuration;
use crate::application::use_cases::publish_artifacts::{PublishArtifactsUseCase, PublishSummary};
use crate::domain::entities::BuildMetadata;
use crate::domain::repositories::SessionFactory;

use super::cli::Args;

/// ワークフローの結果
#[derive(Debug, Clone)]
pub enum PublishOutcome {
    /// 送信完了
    Published(PublishSummary),
    /// --dry-run（ネットワークアクセスなし）
    DryRun { captions: Vec<String> },
}

/// Publish Workflow
pub struct PublishWorkflow<F: SessionFactory> {
    config: Configuration,
    metadata: BuildMetadata,
    use_case: PublishArtifactsUseCase<F>,
}

impl PublishWorkflow<TelegramSessionFactory> {
    /// Telegram Bot API を使うワークフローを作成
    pub fn new(config: Configuration, metadata: BuildMetadata) -> Self {
        let factory = Arc::new(TelegramSessionFactory::new(config.api_url.clone()));
        Self::with_factory(config, metadata, factory)
    }
}

impl<F: SessionFactory> PublishWorkflow<F> {
    /// 任意のセッションファクトリでワークフローを作成
    pub fn with_factory(config: Configuration, metadata: BuildMetadata, factory: Arc<F>) -> Self {
        Self {
            config,
            metadata,
            use_case: PublishArtifactsUseCase::new(factory),
        }
    }

    /// Execute the publish workflow
    pub async fn execute(&self, args: Args) -> Result<PublishOutcome> {
        println!("[+] Files: {:?}", args.files);

        let plan = PublishArtifactsUseCase::<F>::prepare(args.files, &self.metadata)?;

        println!("[+] Caption: ");
        println!("---");
        println!("{:?}", plan.captions.as_slice());
        println!("---");

        if args.dry_run {
            println!("[+] Dry-run mode (not actually sending)");
            return Ok(PublishOutcome::DryRun {
                captions: plan.captions.as_slice().to_vec(),
            });
        }

        info!("Publishing to {}", self.config.chat_id);
        println!("[+] Sending");
        let summary = self.use_case.publish(&self.config, plan).await?;
        println!("[+] Done!");

        Ok(PublishOutcome::Published(summary))
    }
}

/// 設定検証からワークフロー実行までを行う
///
/// # Arguments
///
/// * `args` - CLI引数
/// * `vars` - 環境変数のマップ
/// * `make_factory` - 検証済み設定からセッションファクトリを作る
pub async fn run<F, M>(
    args: Args,
    vars: &HashMap<String, String>,
    make_factory: M,
) -> Result<PublishOutcome>
where
    F: SessionFactory,
    M: FnOnce(&Configuration) -> Arc<F>,
{
    println!("[+] Uploading to telegram");

    let config = EnvConfig::from_map(vars)?;
    let metadata = BuildMetadata::from_map(vars);
    info!("Using configuration: {:?}", config);

    let factory = make_factory(&config);
    let workflow = PublishWorkflow::with_factory(config, metadata, factory);
    workflow.execute(args).await
}
