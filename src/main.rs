//! publish - Build Artifact Publisher
//!
//! ビルド成果物を Telegram に1つのメッセージとして送信

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::collections::HashMap;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use build_publisher::adapter::config::ConfigError;
use build_publisher::adapter::telegram::TelegramSessionFactory;
use build_publisher::domain::entities::FileSetError;
use build_publisher::driver::{run, Args};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let vars: HashMap<String, String> = std::env::vars().collect();

    let result = run(args, &vars, |config| {
        Arc::new(TelegramSessionFactory::new(config.api_url.clone()))
    })
    .await;

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            if e.is::<ConfigError>() || e.is::<FileSetError>() {
                eprintln!("[-] {}", e);
            } else {
                eprintln!("[-] An error occurred: {:#}", e);
            }
            ExitCode::FAILURE
        }
    }
}
