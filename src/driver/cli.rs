//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;

/// ビルド成果物を1つのメッセージとして送信するCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "publish")]
#[command(about = "Publish build artifacts as a single Telegram message", long_about = None)]
pub struct Args {
    /// Validate configuration and print captions without sending
    #[arg(long)]
    pub dry_run: bool,

    /// Files to upload, in order; the last one carries the caption
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,
}
