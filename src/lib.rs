//! # Build Publisher
//!
//! ビルド成果物とビルド情報を Telegram に1つのマルチ添付メッセージとして送信するツール
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: キャプション生成などの核心的なルールとエンティティ（外部依存なし）
//! - **Application層**: 公開ユースケース（セッション取得・送信・解放）
//! - **Adapter層**: 外部システムとの統合（環境変数, Telegram Bot API）
//! - **Driver層**: CLI、依存性注入、終了コード

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
// カバレッジ計測時に外部サービス依存コードを除外するために使用
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
