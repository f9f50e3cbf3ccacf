//! # Domain Layer
//!
//! ビルド成果物の公開に関する核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - 外部依存を持たない（Rust標準ライブラリと最小限の依存のみ）
//! - メッセージングバックエンドについて何も知らない
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（BuildMetadata, FileSet, CaptionSetなど）
//! - **repositories**: メッセージング trait（インターフェース定義のみ）
//! - **services**: Domain Service（キャプション生成）

pub mod entities;
pub mod repositories;
pub mod services;
