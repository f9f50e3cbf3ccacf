//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **BuildMetadata**: キャプションに埋め込むビルド情報
//! - **ChatTarget**: 送信先（数値IDまたはユーザー名）
//! - **FileSet**: 送信するファイルの順序付きリスト
//! - **CaptionSet**: FileSetとインデックスが揃ったキャプション配列

pub mod build_metadata;
pub mod caption_set;
pub mod chat_target;
pub mod file_set;

pub use build_metadata::BuildMetadata;
pub use caption_set::CaptionSet;
pub use chat_target::ChatTarget;
pub use file_set::{FileSet, FileSetError};
