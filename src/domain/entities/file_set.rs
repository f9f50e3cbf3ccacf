//! # FileSet Value Object
//!
//! 送信するファイルパスの順序付きリスト（空は許可しない）

use thiserror::Error;

/// FileSet の構築エラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FileSetError {
    #[error("no files to upload")]
    Empty,
}

/// 送信ファイルセット
///
/// 順序は意味を持つ。最後の要素にキャプションが付く。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSet {
    paths: Vec<String>,
}

impl FileSet {
    /// 新しいファイルセットを作成
    ///
    /// # Errors
    ///
    /// `paths` が空の場合は `FileSetError::Empty`
    pub fn new(paths: Vec<String>) -> Result<Self, FileSetError> {
        if paths.is_empty() {
            return Err(FileSetError::Empty);
        }
        Ok(Self { paths })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// 常に `false`（空の FileSet は構築できない）
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }
}
