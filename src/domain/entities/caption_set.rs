//! # CaptionSet Value Object
//!
//! FileSet とインデックスが揃ったキャプション配列

use super::file_set::FileSet;

/// キャプションセット
///
/// 長さは常に FileSet と同じ。最後の要素以外は空文字列。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionSet {
    captions: Vec<String>,
}

impl CaptionSet {
    /// ファイルセットに対するキャプション配列を作成
    ///
    /// ```
    /// use build_publisher::domain::entities::{CaptionSet, FileSet};
    ///
    /// let files = FileSet::new(vec!["a.zip".into(), "b.img".into()]).unwrap();
    /// let captions = CaptionSet::for_files(&files, "hello".to_string());
    ///
    /// assert_eq!(captions.as_slice(), &["".to_string(), "hello".to_string()]);
    /// ```
    pub fn for_files(files: &FileSet, caption: String) -> Self {
        let mut captions = vec![String::new(); files.len()];
        if let Some(last) = captions.last_mut() {
            *last = caption;
        }
        Self { captions }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.captions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.captions.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.captions
    }

    /// 表示テキストを持つキャプション（最後の要素）
    pub fn caption(&self) -> &str {
        self.captions.last().map(String::as_str).unwrap_or_default()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.captions.get(index).map(String::as_str)
    }
}
