//! # Caption Service
//!
//! ビルド情報からキャプションを生成するサービス

use crate::domain::entities::{BuildMetadata, CaptionSet, FileSet};

/// キャプションの最大文字数（バックエンド側の上限）
pub const MAX_CAPTION_LEN: usize = 1024;

/// キャプション生成サービス
pub struct CaptionService;

impl CaptionService {
    /// 長文形式のキャプションを生成
    ///
    /// フィールドの順序とラベルは外部契約の一部なので変更しないこと
    pub fn long_form(metadata: &BuildMetadata) -> String {
        format!(
            "**New Build Published!**\n\
             #{device}\n\
             ```Kernel Info\n\
             kernelver: {kernel_version}\n\
             KsuVersion: {ksu_version}\n\
             KPM: {kpm}\n\
             Lz4kd: {lz4kd}\n\
             ```\n\
             testing for auto push...",
            device = metadata.device,
            kernel_version = metadata.kernel_version,
            ksu_version = metadata.ksu_version,
            kpm = metadata.kpm,
            lz4kd = metadata.lz4kd,
        )
    }

    /// 短縮形式（デバイス名とカーネルバージョンを区切りなしで連結）
    pub fn short_form(metadata: &BuildMetadata) -> String {
        format!("{}{}", metadata.device, metadata.kernel_version)
    }

    /// キャプションを生成
    ///
    /// 長文形式が `MAX_CAPTION_LEN` 文字を超える場合は短縮形式を返す。
    /// 文字数は Unicode スカラー値単位で数える。
    pub fn render(metadata: &BuildMetadata) -> String {
        let caption = Self::long_form(metadata);
        if caption.chars().count() > MAX_CAPTION_LEN {
            return Self::short_form(metadata);
        }
        caption
    }

    /// ファイルセットに対応するキャプション配列を生成
    pub fn caption_set(files: &FileSet, metadata: &BuildMetadata) -> CaptionSet {
        CaptionSet::for_files(files, Self::render(metadata))
    }
}
