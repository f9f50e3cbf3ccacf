//! # BuildMetadata Value Object
//!
//! キャプションに埋め込むビルド情報

use std::collections::HashMap;

pub const DEVICE_VAR: &str = "DEVICE";
pub const KERNEL_VERSION_VAR: &str = "KernelVer";
pub const KSU_VERSION_VAR: &str = "KSUVERSIONS";
pub const KPM_VAR: &str = "KPM";
pub const LZ4KD_VAR: &str = "LZ4KD";

/// ビルドメタデータ
///
/// 起動時に一度だけ構築され、以後変更されない。
/// 未設定のフィールドは空文字列として保持する。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildMetadata {
    pub device: String,
    pub kernel_version: String,
    pub ksu_version: String,
    pub kpm: String,
    pub lz4kd: String,
}

impl BuildMetadata {
    pub fn new(
        device: impl Into<String>,
        kernel_version: impl Into<String>,
        ksu_version: impl Into<String>,
        kpm: impl Into<String>,
        lz4kd: impl Into<String>,
    ) -> Self {
        Self {
            device: device.into(),
            kernel_version: kernel_version.into(),
            ksu_version: ksu_version.into(),
            kpm: kpm.into(),
            lz4kd: lz4kd.into(),
        }
    }

    /// キーと値のマップからメタデータを構築
    ///
    /// 欠けているキーは空文字列になる（エラーにはならない）
    pub fn from_map(vars: &HashMap<String, String>) -> Self {
        let get = |key: &str| vars.get(key).cloned().unwrap_or_default();

        Self {
            device: get(DEVICE_VAR),
            kernel_version: get(KERNEL_VERSION_VAR),
            ksu_version: get(KSU_VERSION_VAR),
            kpm: get(KPM_VAR),
            lz4kd: get(LZ4KD_VAR),
        }
    }
}
