use serde::{Deserialize, Serialize};

use crate::FileInfo;

/// 扫描中被跳过的条目（无权限、读取失败等非致命错误）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedEntry {
    pub path: String,
    pub reason: String,
}

/// 扫描结果，包含前 N 大文件与各项指标
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanReport {
    /// 按大小降序（同大小按路径升序）的前 N 大文件
    pub files: Vec<FileInfo>,
    pub file_count: u64,
    /// 遍历过的目录数（含根目录）
    pub dir_count: u64,
    /// 本次扫描到的文件总大小
    pub total_size: u64,
    pub scan_time_ms: u64,
    /// 最多保留 `max_recorded_errors` 条，完整数量见 `skipped_count`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedEntry>,
    #[serde(default)]
    pub skipped_count: u64,
}

impl ScanReport {
    pub fn has_skipped(&self) -> bool {
        self.skipped_count > 0
    }
}
