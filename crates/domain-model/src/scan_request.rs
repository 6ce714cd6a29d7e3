use serde::{Deserialize, Serialize};

/// 一次扫描的输入：根路径与返回数量上限
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanRequest {
    pub root: String,
    pub limit: usize,
}

impl ScanRequest {
    pub fn new(root: impl Into<String>, limit: usize) -> Self {
        Self {
            root: root.into(),
            limit,
        }
    }

    /// `limit` 为 None 时使用 `default_limit`
    pub fn with_optional_limit(root: impl Into<String>, limit: Option<usize>, default_limit: usize) -> Self {
        Self::new(root, limit.unwrap_or(default_limit))
    }
}
