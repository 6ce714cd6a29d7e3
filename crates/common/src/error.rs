use thiserror::Error;

/// 扫描过程中的致命错误；单个条目的读取失败不在此列，而是记录到 `ScanReport::skipped`
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Root not found: {0}")]
    RootNotFound(String),

    #[error("Root is not a directory: {0}")]
    RootNotADirectory(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Invalid limit: {0} (must be a positive integer)")]
    InvalidLimit(usize),

    #[error("Scan cancelled")]
    Cancelled,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ScanError {
    /// 将根路径上的 IO 错误映射为对应的致命错误
    pub fn from_root_io(path: &str, e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::NotFound => ScanError::RootNotFound(path.to_string()),
            std::io::ErrorKind::PermissionDenied => ScanError::PermissionDenied(path.to_string()),
            _ => ScanError::Io(e),
        }
    }
}
