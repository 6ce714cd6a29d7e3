//! 目录环检测：记录已访问目录的规范身份（Unix 上为 device+inode），
//! 防止符号链接把遍历带回已访问过的目录。

use std::collections::HashSet;
use std::fs::Metadata;
use std::path::Path;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DirIdentity {
    DevIno(u64, u64),
    /// 无 inode 的平台退回到规范化路径
    Canonical(std::path::PathBuf),
}

impl DirIdentity {
    #[cfg(unix)]
    pub fn of(_path: &Path, metadata: &Metadata) -> std::io::Result<Self> {
        use std::os::unix::fs::MetadataExt;
        Ok(DirIdentity::DevIno(metadata.dev(), metadata.ino()))
    }

    #[cfg(not(unix))]
    pub fn of(path: &Path, _metadata: &Metadata) -> std::io::Result<Self> {
        Ok(DirIdentity::Canonical(std::fs::canonicalize(path)?))
    }
}

/// 线程安全的已访问目录集合，顺序与并行遍历共用
#[derive(Debug, Default)]
pub struct VisitedDirs {
    seen: Mutex<HashSet<DirIdentity>>,
}

impl VisitedDirs {
    pub fn new() -> Self {
        Self::default()
    }

    /// 首次访问返回 true；已访问过返回 false
    pub fn insert(&self, id: DirIdentity) -> bool {
        let mut seen = self.seen.lock().unwrap_or_else(|e| e.into_inner());
        seen.insert(id)
    }

    pub fn len(&self) -> usize {
        self.seen.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
