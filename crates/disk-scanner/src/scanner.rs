use std::path::PathBuf;
use std::sync::atomic::AtomicU64;
use std::time::Instant;

use dir_analyzer_common::{AppConfig, ScanError, DEFAULT_MAX_RECORDED_ERRORS};
use dir_analyzer_domain::{FileInfo, ScanReport, ScanRequest, ScanState};

use crate::cancel::CancelToken;
use crate::filters::ScanFilters;
use crate::visited::{DirIdentity, VisitedDirs};
use crate::walk::{walk_parallel, walk_sequential, PendingDir, WalkContext};

/// 进度回调：(已发现文件数, 刚处理完的目录)
pub type ProgressCb = Box<dyn Fn(u64, &str) + Send + Sync>;

/// 规范化路径（支持正斜杠、去除首尾空白）
pub fn normalize_path(path: &str) -> PathBuf {
    let s = path.trim();
    #[cfg(windows)]
    let s = s.replace('/', "\\");
    PathBuf::from(s)
}

/// 目录扫描器：遍历子树，返回前 N 大文件。
///
/// 每次 `scan` 都拥有独立的累加器与已访问集合，同一个扫描器可被多个线程同时使用。
pub struct DirectoryScanner {
    filters: ScanFilters,
    follow_symlinks: bool,
    parallel: bool,
    max_recorded_errors: usize,
    cancel: CancelToken,
    progress: Option<ProgressCb>,
}

impl Default for DirectoryScanner {
    fn default() -> Self {
        Self {
            filters: ScanFilters::default(),
            follow_symlinks: true,
            parallel: false,
            max_recorded_errors: DEFAULT_MAX_RECORDED_ERRORS,
            cancel: CancelToken::new(),
            progress: None,
        }
    }
}

impl DirectoryScanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            filters: ScanFilters::from_config(config),
            follow_symlinks: config.follow_symlinks,
            parallel: config.parallel,
            max_recorded_errors: config.max_recorded_errors,
            ..Self::default()
        }
    }

    pub fn with_filters(mut self, filters: ScanFilters) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn with_progress(mut self, progress: ProgressCb) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// 执行一次扫描；致命错误（根不存在、不是目录、无权限、被取消）直接返回，
    /// 子项的读取失败只记录在 `ScanReport::skipped` 中。
    pub fn scan(&self, request: &ScanRequest) -> Result<ScanReport, ScanError> {
        let start = Instant::now();
        let mut state = ScanState::Idle;
        log::debug!("[scan] {} -> {}", state, ScanState::Scanning);
        state = ScanState::Scanning;

        let result = self.run(request);
        let next = if result.is_ok() { ScanState::Completed } else { ScanState::Failed };
        debug_assert!(state.can_transition_to(next));
        log::debug!("[scan] {} -> {}", state, next);

        match result {
            Ok(mut report) => {
                report.scan_time_ms = start.elapsed().as_millis() as u64;
                log::info!(
                    "[scan] done, path: {}, file_count: {}, total_size: {}, skipped: {}, elapsed: {} ms",
                    request.root.trim(),
                    report.file_count,
                    report.total_size,
                    report.skipped_count,
                    report.scan_time_ms
                );
                Ok(report)
            }
            Err(e) => {
                log::info!("[scan] failed, path: {}: {}", request.root.trim(), e);
                Err(e)
            }
        }
    }

    fn run(&self, request: &ScanRequest) -> Result<ScanReport, ScanError> {
        if request.limit == 0 {
            return Err(ScanError::InvalidLimit(request.limit));
        }
        let root_str = request.root.trim();
        let root = normalize_path(root_str);
        let metadata = std::fs::metadata(&root).map_err(|e| ScanError::from_root_io(root_str, e))?;
        if !metadata.is_dir() {
            return Err(ScanError::RootNotADirectory(root_str.to_string()));
        }

        log::info!(
            "[scan] start, path: {}, limit: {}, parallel: {}",
            root_str,
            request.limit,
            self.parallel
        );

        let visited = VisitedDirs::new();
        visited.insert(DirIdentity::of(&root, &metadata).map_err(|e| ScanError::from_root_io(root_str, e))?);

        let ctx = WalkContext {
            filters: &self.filters,
            follow_symlinks: self.follow_symlinks,
            cancel: &self.cancel,
            progress: self.progress.as_ref(),
            visited: &visited,
            limit: request.limit,
            max_recorded_errors: self.max_recorded_errors,
            files_seen: AtomicU64::new(0),
        };
        let pending = PendingDir { path: root, depth: 0 };
        let acc = if self.parallel {
            walk_parallel(pending, &ctx)?
        } else {
            walk_sequential(pending, &ctx)?
        };

        Ok(ScanReport {
            files: acc.top.into_sorted_vec(),
            file_count: acc.file_count,
            dir_count: acc.dir_count,
            total_size: acc.total_size,
            scan_time_ms: 0,
            skipped: acc.skipped,
            skipped_count: acc.skipped_count,
        })
    }
}

/// 扫描 `path` 下的前 `limit` 大文件（默认选项）
pub fn scan_top_files(path: &str, limit: usize) -> Result<Vec<FileInfo>, ScanError> {
    DirectoryScanner::new()
        .scan(&ScanRequest::new(path, limit))
        .map(|r| r.files)
}

/// 同 `scan_top_files`，附带进度回调
pub fn scan_top_files_with_progress(
    path: &str,
    limit: usize,
    progress: ProgressCb,
) -> Result<Vec<FileInfo>, ScanError> {
    DirectoryScanner::new()
        .with_progress(progress)
        .scan(&ScanRequest::new(path, limit))
        .map(|r| r.files)
}
