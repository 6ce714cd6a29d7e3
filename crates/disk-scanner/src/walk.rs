//! 目录遍历：按层（广度优先）推进，顺序与并行遍历共用单个目录的条目分类。
//!
//! 每层处理完后按固定顺序登记子目录身份，因此同一目录总是由最浅的路径、
//! 且在同一层内由排在最前的路径认领，并行结果与顺序结果一致。
//! 遍历不递归，目录深度不受线程栈大小限制。

use std::fs::DirEntry;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use dir_analyzer_common::ScanError;
use dir_analyzer_domain::{FileInfo, SkippedEntry};
use rayon::prelude::*;

use crate::cancel::CancelToken;
use crate::filters::ScanFilters;
use crate::scanner::ProgressCb;
use crate::top_k::TopK;
use crate::visited::{DirIdentity, VisitedDirs};

/// 待进入的目录
pub(crate) struct PendingDir {
    pub path: PathBuf,
    pub depth: usize,
}

/// 已读到、尚未登记身份的子目录
pub(crate) struct Candidate {
    dir: PendingDir,
    id: DirIdentity,
}

/// 一次扫描内所有 worker 共享的只读上下文
pub(crate) struct WalkContext<'a> {
    pub filters: &'a ScanFilters,
    pub follow_symlinks: bool,
    pub cancel: &'a CancelToken,
    pub progress: Option<&'a ProgressCb>,
    pub visited: &'a VisitedDirs,
    pub limit: usize,
    pub max_recorded_errors: usize,
    pub files_seen: AtomicU64,
}

impl WalkContext<'_> {
    pub fn new_accumulator(&self) -> Accumulator {
        Accumulator::new(self.limit, self.max_recorded_errors)
    }
}

/// 单个 worker 的累加结果，可两两合并
pub(crate) struct Accumulator {
    pub top: TopK,
    pub skipped: Vec<SkippedEntry>,
    pub skipped_count: u64,
    pub file_count: u64,
    pub dir_count: u64,
    pub total_size: u64,
    max_recorded: usize,
}

impl Accumulator {
    pub fn new(limit: usize, max_recorded: usize) -> Self {
        Self {
            top: TopK::new(limit),
            skipped: Vec::new(),
            skipped_count: 0,
            file_count: 0,
            dir_count: 0,
            total_size: 0,
            max_recorded,
        }
    }

    fn record_file(&mut self, info: FileInfo) {
        self.file_count += 1;
        self.total_size = self.total_size.saturating_add(info.size);
        self.top.offer(info);
    }

    fn record_skip(&mut self, path: &Path, err: &std::io::Error) {
        log::warn!("[scan] skipping unreadable entry {}: {}", path.display(), err);
        self.skipped_count += 1;
        if self.skipped.len() < self.max_recorded {
            self.skipped.push(SkippedEntry {
                path: path.display().to_string(),
                reason: err.to_string(),
            });
        }
    }

    pub fn merge(&mut self, other: Accumulator) {
        self.top.merge(other.top);
        self.file_count += other.file_count;
        self.dir_count += other.dir_count;
        self.total_size = self.total_size.saturating_add(other.total_size);
        self.skipped_count += other.skipped_count;
        let room = self.max_recorded.saturating_sub(self.skipped.len());
        self.skipped.extend(other.skipped.into_iter().take(room));
    }
}

/// 读取一个目录：文件计入累加器，返回候选子目录（按名称排序，尚未登记身份）。
/// 根目录（depth 0）读取失败为致命错误，其余目录读取失败记为跳过。
fn process_dir(
    dir: &PendingDir,
    ctx: &WalkContext<'_>,
    acc: &mut Accumulator,
) -> Result<Vec<Candidate>, ScanError> {
    if ctx.cancel.is_cancelled() {
        return Err(ScanError::Cancelled);
    }

    let entries = match std::fs::read_dir(&dir.path) {
        Ok(rd) => rd,
        Err(e) if dir.depth == 0 => {
            return Err(ScanError::from_root_io(&dir.path.display().to_string(), e));
        }
        Err(e) => {
            acc.record_skip(&dir.path, &e);
            return Ok(vec![]);
        }
    };
    acc.dir_count += 1;

    let mut entries: Vec<DirEntry> = {
        let mut collected = Vec::new();
        for entry in entries {
            if ctx.cancel.is_cancelled() {
                return Err(ScanError::Cancelled);
            }
            match entry {
                Ok(e) => collected.push(e),
                Err(e) => acc.record_skip(&dir.path, &e),
            }
        }
        collected
    };
    entries.sort_by_key(|e| e.file_name());

    let mut subdirs = Vec::new();
    let mut files_here = 0u64;
    for entry in entries {
        if ctx.cancel.is_cancelled() {
            return Err(ScanError::Cancelled);
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if !ctx.filters.allows_name(&name) {
            continue;
        }
        let path = entry.path();
        let file_type = match entry.file_type() {
            Ok(t) => t,
            Err(e) => {
                acc.record_skip(&path, &e);
                continue;
            }
        };

        let metadata = if file_type.is_symlink() {
            if !ctx.follow_symlinks {
                log::debug!("[scan] not following symlink {}", path.display());
                continue;
            }
            match std::fs::metadata(&path) {
                // 指向文件的链接不计入，避免同一文件被重复统计
                Ok(md) if md.is_dir() => md,
                Ok(_) => continue,
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    log::debug!("[scan] dangling symlink {}", path.display());
                    continue;
                }
                Err(e) => {
                    acc.record_skip(&path, &e);
                    continue;
                }
            }
        } else if file_type.is_dir() || file_type.is_file() {
            match entry.metadata() {
                Ok(md) => md,
                Err(e) => {
                    acc.record_skip(&path, &e);
                    continue;
                }
            }
        } else {
            // fifo / socket / 设备文件
            continue;
        };

        if metadata.is_file() {
            files_here += 1;
            acc.record_file(FileInfo::new(name, metadata.len(), path.display().to_string()));
            continue;
        }

        let depth = dir.depth + 1;
        if !ctx.filters.allows_depth(depth) {
            continue;
        }
        let id = match DirIdentity::of(&path, &metadata) {
            Ok(id) => id,
            Err(e) => {
                acc.record_skip(&path, &e);
                continue;
            }
        };
        subdirs.push(Candidate {
            dir: PendingDir { path, depth },
            id,
        });
    }

    let total = ctx.files_seen.fetch_add(files_here, Ordering::Relaxed) + files_here;
    if let Some(cb) = ctx.progress {
        cb(total, dir.path.display().to_string().as_str());
    }
    Ok(subdirs)
}

/// 按候选顺序登记身份，已访问过的目录（环或重复的符号链接）被丢弃
fn claim_next_level(candidates: Vec<Candidate>, ctx: &WalkContext<'_>) -> Vec<PendingDir> {
    candidates
        .into_iter()
        .filter_map(|c| {
            if ctx.visited.insert(c.id) {
                Some(c.dir)
            } else {
                log::debug!("[scan] directory already visited, skipping {}", c.dir.path.display());
                None
            }
        })
        .collect()
}

/// 顺序遍历：逐层处理，层内按名称顺序
pub(crate) fn walk_sequential(root: PendingDir, ctx: &WalkContext<'_>) -> Result<Accumulator, ScanError> {
    let mut acc = ctx.new_accumulator();
    let mut level = vec![root];
    while !level.is_empty() {
        let mut candidates = Vec::new();
        for dir in &level {
            candidates.extend(process_dir(dir, ctx, &mut acc)?);
        }
        level = claim_next_level(candidates, ctx);
    }
    Ok(acc)
}

/// 并行遍历：每层的目录分发到 rayon 线程池，各 worker 累加到自己的 Accumulator，
/// 最后两两合并；候选子目录按原顺序还原后再统一登记
pub(crate) fn walk_parallel(root: PendingDir, ctx: &WalkContext<'_>) -> Result<Accumulator, ScanError> {
    let mut acc = ctx.new_accumulator();
    let mut level = vec![root];
    while !level.is_empty() {
        let (level_acc, mut batches) = level
            .par_iter()
            .enumerate()
            .try_fold(
                || (ctx.new_accumulator(), Vec::new()),
                |(mut worker_acc, mut batches), (index, dir)| {
                    let subdirs = process_dir(dir, ctx, &mut worker_acc)?;
                    batches.push((index, subdirs));
                    Ok::<_, ScanError>((worker_acc, batches))
                },
            )
            .try_reduce(
                || (ctx.new_accumulator(), Vec::new()),
                |(mut a, mut a_batches), (b, b_batches)| {
                    a.merge(b);
                    a_batches.extend(b_batches);
                    Ok((a, a_batches))
                },
            )?;
        acc.merge(level_acc);

        batches.sort_by_key(|(index, _)| *index);
        let candidates = batches.into_iter().flat_map(|(_, subdirs)| subdirs).collect();
        level = claim_next_level(candidates, ctx);
    }
    Ok(acc)
}
