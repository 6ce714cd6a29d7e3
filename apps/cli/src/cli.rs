use std::path::PathBuf;

use clap::Parser;
use dir_analyzer_common::{AppConfig, ScanError};

/// 查找目录下最大的文件
#[derive(Parser, Debug)]
#[command(name = "dir-analyzer", version, about = "Find the largest files under a directory")]
pub struct Cli {
    /// Directory to scan
    #[arg(default_value = "./")]
    pub dir: String,

    /// Number of files to report; a non-numeric value falls back to the default
    #[arg(value_name = "COUNT")]
    pub count: Option<String>,

    /// Number of files to report (default 10, or DIR_ANALYZER_LIMIT); overrides COUNT
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Print the result as a JSON array of {name, size, path}
    #[arg(long)]
    pub json: bool,

    /// Walk subdirectories in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Do not descend below this depth (root is 0)
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Skip files or directories with this exact name (repeatable)
    #[arg(long = "exclude", value_name = "NAME")]
    pub exclude: Vec<String>,

    /// Do not follow symbolic links to directories
    #[arg(long)]
    pub no_follow_symlinks: bool,

    /// Skip dot-prefixed entries
    #[arg(long)]
    pub skip_hidden: bool,

    /// JSON configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// `-n` 优先，其次是位置参数 COUNT；无法解析的 COUNT 视为未指定
    pub fn effective_limit(&self) -> Option<usize> {
        if self.limit.is_some() {
            return self.limit;
        }
        let raw = self.count.as_deref()?;
        match raw.trim().parse::<usize>() {
            Ok(n) => Some(n),
            Err(_) => {
                log::warn!("[cli] invalid file count {:?}, using the default", raw);
                None
            }
        }
    }

    /// 配置优先级：命令行 > 环境变量 > 配置文件 > 默认值
    pub fn to_config(&self) -> Result<AppConfig, ScanError> {
        let base = match &self.config {
            Some(path) => AppConfig::from_json_file(path)?,
            None => AppConfig::default(),
        };
        let mut config = base.with_env_overrides()?;

        if self.parallel {
            config.parallel = true;
        }
        if self.max_depth.is_some() {
            config.max_depth = self.max_depth;
        }
        config.exclude_names.extend(self.exclude.iter().cloned());
        if self.no_follow_symlinks {
            config.follow_symlinks = false;
        }
        if self.skip_hidden {
            config.include_hidden = false;
        }
        Ok(config)
    }
}
