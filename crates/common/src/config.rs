use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ScanError;

/// 未指定数量时返回的前 N 大文件数
pub const DEFAULT_LIMIT: usize = 10;

/// 报告中最多保留的跳过条目数（计数不受限）
pub const DEFAULT_MAX_RECORDED_ERRORS: usize = 1000;

/// 覆盖 `default_limit` 的环境变量
pub const LIMIT_ENV_VAR: &str = "DIR_ANALYZER_LIMIT";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub default_limit: usize,
    pub follow_symlinks: bool,
    pub parallel: bool,
    pub max_depth: Option<usize>,
    pub exclude_names: Vec<String>,
    pub include_hidden: bool,
    pub max_recorded_errors: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
            follow_symlinks: true,
            parallel: false,
            max_depth: None,
            exclude_names: vec![],
            include_hidden: true,
            max_recorded_errors: DEFAULT_MAX_RECORDED_ERRORS,
        }
    }
}

impl AppConfig {
    /// 从 JSON 文件读取配置，缺省字段取默认值
    pub fn from_json_file(path: &Path) -> Result<Self, ScanError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ScanError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ScanError> {
        let config: AppConfig =
            serde_json::from_str(text).map_err(|e| ScanError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// 应用环境变量覆盖（目前仅 `DIR_ANALYZER_LIMIT`）
    pub fn with_env_overrides(self) -> Result<Self, ScanError> {
        match std::env::var(LIMIT_ENV_VAR) {
            Ok(raw) => self.with_limit_override(&raw),
            Err(_) => Ok(self),
        }
    }

    fn with_limit_override(mut self, raw: &str) -> Result<Self, ScanError> {
        let limit = raw
            .trim()
            .parse::<usize>()
            .map_err(|e| ScanError::Config(format!("{}={:?}: {}", LIMIT_ENV_VAR, raw, e)))?;
        self.default_limit = limit;
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ScanError> {
        if self.default_limit == 0 {
            return Err(ScanError::Config("default_limit must be positive".to_string()));
        }
        Ok(())
    }
}
