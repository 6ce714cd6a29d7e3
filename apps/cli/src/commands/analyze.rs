//! `analyze_dir` 命令：扫描目录并以 JSON 字符串返回前 N 大文件，
//! 失败时返回可直接展示给用户的错误信息。扫描在 tokio 的阻塞线程池中执行。

use dir_analyzer_common::AppConfig;
use dir_analyzer_domain::{ScanReport, ScanRequest};
use dir_analyzer_scanner::DirectoryScanner;
use serde::Deserialize;

pub const ANALYZE_DIR: &str = "analyze_dir";

/// 前端调用参数：`{ "name": "<dir>", "limit": 20 }`，`limit` 可省略
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeDirArgs {
    pub name: String,
    #[serde(default)]
    pub limit: Option<usize>,
}

pub async fn analyze_dir(name: String, limit: Option<usize>) -> Result<String, String> {
    analyze_dir_with_config(name, limit, AppConfig::default()).await
}

pub async fn analyze_dir_with_config(
    name: String,
    limit: Option<usize>,
    config: AppConfig,
) -> Result<String, String> {
    let report = scan_report(name, limit, config).await?;
    serde_json::to_string(&report.files).map_err(|e| e.to_string())
}

/// 在阻塞线程池中执行完整扫描，返回包含统计信息的报告
pub async fn scan_report(
    name: String,
    limit: Option<usize>,
    config: AppConfig,
) -> Result<ScanReport, String> {
    let path_trimmed = name.trim().to_string();
    if limit.is_none() {
        log::info!("[analyze_dir] no limit provided, defaulting to {}", config.default_limit);
    }
    let request = ScanRequest::with_optional_limit(path_trimmed.clone(), limit, config.default_limit);
    let scanner = DirectoryScanner::from_config(&config);

    log::info!("[analyze_dir] start, path: {}, limit: {}", path_trimmed, request.limit);
    let report = tokio::task::spawn_blocking(move || scanner.scan(&request))
        .await
        .map_err(|e| e.to_string())?
        .map_err(|e| e.to_string())?;
    log::info!(
        "[analyze_dir] done, path: {}, returned: {}, elapsed: {} ms",
        path_trimmed,
        report.files.len(),
        report.scan_time_ms
    );
    Ok(report)
}
