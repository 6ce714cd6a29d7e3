use std::fmt::Write;

use dir_analyzer_domain::{format_size, ScanReport};

const SEPARATOR: &str = "---------------------------------------";

/// 逐个打印文件信息，末尾附统计与耗时
pub fn render_pretty(report: &ScanReport) -> String {
    let mut out = String::new();
    for (i, file) in report.files.iter().enumerate() {
        let _ = writeln!(out, "File Number: {}", i + 1);
        let _ = writeln!(out, "File Name: {}", file.name);
        let _ = writeln!(out, "File Path: {}", file.path);
        let _ = writeln!(out, "File size: {}", format_size(file.size));
        let _ = writeln!(out, "{}", SEPARATOR);
    }
    let _ = writeln!(
        out,
        "Scanned {} files in {} directories ({})",
        report.file_count,
        report.dir_count,
        format_size(report.total_size)
    );
    if report.has_skipped() {
        let _ = writeln!(out, "Skipped {} unreadable entries", report.skipped_count);
    }
    let _ = writeln!(out, "Time elapsed: {} ms", report.scan_time_ms);
    out
}
