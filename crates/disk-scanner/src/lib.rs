pub mod scanner;
pub mod top_k;
pub mod visited;
pub mod cancel;
pub mod filters;
mod walk;

pub use scanner::{normalize_path, scan_top_files, scan_top_files_with_progress, DirectoryScanner, ProgressCb};
pub use top_k::TopK;
pub use visited::{DirIdentity, VisitedDirs};
pub use cancel::CancelToken;
pub use filters::*;
pub use dir_analyzer_common::ScanError;
pub use dir_analyzer_domain::{FileInfo, ScanReport, ScanRequest, SkippedEntry};
