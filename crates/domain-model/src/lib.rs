pub mod file_info;
pub mod scan_request;
pub mod scan_report;
pub mod scan_state;
pub mod size_format;

pub use file_info::*;
pub use scan_request::*;
pub use scan_report::*;
pub use scan_state::*;
pub use size_format::*;
