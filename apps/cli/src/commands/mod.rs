pub mod analyze;
pub mod dispatch;
