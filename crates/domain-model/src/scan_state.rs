use std::fmt;

use serde::{Deserialize, Serialize};

/// 扫描生命周期：Idle -> Scanning -> {Completed, Failed}
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanState {
    Idle,
    Scanning,
    Completed,
    Failed,
}

impl ScanState {
    pub fn is_terminal(self) -> bool {
        matches!(self, ScanState::Completed | ScanState::Failed)
    }

    /// 合法的状态迁移
    pub fn can_transition_to(self, next: ScanState) -> bool {
        matches!(
            (self, next),
            (ScanState::Idle, ScanState::Scanning)
                | (ScanState::Scanning, ScanState::Completed)
                | (ScanState::Scanning, ScanState::Failed)
        )
    }
}

impl fmt::Display for ScanState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ScanState::Idle => "idle",
            ScanState::Scanning => "scanning",
            ScanState::Completed => "completed",
            ScanState::Failed => "failed",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitions() {
        assert!(ScanState::Idle.can_transition_to(ScanState::Scanning));
        assert!(ScanState::Scanning.can_transition_to(ScanState::Completed));
        assert!(ScanState::Scanning.can_transition_to(ScanState::Failed));
        assert!(!ScanState::Idle.can_transition_to(ScanState::Completed));
        assert!(!ScanState::Completed.can_transition_to(ScanState::Scanning));
        assert!(ScanState::Failed.is_terminal());
        assert!(!ScanState::Scanning.is_terminal());
    }
}
