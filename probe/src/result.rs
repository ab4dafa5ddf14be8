use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Three-valued outcome of a single HTTP probe.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TestStatus {
    /// Check succeeded
    Pass,
    /// Check failed
    Fail,
    /// Check completed but something looks off
    Warn,
}

impl TestStatus {
    /// Console indicator for this status.
    pub fn icon(&self) -> &'static str {
        match self {
            TestStatus::Pass => "✅",
            TestStatus::Fail => "❌",
            TestStatus::Warn => "⚠️",
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, TestStatus::Pass)
    }
}

/// Outcome of one probe, immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResult {
    /// Name of the check
    pub test: String,
    /// Pass/fail/warn classification
    pub status: TestStatus,
    /// Human-readable detail
    pub message: String,
    /// When the check completed
    pub timestamp: DateTime<Utc>,
}

impl TestResult {
    pub fn new(test: impl Into<String>, status: TestStatus, message: impl Into<String>) -> Self {
        Self {
            test: test.into(),
            status,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}
