use crate::result::{TestResult, TestStatus};
use serde::{Deserialize, Serialize};

/// Letter grade summarizing the aggregate success rate of one run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Grade {
    A,
    B,
    C,
    D,
}

impl Grade {
    /// Thresholds are inclusive at the boundary: 90.0 is still an A.
    pub fn from_success_rate(rate: f64) -> Self {
        if rate >= 90.0 {
            Grade::A
        } else if rate >= 80.0 {
            Grade::B
        } else if rate >= 70.0 {
            Grade::C
        } else {
            Grade::D
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Grade::A => "excellent",
            Grade::B => "good",
            Grade::C => "passing",
            Grade::D => "needs improvement",
        }
    }
}

/// Aggregate view over one run's results. Derived, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub warned: usize,
    pub success_rate: f64,
    pub grade: Grade,
}

impl Report {
    pub fn from_results(results: &[TestResult]) -> Self {
        let passed = results.iter().filter(|r| r.status == TestStatus::Pass).count();
        let failed = results.iter().filter(|r| r.status == TestStatus::Fail).count();
        let warned = results.iter().filter(|r| r.status == TestStatus::Warn).count();
        let total = results.len();

        let success_rate = if total > 0 {
            passed as f64 / total as f64 * 100.0
        } else {
            0.0
        };

        Self {
            total,
            passed,
            failed,
            warned,
            success_rate,
            grade: Grade::from_success_rate(success_rate),
        }
    }

    /// Print the formatted summary, including failed and warned listings.
    pub fn print(&self, results: &[TestResult]) {
        println!("\n{}", "=".repeat(80));
        println!("🔍 Scale assessment system - UI smoke test report");
        println!("{}", "=".repeat(80));

        println!("\n📊 Statistics:");
        println!("- Total checks: {}", self.total);
        println!("- Passed: {} ✅", self.passed);
        println!("- Failed: {} ❌", self.failed);
        println!("- Warnings: {} ⚠️", self.warned);
        println!("- Success rate: {:.1}%", self.success_rate);

        println!("\n🏆 Grade: {:?} ({})", self.grade, self.grade.label());

        println!("\n🔍 Key findings:");
        let failed_tests: Vec<&TestResult> = results
            .iter()
            .filter(|r| r.status == TestStatus::Fail)
            .collect();
        if failed_tests.is_empty() {
            println!("✅ All critical checks passed");
        } else {
            println!("❌ Failed checks:");
            for test in &failed_tests {
                println!("  - {}: {}", test.test, test.message);
            }
        }

        let warned_tests: Vec<&TestResult> = results
            .iter()
            .filter(|r| r.status == TestStatus::Warn)
            .collect();
        if !warned_tests.is_empty() {
            println!("⚠️ Needs attention:");
            for test in &warned_tests {
                println!("  - {}: {}", test.test, test.message);
            }
        }

        println!("\n📝 Conclusion:");
        if self.failed == 0 {
            println!("✅ Core functionality is healthy, the frontend is reachable");
            println!("✅ The Vue 3 + TypeScript application is serving correctly");
            println!("✅ The Vite dev server is configured properly");
        } else {
            println!("❌ Critical problems found, fix and re-run the smoke test");
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
