//! Black-box smoke probes for the scale assessment web stack.
//!
//! This crate issues HTTP GET requests against the frontend dev server and
//! the backend API, classifies each response as pass/fail/warn, and derives a
//! graded report from the accumulated results.
//!
//! # Examples
//!
//! ```rust,no_run
//! use probe::{SmokeConfig, SmokeRunner};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SmokeConfig::default().with_frontend_url("http://localhost:5173");
//! let mut runner = SmokeRunner::new(config)?;
//!
//! let report = runner.run().await;
//! println!("{} of {} checks passed, grade {:?}", report.passed, report.total, report.grade);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod report;
pub mod result;
pub mod runner;

pub use config::SmokeConfig;
pub use report::{Grade, Report};
pub use result::{TestResult, TestStatus};
pub use runner::{SmokeError, SmokeResult, SmokeRunner};
