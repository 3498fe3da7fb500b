//! Report generation modules for different output formats
//!
//! - human: Human-readable console output
//! - json: JSON format for programmatic use

pub mod human;
pub mod json;

use crate::detector::CycleDetector;
use crate::error::GridlockError;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report from a finished detection run
    fn generate_report(&self, detector: &CycleDetector) -> Result<String, GridlockError>;
}

pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
