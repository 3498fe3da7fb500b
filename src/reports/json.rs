//! JSON format report generation

use serde_json::json;

use super::ReportGenerator;
use crate::detector::CycleDetector;
use crate::error::GridlockError;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, detector: &CycleDetector) -> Result<String, GridlockError> {
        let report = match detector.cycle() {
            Some(cycle) => json!({
                "deadlocked": true,
                "processes": cycle.processes(),
                "cycle": cycle.path(),
            }),
            None => json!({
                "deadlocked": false,
                "processes": [],
                "cycle": null,
            }),
        };

        serde_json::to_string_pretty(&report).map_err(GridlockError::Json)
    }
}
