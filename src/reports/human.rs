//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::ReportGenerator;
use crate::detector::CycleDetector;
use crate::error::GridlockError;
use crate::utils::string::{process_label, wait_chain};

pub struct HumanReportGenerator;

impl Default for HumanReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, detector: &CycleDetector) -> Result<String, GridlockError> {
        let mut output = String::new();

        let Some(cycle) = detector.cycle() else {
            write!(
                output,
                "\n{} No wait-for cycle detected! The processes are free of deadlock.\n",
                style("✅").green().bold()
            )?;
            return Ok(output);
        };

        write!(
            output,
            "\n{} Deadlock detected! {} processes are waiting on each other:\n\n",
            style("❌").red().bold(),
            style(cycle.len()).red().bold()
        )?;

        writeln!(output, "  {} Processes involved:", style("⚙").blue())?;
        for id in cycle.processes() {
            writeln!(
                output,
                "    {} {}",
                style("•").dim(),
                style(process_label(id)).bold()
            )?;
        }

        writeln!(output, "\n  {} Wait chain:", style("🔗").cyan())?;
        writeln!(output, "    {}", style(wait_chain(cycle.path())).yellow())?;

        writeln!(
            output,
            "\n{} To break the deadlock, at least one process in the cycle must release or be \
             preempted.",
            style("💡").yellow()
        )?;
        writeln!(
            output,
            "{} Acquiring resources in a fixed global order prevents this cycle from forming.",
            style("💡").yellow()
        )?;

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::description::GraphDescription;
    use crate::graph::WaitGraphBuilder;

    fn detector_for(processes: usize, waits: &[(usize, usize)]) -> CycleDetector {
        let mut description = GraphDescription::new(processes);
        for &(from, to) in waits {
            description.add_wait(from, to);
        }
        let mut builder = WaitGraphBuilder::new();
        builder.build_from_description(&description).unwrap();
        let mut detector = CycleDetector::new();
        detector.detect(builder.graph()).unwrap();
        detector
    }

    #[test]
    fn test_report_without_deadlock() {
        let detector = detector_for(3, &[(0, 1), (1, 2)]);
        let generator = HumanReportGenerator::new();

        let report = generator.generate_report(&detector).unwrap();
        assert!(report.contains("No wait-for cycle detected"));
    }

    #[test]
    fn test_report_with_deadlock() {
        let detector = detector_for(3, &[(0, 1), (1, 2), (2, 0)]);
        let generator = HumanReportGenerator::new();

        let report = generator.generate_report(&detector).unwrap();
        assert!(report.contains("Deadlock detected"));
        assert!(report.contains("P0"));
        assert!(report.contains("P1"));
        assert!(report.contains("P2"));
        assert!(report.contains("Wait chain"));
        assert!(report.contains("P2 → P0 → P1 → P2"));
    }
}
