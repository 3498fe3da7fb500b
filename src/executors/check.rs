//! Check command executor

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::cli::OutputFormat;
use crate::config::CheckConfig;
use crate::detector::CycleDetector;
use crate::executors::{CommandExecutor, load_description};
use crate::graph::WaitGraphBuilder;
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};
use crate::utils::string::pluralize;

pub struct CheckExecutor;

impl CommandExecutor for CheckExecutor {
    type Config = CheckConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Checking the wait-for graph for deadlock...\n",
            style("🚦").cyan()
        );

        let description = load_description(&config.source)?;

        let process_word = if description.processes == 1 {
            "process"
        } else {
            "processes"
        };
        eprintln!(
            "  {} {} {}, {} wait {}",
            style("→").dim(),
            style(description.processes).bold(),
            process_word,
            style(description.waits.len()).bold(),
            pluralize("edge", description.waits.len())
        );

        let mut graph_builder = WaitGraphBuilder::new();
        graph_builder
            .build_from_description(&description)
            .wrap_err("Failed to build the wait-for graph")?;

        let mut detector = CycleDetector::new();
        detector
            .detect(graph_builder.graph())
            .wrap_err("Failed to run deadlock detection")?;

        let report_result = match config.format {
            OutputFormat::Human => HumanReportGenerator::new().generate_report(&detector),
            OutputFormat::Json => JsonReportGenerator::new().generate_report(&detector),
        };

        match report_result {
            Ok(report) => print!("{report}"),
            Err(e) => {
                return Err(e)
                    .into_diagnostic()
                    .wrap_err("Failed to generate report");
            }
        }

        if config.error_on_deadlock && detector.has_deadlock() {
            std::process::exit(1);
        }

        Ok(())
    }
}
