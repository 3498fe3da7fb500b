//! # Gridlock - Detect Deadlock in Process Wait-For Graphs
//!
//! Gridlock analyzes a wait-for graph, a directed graph where an edge
//! i → j means "process i is blocked waiting on process j", and determines
//! whether the processes are deadlocked. A deadlock is a cycle in that graph:
//! a set of processes each waiting on the next, with no progress possible.
//!
//! ## Main Components
//!
//! - **Description**: the serialized wait-for graph (TOML/JSON file or
//!   interactive entry)
//! - **Graph**: builds the directed graph over process indices
//! - **Detector**: DFS-based cycle detection with recursion-stack tracking
//!   and parent-pointer path reconstruction
//! - **Reports**: human-readable and JSON reports of the result
//!
//! ## Usage
//!
//! ```
//! use gridlock::description::GraphDescription;
//! use gridlock::detector::CycleDetector;
//! use gridlock::graph::WaitGraphBuilder;
//! use gridlock::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};
//! use miette::IntoDiagnostic;
//!
//! # fn main() -> miette::Result<()> {
//! // Step 1: describe the system - 3 processes, each waiting on the next
//! let mut description = GraphDescription::new(3);
//! description.add_wait(0, 1);
//! description.add_wait(1, 2);
//! description.add_wait(2, 0);
//!
//! // Step 2: build the wait-for graph
//! let mut graph_builder = WaitGraphBuilder::new();
//! graph_builder.build_from_description(&description)?;
//!
//! // Step 3: run cycle detection
//! let mut detector = CycleDetector::new();
//! detector.detect(graph_builder.graph())?;
//!
//! // Step 4: inspect the result
//! assert!(detector.has_deadlock());
//! let cycle = detector.cycle().expect("a cycle was just detected");
//! assert_eq!(cycle.path().first(), cycle.path().last());
//! assert_eq!(cycle.processes(), vec![0, 1, 2]);
//!
//! // Reports for console output or programmatic processing
//! let human = HumanReportGenerator::new().generate_report(&detector).into_diagnostic()?;
//! assert!(human.contains("Deadlock detected"));
//!
//! let json = JsonReportGenerator::new().generate_report(&detector).into_diagnostic()?;
//! assert!(json.contains("\"deadlocked\": true"));
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Visualizing the Wait-For Graph
//!
//! ```
//! use gridlock::graph::GraphRenderer;
//! # use gridlock::description::GraphDescription;
//! # use gridlock::detector::CycleDetector;
//! # use gridlock::graph::WaitGraphBuilder;
//!
//! # fn main() -> miette::Result<()> {
//! # let mut description = GraphDescription::new(2);
//! # description.add_wait(0, 1);
//! # description.add_wait(1, 0);
//! # let mut graph_builder = WaitGraphBuilder::new();
//! # graph_builder.build_from_description(&description)?;
//! # let mut detector = CycleDetector::new();
//! # detector.detect(graph_builder.graph())?;
//! // Generate a DOT file for Graphviz (circular layout)
//! let renderer = GraphRenderer::new(true);
//! let mut dot_output = Vec::new();
//! renderer.render_dot(graph_builder.graph(), detector.cycle(), &mut dot_output)?;
//!
//! let dot = String::from_utf8(dot_output).expect("renderer writes UTF-8");
//! assert!(dot.contains("digraph waitfor"));
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod interactive;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod description;
pub mod detector;
pub mod error;
pub mod executors;
pub mod graph;
pub mod reports;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    execute_command(cli.command)
}
