//! Render command executor

use std::fs::File;
use std::io::{self, BufWriter, Write};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::cli::GraphFormat;
use crate::config::RenderConfig;
use crate::detector::CycleDetector;
use crate::executors::{CommandExecutor, load_description};
use crate::graph::{GraphRenderer, WaitGraphBuilder};

pub struct RenderExecutor;

impl CommandExecutor for RenderExecutor {
    type Config = RenderConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Generating {} wait-for graph...",
            style("📊").cyan(),
            format!("{:?}", config.format).to_lowercase()
        );

        let description = load_description(&config.source)?;

        let mut graph_builder = WaitGraphBuilder::new();
        graph_builder
            .build_from_description(&description)
            .wrap_err("Failed to build the wait-for graph")?;

        // Detect the cycle only when it will be highlighted
        let mut detector = CycleDetector::new();
        if config.highlight_cycle {
            detector
                .detect(graph_builder.graph())
                .wrap_err("Failed to run deadlock detection")?;
        }

        let renderer = GraphRenderer::new(config.highlight_cycle);

        let mut output_writer: Box<dyn Write> = if let Some(output_path) = config.output.as_ref() {
            Box::new(BufWriter::new(
                File::create(output_path)
                    .into_diagnostic()
                    .wrap_err_with(|| {
                        format!("Failed to create output file '{}'", output_path.display())
                    })?,
            ))
        } else {
            Box::new(io::stdout())
        };

        match config.format {
            GraphFormat::Ascii => {
                renderer.render_ascii(graph_builder.graph(), detector.cycle(), &mut output_writer)
            }
            GraphFormat::Dot => {
                renderer.render_dot(graph_builder.graph(), detector.cycle(), &mut output_writer)
            }
            GraphFormat::Mermaid => renderer.render_mermaid(
                graph_builder.graph(),
                detector.cycle(),
                &mut output_writer,
            ),
        }
        .wrap_err("Failed to render the wait-for graph")?;

        output_writer
            .flush()
            .into_diagnostic()
            .wrap_err("Failed to flush output")?;

        if let Some(output_path) = config.output.as_ref() {
            eprintln!(
                "{} Graph written to '{}'",
                style("✅").green(),
                output_path.display()
            );
        }

        Ok(())
    }
}
