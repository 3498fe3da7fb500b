use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::{FormatArgs, GraphSourceArgs};

#[derive(Parser)]
#[command(
    name = "gridlock",
    about = "🚦 Detect deadlock cycles in process wait-for graphs",
    long_about = "gridlock analyzes a wait-for graph (which process is blocked waiting on which \
                  other process) and reports whether the processes are deadlocked. A deadlock is \
                  a cycle in the graph: a set of processes each waiting on the next with no \
                  progress possible.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a wait-for graph for deadlock
    ///
    /// Loads a graph description (or builds one interactively), runs cycle
    /// detection, and reports either a clean bill of health or one concrete
    /// deadlock cycle as a wait chain.
    #[command(
        long_about = "Analyze a wait-for graph for deadlock. The graph is read from a TOML or \
                      JSON description file, or entered interactively with --interactive. The \
                      detector runs a depth-first search over the wait edges; if any process can \
                      reach itself through a chain of waits, the chain is printed as the detected \
                      deadlock cycle."
    )]
    Check {
        #[command(flatten)]
        source: GraphSourceArgs,

        #[command(flatten)]
        format: FormatArgs,

        /// Exit with error code if a deadlock is found
        #[arg(long, env = "GRIDLOCK_ERROR_ON_DEADLOCK")]
        error_on_deadlock: bool,
    },

    /// Visualize the wait-for graph
    ///
    /// Generates a picture of who waits on whom, in ASCII for the terminal or
    /// as a DOT / Mermaid diagram for documentation. A detected deadlock
    /// cycle is highlighted unless disabled.
    #[command(
        long_about = "Render the wait-for graph in various formats: plain ASCII listing, \
                      Graphviz DOT (laid out on a circle), or a Mermaid flowchart. With cycle \
                      highlighting enabled the deadlocked processes and the wait edges between \
                      them are drawn in a contrasting color."
    )]
    Render {
        #[command(flatten)]
        source: GraphSourceArgs,

        /// Graph format
        #[arg(
            short,
            long,
            value_enum,
            default_value = "ascii",
            env = "GRIDLOCK_GRAPH_FORMAT"
        )]
        format: GraphFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long, env = "GRIDLOCK_OUTPUT")]
        output: Option<PathBuf>,

        /// Highlight the deadlock cycle in the graph
        #[arg(long, default_value = "true", env = "GRIDLOCK_HIGHLIGHT_CYCLE")]
        highlight_cycle: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum GraphFormat {
    Ascii,
    Dot,
    Mermaid,
}
