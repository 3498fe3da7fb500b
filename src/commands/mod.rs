//! Command implementations for the gridlock CLI
//!
//! - check: detect deadlock in a wait-for graph
//! - render: visualize the wait-for graph

pub mod check;
pub mod render;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Check { .. } => check::execute_check_command(command),
        Commands::Render { .. } => render::execute_render_command(command),
    }
}
