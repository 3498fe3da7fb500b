//! Render command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::RenderConfig;
use crate::error::GridlockError;

impl FromCommand for RenderConfig {
    fn from_command(command: Commands) -> Result<Self, GridlockError> {
        match command {
            Commands::Render {
                source,
                format,
                output,
                highlight_cycle,
            } => RenderConfig::builder()
                .with_source(source.resolve()?)
                .with_format(format)
                .with_output(output)
                .with_highlight_cycle(highlight_cycle)
                .build(),
            _ => Err(GridlockError::ConfigurationError {
                message: "Invalid command type for RenderConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(RenderConfig);

/// Execute the render command for visualizing the wait-for graph
pub fn execute_render_command(command: Commands) -> Result<()> {
    let config = RenderConfig::from_command(command)
        .wrap_err("Failed to parse render command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::render::RenderExecutor;
    RenderExecutor::execute(config)
}
