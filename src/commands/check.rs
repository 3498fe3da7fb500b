//! Check command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::CheckConfig;
use crate::error::GridlockError;

impl FromCommand for CheckConfig {
    fn from_command(command: Commands) -> Result<Self, GridlockError> {
        match command {
            Commands::Check {
                source,
                format,
                error_on_deadlock,
            } => CheckConfig::builder()
                .with_source(source.resolve()?)
                .with_format(format.format)
                .with_error_on_deadlock(error_on_deadlock)
                .build(),
            _ => Err(GridlockError::ConfigurationError {
                message: "Invalid command type for CheckConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(CheckConfig);

/// Execute the check command for detecting wait-for deadlock
pub fn execute_check_command(command: Commands) -> Result<()> {
    let config = CheckConfig::from_command(command)
        .wrap_err("Failed to parse check command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::check::CheckExecutor;
    CheckExecutor::execute(config)
}
