//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

use crate::error::GridlockError;

/// Where the wait-for graph comes from
#[derive(Debug, Clone)]
pub enum GraphSource {
    /// A TOML or JSON description file
    File(PathBuf),
    /// Prompt for processes and wait edges on the terminal
    Interactive,
}

/// Graph input arguments shared by multiple commands
#[derive(Args, Debug, Clone)]
pub struct GraphSourceArgs {
    /// Path to a wait-for graph description (TOML or JSON)
    #[arg(value_name = "GRAPH_FILE")]
    pub input: Option<PathBuf>,

    /// Build the graph interactively on the terminal
    #[arg(long, env = "GRIDLOCK_INTERACTIVE")]
    pub interactive: bool,
}

impl GraphSourceArgs {
    /// Resolve the arguments into a concrete source
    ///
    /// `--interactive` wins over a file argument; passing neither is a
    /// configuration error.
    pub fn resolve(&self) -> Result<GraphSource, GridlockError> {
        if self.interactive {
            return Ok(GraphSource::Interactive);
        }
        match &self.input {
            Some(path) => Ok(GraphSource::File(path.clone())),
            None => Err(GridlockError::ConfigurationError {
                message: "Provide a GRAPH_FILE or pass --interactive".to_string(),
            }),
        }
    }
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "GRIDLOCK_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, GridlockError>;
}

/// Trait for configurations that can be created from CLI commands
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands) -> Result<Self, GridlockError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::GridlockError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_interactive() {
        let args = GraphSourceArgs {
            input: Some(PathBuf::from("graph.toml")),
            interactive: true,
        };

        match args.resolve().unwrap() {
            GraphSource::Interactive => {}
            other => panic!("Expected Interactive, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_file() {
        let args = GraphSourceArgs {
            input: Some(PathBuf::from("graph.toml")),
            interactive: false,
        };

        match args.resolve().unwrap() {
            GraphSource::File(path) => assert_eq!(path, PathBuf::from("graph.toml")),
            other => panic!("Expected File, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_requires_a_source() {
        let args = GraphSourceArgs {
            input: None,
            interactive: false,
        };

        assert!(args.resolve().is_err());
    }
}
