//! Command executors that handle the actual logic for each command

pub mod check;
pub mod render;

use miette::Result;

use crate::common::GraphSource;
use crate::description::GraphDescription;
use crate::interactive::InteractivePrompter;

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

/// Obtain a graph description from the configured source
pub(crate) fn load_description(source: &GraphSource) -> Result<GraphDescription> {
    use miette::WrapErr;

    match source {
        GraphSource::File(path) => GraphDescription::from_path(path)
            .wrap_err("Failed to load the wait-for graph description"),
        GraphSource::Interactive => InteractivePrompter::new()
            .collect_description()
            .wrap_err("Failed to read the wait-for graph from the terminal"),
    }
}
