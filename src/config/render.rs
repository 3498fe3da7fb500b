//! Render command configuration

use std::path::PathBuf;

use crate::cli::GraphFormat;
use crate::common::GraphSource;

/// Configuration for the render command
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Where the wait-for graph comes from
    pub source: GraphSource,
    /// Diagram format to generate
    pub format: GraphFormat,
    /// Output file, or stdout when absent
    pub output: Option<PathBuf>,
    /// Highlight a detected deadlock cycle
    pub highlight_cycle: bool,
}

impl RenderConfig {
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct RenderConfigBuilder {
    source: Option<GraphSource>,
    format: Option<GraphFormat>,
    output: Option<Option<PathBuf>>,
    highlight_cycle: Option<bool>,
}

impl RenderConfigBuilder {
    pub fn new() -> Self {
        Self {
            source: None,
            format: None,
            output: None,
            highlight_cycle: None,
        }
    }

    pub fn with_source(mut self, source: GraphSource) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_format(mut self, format: GraphFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_highlight_cycle(mut self, highlight_cycle: bool) -> Self {
        self.highlight_cycle = Some(highlight_cycle);
        self
    }
}

impl crate::common::ConfigBuilder for RenderConfigBuilder {
    type Config = RenderConfig;

    fn build(self) -> Result<Self::Config, crate::error::GridlockError> {
        Ok(RenderConfig {
            source: self.source.ok_or_else(|| {
                crate::error::GridlockError::ConfigurationError {
                    message: "Missing required field: source".to_string(),
                }
            })?,
            format: self.format.ok_or_else(|| {
                crate::error::GridlockError::ConfigurationError {
                    message: "Missing required field: format".to_string(),
                }
            })?,
            output: self.output.ok_or_else(|| {
                crate::error::GridlockError::ConfigurationError {
                    message: "Missing required field: output".to_string(),
                }
            })?,
            highlight_cycle: self.highlight_cycle.ok_or_else(|| {
                crate::error::GridlockError::ConfigurationError {
                    message: "Missing required field: highlight_cycle".to_string(),
                }
            })?,
        })
    }
}
