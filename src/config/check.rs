//! Check command configuration

use crate::cli::OutputFormat;
use crate::common::GraphSource;

/// Configuration for the check command
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Where the wait-for graph comes from
    pub source: GraphSource,
    /// Output format for the report
    pub format: OutputFormat,
    /// Whether to exit with error code if a deadlock is found
    pub error_on_deadlock: bool,
}

impl CheckConfig {
    pub fn builder() -> CheckConfigBuilder {
        CheckConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct CheckConfigBuilder {
    source: Option<GraphSource>,
    format: Option<OutputFormat>,
    error_on_deadlock: Option<bool>,
}

impl CheckConfigBuilder {
    pub fn new() -> Self {
        Self {
            source: None,
            format: None,
            error_on_deadlock: None,
        }
    }

    pub fn with_source(mut self, source: GraphSource) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_error_on_deadlock(mut self, error_on_deadlock: bool) -> Self {
        self.error_on_deadlock = Some(error_on_deadlock);
        self
    }
}

impl crate::common::ConfigBuilder for CheckConfigBuilder {
    type Config = CheckConfig;

    fn build(self) -> Result<Self::Config, crate::error::GridlockError> {
        Ok(CheckConfig {
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
            error_on_deadlock: self.error_on_deadlock.ok_or_else(|| {
                crate::error::GridlockError::ConfigurationError {
                    message: "Missing required field: error_on_deadlock".to_string(),
                }
            })?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;

    #[test]
    fn test_builder_requires_all_fields() {
        let result = CheckConfig::builder()
            .with_format(OutputFormat::Json)
            .build();

        assert!(result.is_err());
    }

    #[test]
    fn test_builder_complete() {
        let config = CheckConfig::builder()
            .with_source(GraphSource::Interactive)
            .with_format(OutputFormat::Human)
            .with_error_on_deadlock(false)
            .build()
            .unwrap();

        assert_eq!(config.format, OutputFormat::Human);
        assert!(!config.error_on_deadlock);
    }
}
