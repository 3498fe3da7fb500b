use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid TOML syntax in '{file}'")]
#[diagnostic(
    code(gridlock::toml_parse_error),
    help("Check the TOML syntax near the highlighted position")
)]
pub struct TomlParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: toml::de::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum GridlockError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(gridlock::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    TomlParseError(Box<TomlParseError>),

    #[error("Invalid JSON in '{file}'")]
    #[diagnostic(
        code(gridlock::json_parse_error),
        help("Check the JSON syntax of the graph description")
    )]
    JsonParseError {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(gridlock::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(gridlock::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(gridlock::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(gridlock::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },

    #[error("Invalid wait-for graph: {message}")]
    #[diagnostic(
        code(gridlock::invalid_graph),
        help("Every wait edge must connect two distinct processes within 0..N")
    )]
    InvalidGraph { message: String },
}
