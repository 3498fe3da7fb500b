//! # Configuration Module
//!
//! Configuration structures for the gridlock commands, each with a builder.
//!
//! ## Command Configurations
//!
//! - **CheckConfig**: configuration for `check`, the deadlock detection run
//! - **RenderConfig**: configuration for `render`, the graph visualization
//!
//! ## Example
//!
//! ```
//! use gridlock::cli::{GraphFormat, OutputFormat};
//! use gridlock::common::{ConfigBuilder, GraphSource};
//! use gridlock::config::{CheckConfig, RenderConfig};
//!
//! let check = CheckConfig::builder()
//!     .with_source(GraphSource::File("graph.toml".into()))
//!     .with_format(OutputFormat::Human)
//!     .with_error_on_deadlock(true)
//!     .build();
//! assert!(check.is_ok());
//!
//! let render = RenderConfig::builder()
//!     .with_source(GraphSource::File("graph.toml".into()))
//!     .with_format(GraphFormat::Dot)
//!     .with_output(None)
//!     .with_highlight_cycle(true)
//!     .build();
//! assert!(render.is_ok());
//! ```

pub mod check;
pub mod render;

pub use check::CheckConfig;
pub use render::RenderConfig;
