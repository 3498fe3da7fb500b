//! Wait-for graph descriptions
//!
//! A [`GraphDescription`] is the serialized form of a wait-for graph: a
//! process count plus an ordered list of wait edges. It can be loaded from a
//! TOML or JSON file, or assembled programmatically (the interactive prompter
//! produces one too). Validation happens here, before any graph is built, so
//! the detector only ever sees well-formed input.
//!
//! ```toml
//! processes = 3
//!
//! [[waits]]
//! from = 0
//! to = 1
//!
//! [[waits]]
//! from = 1
//! to = 2
//! ```

use std::path::Path;

use miette::{NamedSource, SourceSpan};
use serde::{Deserialize, Serialize};

use crate::error::{GridlockError, TomlParseError};
use crate::utils::string::process_label;

/// A single wait edge: process `from` is blocked waiting on process `to`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitEntry {
    pub from: usize,
    pub to: usize,
}

/// Serialized form of a wait-for graph
///
/// Edge order is preserved from the input; it decides which cycle the
/// detector reports first when several exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDescription {
    /// Number of processes in the system; ids are `0..processes`
    pub processes: usize,

    /// Ordered wait edges between processes
    #[serde(default)]
    pub waits: Vec<WaitEntry>,
}

impl GraphDescription {
    /// Create an empty description for `processes` processes
    pub fn new(processes: usize) -> Self {
        Self {
            processes,
            waits: Vec::new(),
        }
    }

    /// Append a wait edge, preserving insertion order
    pub fn add_wait(&mut self, from: usize, to: usize) {
        self.waits.push(WaitEntry { from, to });
    }

    /// Load a description from a TOML or JSON file, dispatched on extension
    ///
    /// Anything that is not `.json` is parsed as TOML, matching how the CLI
    /// documents its input format.
    pub fn from_path(path: &Path) -> Result<Self, GridlockError> {
        let content =
            std::fs::read_to_string(path).map_err(|source| GridlockError::FileReadError {
                path: path.to_path_buf(),
                source,
            })?;

        let file = path.display().to_string();
        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .map_err(|source| GridlockError::JsonParseError { file, source })
        } else {
            toml::from_str(&content).map_err(|source| {
                let span = source
                    .span()
                    .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));
                GridlockError::TomlParseError(Box::new(TomlParseError {
                    file: file.clone(),
                    source_code: NamedSource::new(file, content),
                    span,
                    source,
                }))
            })
        }
    }

    /// Check that every wait edge connects two distinct in-range processes
    ///
    /// Out-of-range endpoints and self-waits are construction errors the
    /// caller must fix; detection never runs on an invalid description.
    pub fn validate(&self) -> Result<(), GridlockError> {
        for wait in &self.waits {
            if wait.from >= self.processes || wait.to >= self.processes {
                return Err(GridlockError::InvalidGraph {
                    message: format!(
                        "wait edge {} -> {} references a process outside 0..{}",
                        process_label(wait.from),
                        process_label(wait.to),
                        self.processes
                    ),
                });
            }
            if wait.from == wait.to {
                return Err(GridlockError::InvalidGraph {
                    message: format!("process {} cannot wait on itself", process_label(wait.from)),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use tempfile::NamedTempFile;

    use super::*;

    fn write_temp(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_toml_description() {
        let file = write_temp(
            ".toml",
            r#"
processes = 3

[[waits]]
from = 0
to = 1

[[waits]]
from = 1
to = 2
"#,
        );

        let description = GraphDescription::from_path(file.path()).unwrap();
        assert_eq!(description.processes, 3);
        assert_eq!(
            description.waits,
            vec![WaitEntry { from: 0, to: 1 }, WaitEntry { from: 1, to: 2 }]
        );
    }

    #[test]
    fn test_load_json_description() {
        let file = write_temp(
            ".json",
            r#"{"processes": 2, "waits": [{"from": 0, "to": 1}, {"from": 1, "to": 0}]}"#,
        );

        let description = GraphDescription::from_path(file.path()).unwrap();
        assert_eq!(description.processes, 2);
        assert_eq!(description.waits.len(), 2);
    }

    #[test]
    fn test_load_toml_without_waits() {
        let file = write_temp(".toml", "processes = 4\n");

        let description = GraphDescription::from_path(file.path()).unwrap();
        assert_eq!(description.processes, 4);
        assert!(description.waits.is_empty());
    }

    #[test]
    fn test_load_invalid_toml_reports_parse_error() {
        let file = write_temp(".toml", "processes = \"three\"\n");

        let err = GraphDescription::from_path(file.path()).unwrap_err();
        match err {
            GridlockError::TomlParseError(_) => {}
            other => panic!("Expected TomlParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_load_invalid_json_reports_parse_error() {
        let file = write_temp(".json", "{not json}");

        let err = GraphDescription::from_path(file.path()).unwrap_err();
        match err {
            GridlockError::JsonParseError { .. } => {}
            other => panic!("Expected JsonParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let err =
            GraphDescription::from_path(Path::new("/nonexistent/graph.toml")).unwrap_err();
        match err {
            GridlockError::FileReadError { .. } => {}
            other => panic!("Expected FileReadError, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_accepts_well_formed_description() {
        let mut description = GraphDescription::new(3);
        description.add_wait(0, 1);
        description.add_wait(1, 2);
        description.add_wait(2, 0);

        assert!(description.validate().is_ok());
    }

    #[test]
    fn test_validate_accepts_empty_graph() {
        assert!(GraphDescription::new(0).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_edge() {
        let mut description = GraphDescription::new(2);
        description.add_wait(0, 5);

        let err = description.validate().unwrap_err();
        match err {
            GridlockError::InvalidGraph { message } => {
                assert!(message.contains("P5"));
            }
            other => panic!("Expected InvalidGraph, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_self_wait() {
        let mut description = GraphDescription::new(2);
        description.add_wait(1, 1);

        let err = description.validate().unwrap_err();
        match err {
            GridlockError::InvalidGraph { message } => {
                assert!(message.contains("itself"));
            }
            other => panic!("Expected InvalidGraph, got {other:?}"),
        }
    }

    #[test]
    fn test_parallel_edges_are_allowed() {
        let mut description = GraphDescription::new(2);
        description.add_wait(0, 1);
        description.add_wait(0, 1);

        assert!(description.validate().is_ok());
        assert_eq!(description.waits.len(), 2);
    }
}
