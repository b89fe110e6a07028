//! Snapshot parser (verb module)
//!
//! Loads board snapshots and build options from YAML or JSON.

use std::path::Path;
use crate::board::Board;
use crate::builder::BuildOptions;
use crate::error::ParseError;

/// Parse a board snapshot from a file; `.json` files are read as JSON,
/// everything else as YAML
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Board, ParseError> {
    let contents = read(path.as_ref())?;
    if is_json(path.as_ref()) {
        parse_json(&contents)
    } else {
        parse_str(&contents)
    }
}

/// Parse a board snapshot from a YAML string
pub fn parse_str(yaml: &str) -> Result<Board, ParseError> {
    serde_yaml::from_str(yaml).map_err(ParseError::from)
}

/// Parse a board snapshot from a JSON string
pub fn parse_json(json: &str) -> Result<Board, ParseError> {
    serde_json::from_str(json).map_err(ParseError::from)
}

/// Parse build options from a YAML string
pub fn parse_options_str(yaml: &str) -> Result<BuildOptions, ParseError> {
    serde_yaml::from_str(yaml).map_err(ParseError::from)
}

/// Parse build options from a YAML file
pub fn parse_options_file<P: AsRef<Path>>(path: P) -> Result<BuildOptions, ParseError> {
    parse_options_str(&read(path.as_ref())?)
}

fn read(path: &Path) -> Result<String, ParseError> {
    std::fs::read_to_string(path).map_err(|e| ParseError::Io {
        path: path.display().to_string(),
        source: e,
    })
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}
