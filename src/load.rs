//! Schedule document loading.
//!
//! The input is parsed into a plain [`serde_yaml::Value`] tree. serde_yaml only
//! builds data (no tags resolve to code), which gives the "safe load" semantics
//! the tool needs. Turning the tree into typed schedule data happens in
//! [`crate::schedule`].

use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Input file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("{}: top-level document must be a mapping", .0.display())]
    NotMapping(PathBuf),
}

/// Read and parse the schedule document at `path`.
///
/// Existence is checked before any read. An empty document (or one holding
/// only comments) yields an empty mapping so every field falls back to its
/// default.
pub fn load(path: &Path) -> Result<Mapping, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    log::debug!("read {} bytes from {}", content.len(), path.display());
    parse(&content)?.ok_or_else(|| LoadError::NotMapping(path.to_path_buf()))
}

/// Parse document text.
///
/// Returns `None` when the top-level value is neither a mapping nor empty.
pub fn parse(content: &str) -> Result<Option<Mapping>, serde_yaml::Error> {
    if content.trim().is_empty() {
        return Ok(Some(Mapping::new()));
    }
    match serde_yaml::from_str::<Value>(content)? {
        Value::Mapping(map) => Ok(Some(map)),
        Value::Null => Ok(Some(Mapping::new())),
        _ => Ok(None),
    }
}
