//! Shared test utilities.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let s = schedule("week:\n  monday: [{time: [a, b]}]\n");
//! assert_eq!(s.visible_days().len(), 1);
//! ```

use std::path::{Path, PathBuf};

use crate::load::parse;
use crate::schedule::{DEFAULT_NAME, Schedule};
use serde_yaml::Mapping;

/// Parse YAML text into a document. Panics on malformed input.
pub fn document(yaml: &str) -> Mapping {
    parse(yaml)
        .unwrap_or_else(|e| panic!("test YAML failed to parse: {e}\n{yaml}"))
        .unwrap_or_else(|| panic!("test YAML is not a mapping:\n{yaml}"))
}

/// Parse YAML text straight into a normalized schedule with the stock default name.
pub fn schedule(yaml: &str) -> Schedule {
    Schedule::from_document(&document(yaml), DEFAULT_NAME)
}

/// Write `content` to `dir/name` and return the path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}
