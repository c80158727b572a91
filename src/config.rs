//! Tool configuration.
//!
//! Settings come from an optional `schedule.toml` in the working directory
//! (or the file passed with `--config`), then command-line flags on top.
//! With no file and no flags the tool reads `schedule.yaml` and writes
//! `index.html`.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! input = "schedule.yaml"   # Schedule document to read
//! output = "index.html"     # Page to write (overwritten on every run)
//!
//! [page]
//! default_name = "Schedule" # Heading when the document has no `name`
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::schedule::DEFAULT_NAME;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file looked up when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "schedule.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScheduleConfig {
    /// Schedule document to read.
    pub input: PathBuf,
    /// HTML page to write.
    pub output: PathBuf,
    /// Page-level settings.
    pub page: PageConfig,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("schedule.yaml"),
            output: PathBuf::from("index.html"),
            page: PageConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Heading used when the document has no `name`.
    pub default_name: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            default_name: DEFAULT_NAME.to_string(),
        }
    }
}

impl ScheduleConfig {
    /// Validate that paths are usable and distinct.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input.as_os_str().is_empty() {
            return Err(ConfigError::Validation("input must not be empty".into()));
        }
        if self.output.as_os_str().is_empty() {
            return Err(ConfigError::Validation("output must not be empty".into()));
        }
        if same_file(&self.input, &self.output) {
            return Err(ConfigError::Validation(
                "input and output must be different files".into(),
            ));
        }
        if self.page.default_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "page.default_name must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Apply command-line overrides. `None` keeps the configured value.
    pub fn with_overrides(mut self, input: Option<PathBuf>, output: Option<PathBuf>) -> Self {
        if let Some(input) = input {
            self.input = input;
        }
        if let Some(output) = output {
            self.output = output;
        }
        self
    }
}

/// Whether two paths name the same file.
///
/// Existing files compare by canonical path. Otherwise both are made absolute
/// against the working directory, which drops `.` components (`./a` vs `a`).
fn same_file(a: &Path, b: &Path) -> bool {
    if let (Ok(a), Ok(b)) = (fs::canonicalize(a), fs::canonicalize(b)) {
        return a == b;
    }
    match (std::path::absolute(a), std::path::absolute(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// Read and validate a config file that must exist.
pub fn read_config(path: &Path) -> Result<ScheduleConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    let config: ScheduleConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Read a config file if present, otherwise return the defaults.
pub fn load_config(path: &Path) -> Result<ScheduleConfig, ConfigError> {
    if path.exists() {
        log::debug!("loading config from {}", path.display());
        read_config(path)
    } else {
        Ok(ScheduleConfig::default())
    }
}

/// A documented config file with every option at its default.
pub fn stock_config_toml() -> &'static str {
    r##"# schedule-page configuration
# ===========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Command-line flags (--input, --output) override these values.
# Unknown keys will cause an error.

# Schedule document to read (YAML).
input = "schedule.yaml"

# HTML page to write. Overwritten on every run.
output = "index.html"

# ---------------------------------------------------------------------------
# Page
# ---------------------------------------------------------------------------
[page]
# Heading used when the document has no `name` (or an empty one).
default_name = "Schedule"
"##
}
