//! Load → render → write.
//!
//! [`run`] is the whole tool: it loads the schedule document, renders the
//! page and writes it, returning a [`BuildReport`] for the CLI to print.
//! [`check`] stops after loading and reports what would be rendered.

use crate::config::ScheduleConfig;
use crate::days::capitalize;
use crate::load::{self, LoadError};
use crate::page;
use crate::schedule::Schedule;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Inputs of a single run.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub default_name: String,
}

impl From<&ScheduleConfig> for BuildOptions {
    fn from(config: &ScheduleConfig) -> Self {
        Self {
            input: config.input.clone(),
            output: config.output.clone(),
            default_name: config.page.default_name.clone(),
        }
    }
}

/// One rendered day section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySummary {
    /// Day label as shown on the page.
    pub name: String,
    pub slots: usize,
    pub lectures: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Resolved path of the written page.
    pub output: PathBuf,
    pub name: String,
    pub days: Vec<DaySummary>,
}

/// Summaries of the day sections `schedule` renders, in page order.
pub fn summarize(schedule: &Schedule) -> Vec<DaySummary> {
    schedule
        .visible_days()
        .into_iter()
        .map(|day| DaySummary {
            name: capitalize(&day.key),
            slots: day.slots.len(),
            lectures: day.slots.iter().map(|s| s.lectures.len()).sum(),
        })
        .collect()
}

fn load_schedule(options: &BuildOptions) -> Result<Schedule, BuildError> {
    let doc = load::load(&options.input)?;
    Ok(Schedule::from_document(&doc, &options.default_name))
}

/// Load and normalize the document without writing anything.
pub fn check(options: &BuildOptions) -> Result<Vec<DaySummary>, BuildError> {
    let schedule = load_schedule(options)?;
    Ok(summarize(&schedule))
}

/// Run the full pipeline and write the page.
pub fn run(options: &BuildOptions) -> Result<BuildReport, BuildError> {
    let schedule = load_schedule(options)?;
    let html = page::render_page(&schedule);
    page::write(&options.output, &html).map_err(|source| BuildError::Write {
        path: options.output.clone(),
        source,
    })?;
    log::debug!("wrote {} bytes to {}", html.len(), options.output.display());

    Ok(BuildReport {
        output: resolve(&options.output),
        name: schedule.name.clone(),
        days: summarize(&schedule),
    })
}

/// Absolute form of `path`, or `path` itself if it cannot be resolved.
fn resolve(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
