//! CLI output formatting.
//!
//! Each command has a `format_*` function returning lines (pure, no I/O) and
//! a `print_*` wrapper that writes them to stdout.
//!
//! ## Build
//!
//! Stdout gets exactly one line:
//!
//! ```text
//! Wrote /home/me/schedule/index.html
//! ```
//!
//! The per-day summary goes to the log at `info` (`RUST_LOG=info`):
//!
//! ```text
//! CS101 (2 days)
//! 001 Monday (2 slots, 3 lectures)
//! 002 Lab (1 slot, 0 lectures)
//! ```
//!
//! ## Check
//!
//! ```text
//! Days
//! 001 Monday (2 slots, 3 lectures)
//! ```

use crate::pipeline::{BuildReport, DaySummary};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{} {}", n, one)
    } else {
        format!("{} {}", n, many)
    }
}

/// One line per rendered day section.
pub fn format_days(days: &[DaySummary]) -> Vec<String> {
    if days.is_empty() {
        return vec!["    (no days with slots)".to_string()];
    }
    days.iter()
        .enumerate()
        .map(|(i, day)| {
            format!(
                "{} {} ({}, {})",
                format_index(i + 1),
                day.name,
                plural(day.slots, "slot", "slots"),
                plural(day.lectures, "lecture", "lectures"),
            )
        })
        .collect()
}

/// Heading plus one line per day of a finished build.
pub fn format_build_summary(report: &BuildReport) -> Vec<String> {
    let mut lines = vec![format!(
        "{} ({})",
        report.name,
        plural(report.days.len(), "day", "days")
    )];
    lines.extend(format_days(&report.days));
    lines
}

/// The confirmation line naming the written page.
pub fn format_wrote_line(report: &BuildReport) -> String {
    format!("Wrote {}", report.output.display())
}

pub fn format_check_output(days: &[DaySummary]) -> Vec<String> {
    let mut lines = vec!["Days".to_string()];
    lines.extend(format_days(days));
    lines
}

pub fn print_build_output(report: &BuildReport) {
    for line in format_build_summary(report) {
        log::info!("{}", line);
    }
    println!("{}", format_wrote_line(report));
}

pub fn print_check_output(days: &[DaySummary]) {
    for line in format_check_output(days) {
        println!("{}", line);
    }
}
