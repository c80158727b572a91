//! # schedule-page
//!
//! Renders a hand-written weekly class schedule (YAML) into one
//! self-contained HTML page, grouped by day, with time slots, lectures and
//! attendee pills.
//!
//! # Pipeline
//!
//! ```text
//! schedule.yaml ──load──▶ Mapping ──normalize──▶ Schedule ──render──▶ day sections
//!                                                                      │
//!                                        index.html ◀──write── page ◀──assemble
//! ```
//!
//! Data flows one way. Nothing reads back its own output, and a run holds no
//! state beyond the document it loaded, so running twice on the same input
//! writes byte-identical pages.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`escape`] | HTML escaping and the maud adapter for escaped text |
//! | [`load`] | Reads the YAML document, failing early on a missing file |
//! | [`schedule`] | Typed schedule model with the fallback rules for loose input |
//! | [`days`] | Canonical weekday ordering and day labels |
//! | [`render`] | Day / slot / lecture / attendee fragments built with Maud |
//! | [`page`] | Token substitution into the page skeleton, and writing it out |
//! | [`config`] | Optional `schedule.toml` with input/output paths |
//! | [`pipeline`] | Load → render → write, returning a report |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Maud for Fragments, Tokens for the Page
//!
//! Day sections are built with [Maud](https://maud.lambda.xyz/) so markup is
//! checked at compile time. The outer page is a static skeleton with three
//! reserved tokens, filled in a single pass (see [`page`]). Styling lives in
//! that skeleton and can be edited without touching Rust code.
//!
//! ## Loose Input, Strict Model
//!
//! Schedule files are typed by hand and fields go missing. Rather than
//! rejecting them, [`schedule`] resolves every absent or odd-shaped field to
//! a documented default. Only a missing file, unparsable YAML, or a
//! top-level value that is not a mapping stops a run.

pub mod config;
pub mod days;
pub mod escape;
pub mod load;
pub mod output;
pub mod page;
pub mod pipeline;
pub mod render;
pub mod schedule;

#[cfg(test)]
pub(crate) mod test_helpers;
