//! Page assembly and output.
//!
//! The page skeleton (`static/schedule.html`) is embedded at compile time and
//! filled by literal token substitution. It carries the styling and the small
//! reveal script; nothing in it is interpreted here beyond the tokens.
//!
//! ## Template tokens
//!
//! | Token | Replaced with |
//! |-------|---------------|
//! | `__NAME__` | escaped schedule name (page title and heading) |
//! | `__SEM__` | escaped semester (subtitle) |
//! | `__DAYS_HTML__` | day sections, newline-joined |
//!
//! Substitution is a single left-to-right pass over the template. Inserted
//! text is never rescanned, so a schedule named `__SEM__` stays `__SEM__`.
//! A token added to the template must also be added to [`TOKENS`] and to
//! [`assemble`]; any other double-underscore word is copied verbatim.

use crate::escape::escape_str;
use crate::render::render_day;
use crate::schedule::Schedule;
use maud::Markup;
use std::fs;
use std::io;
use std::path::Path;

const TEMPLATE: &str = include_str!("../static/schedule.html");

pub const NAME_TOKEN: &str = "__NAME__";
pub const SEMESTER_TOKEN: &str = "__SEM__";
pub const DAYS_TOKEN: &str = "__DAYS_HTML__";

/// Every token the template may contain.
pub const TOKENS: [&str; 3] = [NAME_TOKEN, SEMESTER_TOKEN, DAYS_TOKEN];

/// Replace tokens in `template` in one pass.
///
/// `values` pairs a token with its replacement. Replacement text is appended
/// as-is and never searched for further tokens.
pub fn substitute(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    loop {
        let next = values
            .iter()
            .filter_map(|&(token, value)| rest.find(token).map(|pos| (pos, token, value)))
            .min_by_key(|&(pos, _, _)| pos);
        match next {
            Some((pos, token, value)) => {
                out.push_str(&rest[..pos]);
                out.push_str(value);
                rest = &rest[pos + token.len()..];
            }
            None => {
                out.push_str(rest);
                return out;
            }
        }
    }
}

/// Fill the page skeleton.
///
/// `name` and `semester` are raw text and are escaped here; `days` are
/// already-rendered day sections.
pub fn assemble(name: &str, semester: &str, days: &[Markup]) -> String {
    let name = escape_str(name);
    let semester = escape_str(semester);
    let days_html = days
        .iter()
        .map(|day| day.0.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    substitute(
        TEMPLATE,
        &[
            (NAME_TOKEN, name.as_str()),
            (SEMESTER_TOKEN, semester.as_str()),
            (DAYS_TOKEN, days_html.as_str()),
        ],
    )
}

/// Render a complete page for `schedule`.
pub fn render_page(schedule: &Schedule) -> String {
    let days: Vec<Markup> = schedule.visible_days().into_iter().map(render_day).collect();
    log::debug!("rendering {} day sections", days.len());
    assemble(&schedule.name, &schedule.semester, &days)
}

/// Write the page, replacing any existing file.
pub fn write(path: &Path, content: &str) -> io::Result<()> {
    fs::write(path, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::schedule;
    use maud::html;
    use tempfile::TempDir;

    #[test]
    fn template_contains_every_token() {
        for token in TOKENS {
            assert!(TEMPLATE.contains(token), "template lacks {token}");
        }
    }

    #[test]
    fn substitute_replaces_all_occurrences() {
        let out = substitute("a __X__ b __X__ __Y__", &[("__X__", "1"), ("__Y__", "2")]);
        assert_eq!(out, "a 1 b 1 2");
    }

    #[test]
    fn substitute_does_not_rescan_inserted_text() {
        let out = substitute("__A__|__B__", &[("__A__", "__B__"), ("__B__", "b")]);
        assert_eq!(out, "__B__|b");
    }

    #[test]
    fn assemble_fills_heading_and_subtitle() {
        let page = assemble("CS101", "Fall", &[]);
        assert!(page.starts_with("<!doctype html>"));
        assert!(page.contains("<title>CS101 (Fall)</title>"));
        assert!(page.contains("<h1>CS101</h1>"));
        assert!(page.contains(r#"<div class="meta">Semester: Fall</div>"#));
        for token in TOKENS {
            assert!(!page.contains(token));
        }
    }

    #[test]
    fn assemble_escapes_name_and_semester() {
        let page = assemble("<CS & 'Math'>", "\"Fall\"", &[]);
        assert!(page.contains("<h1>&lt;CS &amp; &#x27;Math&#x27;&gt;</h1>"));
        assert!(page.contains("Semester: &quot;Fall&quot;"));
    }

    #[test]
    fn assemble_keeps_token_lookalikes_in_user_text() {
        let page = assemble("__SEM__", "__DAYS_HTML__", &[]);
        assert!(page.contains("<h1>__SEM__</h1>"));
        assert!(page.contains("Semester: __DAYS_HTML__"));
    }

    #[test]
    fn assemble_joins_days_with_newline() {
        let days = vec![html! { p { "one" } }, html! { p { "two" } }];
        let page = assemble("S", "", &days);
        assert!(page.contains("<main>\n<p>one</p>\n<p>two</p>\n</main>"));
    }

    #[test]
    fn render_page_without_week_has_no_sections() {
        let page = render_page(&schedule("name: Empty"));
        assert!(!page.contains("day-section\""));
        assert!(page.contains("<main>\n\n</main>"));
    }

    #[test]
    fn render_page_is_deterministic() {
        let s = schedule("week:\n  monday: [{time: [a, b], lectures: [{lecture: X}]}]\n");
        assert_eq!(render_page(&s), render_page(&s));
    }

    #[test]
    fn write_overwrites_existing_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("index.html");
        fs::write(&path, "old content that is longer").unwrap();
        write(&path, "new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }
}
