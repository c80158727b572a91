//! HTML escaping for document text.
//!
//! Every piece of text pulled out of the schedule document passes through
//! [`escape_str`] exactly once before it reaches the page. Maud's own
//! interpolation leaves `'` untouched, so renderers wrap text in [`Escaped`]
//! instead of interpolating strings directly.

use maud::Render;
use serde_yaml::Value;

/// Escape the five HTML-significant characters.
///
/// ```
/// use schedule_page::escape::escape_str;
/// assert_eq!(escape_str(r#"<a href="x">Tom & Jerry's</a>"#),
///            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#x27;s&lt;/a&gt;");
/// ```
pub fn escape_str(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_escaped(&mut out, text);
    out
}

fn push_escaped(buffer: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => buffer.push_str("&amp;"),
            '<' => buffer.push_str("&lt;"),
            '>' => buffer.push_str("&gt;"),
            '"' => buffer.push_str("&quot;"),
            '\'' => buffer.push_str("&#x27;"),
            _ => buffer.push(c),
        }
    }
}

/// Textual form of a document value.
///
/// Strings are taken verbatim, numbers and booleans use their YAML notation.
/// Null, sequences and mappings have no textual form and yield an empty string.
pub fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Tagged(tagged) => text_of(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => String::new(),
    }
}

/// Escape an optional document value. Absent values escape to `""`.
pub fn escape(value: Option<&Value>) -> String {
    value.map(|v| escape_str(&text_of(v))).unwrap_or_default()
}

/// Text that is escaped when rendered into a maud template.
#[derive(Debug, Clone, Copy)]
pub struct Escaped<'a>(pub &'a str);

impl Render for Escaped<'_> {
    fn render_to(&self, buffer: &mut String) {
        push_escaped(buffer, self.0);
    }
}
