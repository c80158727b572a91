//! Typed schedule data built from a loaded document.
//!
//! Hand-written schedule files are loose: fields go missing, `time` is a
//! one-element list or a bare string, attendee lists are null. Everything
//! is resolved here through small accessor helpers so the renderers only
//! ever see plain strings and vectors.
//!
//! ## Fallbacks
//!
//! | Field | Present as | Becomes |
//! |-------|-----------|---------|
//! | `name` | absent, null, `""` | configured default name |
//! | `semester` | absent, null | `""` |
//! | `week` | absent, null, non-mapping | no days |
//! | day value | absent, null, non-sequence | no slots (day omitted) |
//! | `time` | `[start, end, ...]` | first two elements |
//! | `time` | `[start]` or scalar | `start`, empty end |
//! | `time` | absent, null, `[]`, mapping | empty start and end |
//! | `lectures` | non-sequence | no lectures |
//! | `attendees` | non-blank scalar | one attendee |
//! | `attendees` | absent, null, mapping, `""`, `false`, `0` | no attendees |
//!
//! Text is stored unescaped; escaping happens once, at render time.

use crate::days;
use crate::escape::text_of;
use serde_yaml::{Mapping, Value};

/// Name used when the document has none.
pub const DEFAULT_NAME: &str = "Schedule";

/// A fully normalized schedule document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub name: String,
    pub semester: String,
    pub week: Week,
}

/// Day entries in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Week {
    pub days: Vec<Day>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Day {
    /// Day key as written in the document, e.g. `monday` or `exam-week`.
    pub key: String,
    pub slots: Vec<Slot>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slot {
    pub time: SlotTime,
    pub lectures: Vec<Lecture>,
}

/// Display bounds of a slot. Either side may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotTime {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lecture {
    pub title: String,
    pub attendees: Vec<String>,
}

// ============================================================================
// Field accessors
// ============================================================================

/// Look up `key`, treating an explicit null the same as a missing key.
fn field<'a>(map: &'a Mapping, key: &str) -> Option<&'a Value> {
    map.get(key).filter(|v| !v.is_null())
}

/// Text of `key`, or `""` when absent.
fn text_field(map: &Mapping, key: &str) -> String {
    field(map, key).map(text_of).unwrap_or_default()
}

/// Items of a sequence value. Anything that is not a sequence has no items.
fn items(value: Option<&Value>) -> &[Value] {
    match value {
        Some(Value::Sequence(seq)) => seq.as_slice(),
        _ => &[],
    }
}

/// Scalars that name nobody: `""`, `false`, `0`.
fn is_blank(scalar: &Value) -> bool {
    match scalar {
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Tagged(tagged) => is_blank(&tagged.value),
        other => text_of(other).is_empty(),
    }
}

// ============================================================================
// Construction
// ============================================================================

impl Schedule {
    /// Build a schedule from a loaded document, using `default_name` when the
    /// document has no usable `name`.
    pub fn from_document(doc: &Mapping, default_name: &str) -> Self {
        let name = text_field(doc, "name");
        let name = if name.is_empty() {
            default_name.to_string()
        } else {
            name
        };
        let week = match field(doc, "week") {
            Some(Value::Mapping(week)) => Week::from_mapping(week),
            Some(other) => {
                log::warn!("`week` is not a mapping ({other:?}); no days rendered");
                Week::default()
            }
            None => Week::default(),
        };
        Self {
            name,
            semester: text_field(doc, "semester"),
            week,
        }
    }

    /// Days that will appear on the page: display order, empty days dropped.
    ///
    /// Entries are taken by position, so distinct keys with the same text
    /// (`1` and `"1"`) each keep their own section.
    pub fn visible_days(&self) -> Vec<&Day> {
        days::display_order(self.week.days.iter().map(|d| d.key.as_str()))
            .into_iter()
            .map(|i| &self.week.days[i])
            .filter(|day| !day.slots.is_empty())
            .collect()
    }
}

impl Week {
    fn from_mapping(week: &Mapping) -> Self {
        let days = week
            .iter()
            .map(|(key, value)| {
                let key = text_of(key);
                let slots = match value {
                    Value::Sequence(seq) => seq.iter().map(Slot::from_value).collect(),
                    Value::Null => Vec::new(),
                    other => {
                        log::debug!("day `{key}` is not a list ({other:?}); treated as empty");
                        Vec::new()
                    }
                };
                Day { key, slots }
            })
            .collect();
        Self { days }
    }

    /// First day with the given key.
    pub fn get(&self, key: &str) -> Option<&Day> {
        self.days.iter().find(|d| d.key == key)
    }
}

impl Slot {
    pub fn from_value(value: &Value) -> Self {
        let Some(map) = value.as_mapping() else {
            log::debug!("slot is not a mapping ({value:?}); rendered empty");
            return Self::default();
        };
        Self {
            time: SlotTime::from_value(field(map, "time")),
            lectures: items(field(map, "lectures"))
                .iter()
                .map(Lecture::from_value)
                .collect(),
        }
    }
}

impl SlotTime {
    /// Normalize a raw `time` value.
    ///
    /// - two or more elements: first is start, second is end
    /// - one element: start only
    /// - scalar: start only
    /// - absent, empty, or a mapping: no time
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            Some(Value::Sequence(seq)) => Self {
                start: seq.first().map(text_of).unwrap_or_default(),
                end: seq.get(1).map(text_of).unwrap_or_default(),
            },
            Some(Value::Mapping(_)) | Some(Value::Null) | None => Self::default(),
            Some(scalar) => {
                log::debug!("scalar slot time {scalar:?}; using it as start");
                Self {
                    start: text_of(scalar),
                    end: String::new(),
                }
            }
        }
    }

    /// True when neither bound has any text.
    pub fn is_empty(&self) -> bool {
        self.start.is_empty() && self.end.is_empty()
    }
}

impl Lecture {
    pub fn from_value(value: &Value) -> Self {
        let Some(map) = value.as_mapping() else {
            log::debug!("lecture is not a mapping ({value:?}); rendered empty");
            return Self::default();
        };
        let attendees = match field(map, "attendees") {
            Some(Value::Sequence(seq)) => seq.iter().map(text_of).collect(),
            Some(Value::Mapping(_)) | None => Vec::new(),
            Some(scalar) if is_blank(scalar) => Vec::new(),
            Some(scalar) => vec![text_of(scalar)],
        };
        Self {
            title: text_field(map, "lecture"),
            attendees,
        }
    }
}
