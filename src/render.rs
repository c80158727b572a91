//! HTML fragments for days, slots, lectures and attendees.
//!
//! Fragments compose bottom-up: attendee pills → lecture block → slot →
//! day section. All document text goes through [`Escaped`], so each value is
//! escaped exactly once no matter how deeply it is nested.
//!
//! Indented here for reading; the output has no whitespace between tags
//! except the newlines joining sibling slots and lectures.
//!
//! ```text
//! <section class="day-section">
//!   <header class="day-header"><div class="day-name">Monday</div></header>
//!   <div class="day-row">
//!     <div class="slot">
//!       <div class="time">09:00 — 10:00</div>
//!       <div class="lectures">
//!         <div class="lecture">
//!           <div class="title">Intro</div>
//!           <div class="attendees"><span class="att-pill">Alice</span></div>
//!         </div>
//!       </div>
//!     </div>
//!   </div>
//! </section>
//! ```

use crate::days::capitalize;
use crate::escape::Escaped;
use crate::schedule::{Day, Lecture, Slot, SlotTime};
use maud::{Markup, html};

/// Shown in place of an empty time or an empty attendee list.
pub const PLACEHOLDER: &str = "—";

/// Separator between start and end of a slot.
pub const TIME_SEPARATOR: &str = " — ";

/// Attendee pills joined by a single space, or the placeholder when empty.
pub fn render_attendees(attendees: &[String]) -> Markup {
    html! {
        @if attendees.is_empty() {
            (PLACEHOLDER)
        } @else {
            @for (i, name) in attendees.iter().enumerate() {
                @if i > 0 { " " }
                span.att-pill { (Escaped(name)) }
            }
        }
    }
}

pub fn render_lecture(lecture: &Lecture) -> Markup {
    html! {
        div.lecture {
            div.title { (Escaped(&lecture.title)) }
            div.attendees { (render_attendees(&lecture.attendees)) }
        }
    }
}

/// Time label of a slot: `start — end`, or the placeholder when both are empty.
///
/// A slot with only a start still gets the separator (`09:00 — `).
pub fn render_time(time: &SlotTime) -> Markup {
    html! {
        @if time.is_empty() {
            (PLACEHOLDER)
        } @else {
            (Escaped(&time.start)) (TIME_SEPARATOR) (Escaped(&time.end))
        }
    }
}

pub fn render_slot(slot: &Slot) -> Markup {
    html! {
        div.slot {
            div.time { (render_time(&slot.time)) }
            div.lectures {
                @for (i, lecture) in slot.lectures.iter().enumerate() {
                    @if i > 0 { "\n" }
                    (render_lecture(lecture))
                }
            }
        }
    }
}

/// A full day section. Callers skip days without slots.
pub fn render_day(day: &Day) -> Markup {
    html! {
        section.day-section {
            header.day-header {
                div.day-name { (Escaped(&capitalize(&day.key))) }
            }
            div.day-row {
                @for (i, slot) in day.slots.iter().enumerate() {
                    @if i > 0 { "\n" }
                    (render_slot(slot))
                }
            }
        }
    }
}
