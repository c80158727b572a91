//! Day ordering and day labels.
//!
//! Canonical weekdays always come first in calendar order, whatever order the
//! document lists them in. Any other key (`exam-week`, `Monday` with a capital)
//! follows in the order it appears in the document.

use std::collections::HashSet;

/// Canonical day keys in display order.
pub const CANONICAL_DAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Order day keys for display.
///
/// Emits each canonical day present in `keys`, then every remaining key in
/// its original order. Duplicate keys are emitted once.
pub fn order_days<'a>(keys: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    let keys: Vec<&str> = keys.into_iter().collect();
    let mut seen = HashSet::new();
    let mut ordered = Vec::with_capacity(keys.len());

    for day in CANONICAL_DAYS {
        if let Some(&key) = keys.iter().find(|&&k| k == day) {
            seen.insert(key);
            ordered.push(key);
        }
    }
    for key in keys {
        if seen.insert(key) {
            ordered.push(key);
        }
    }
    ordered
}

/// Positions of `keys` in display order.
///
/// Same ordering as [`order_days`], but every entry keeps its own position:
/// each canonical day's entries first, then the rest in document order. Two
/// entries whose keys share a text form both appear.
pub fn display_order<'a>(keys: impl IntoIterator<Item = &'a str>) -> Vec<usize> {
    let keys: Vec<&str> = keys.into_iter().collect();
    let mut placed = vec![false; keys.len()];
    let mut ordered = Vec::with_capacity(keys.len());

    for day in CANONICAL_DAYS {
        for (i, key) in keys.iter().enumerate() {
            if *key == day && !placed[i] {
                placed[i] = true;
                ordered.push(i);
            }
        }
    }
    ordered.extend((0..keys.len()).filter(|&i| !placed[i]));
    ordered
}

/// Uppercase the first character, leaving the rest untouched.
///
/// `"monday"` → `"Monday"`, `"exam-WEEK"` → `"Exam-WEEK"`.
///
/// Uses full Unicode case mapping, so the first character may become more
/// than one (`"ßonday"` → `"SSonday"`). That is intended.
pub fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yields_empty() {
        assert!(order_days(std::iter::empty()).is_empty());
    }

    #[test]
    fn canonical_days_sorted_by_weekday() {
        let ordered = order_days(["sunday", "friday", "monday", "wednesday"]);
        assert_eq!(ordered, vec!["monday", "wednesday", "friday", "sunday"]);
    }

    #[test]
    fn extra_keys_follow_in_document_order() {
        let ordered = order_days(["lab", "tuesday", "exam-week", "monday", "Monday"]);
        assert_eq!(
            ordered,
            vec!["monday", "tuesday", "lab", "exam-week", "Monday"]
        );
    }

    #[test]
    fn duplicate_keys_emitted_once() {
        assert_eq!(order_days(["lab", "monday", "lab"]), vec!["monday", "lab"]);
    }

    #[test]
    fn display_order_keeps_every_entry() {
        let order = display_order(["1", "friday", "1", "monday"]);
        assert_eq!(order, vec![3, 1, 0, 2]);
    }

    #[test]
    fn capitalize_only_first_letter() {
        assert_eq!(capitalize("monday"), "Monday");
        assert_eq!(capitalize("exam-WEEK"), "Exam-WEEK");
        assert_eq!(capitalize("ßonday"), "SSonday");
        assert_eq!(capitalize(""), "");
    }
}
