//! Lecturer catalog model.
//!
//! A lecturer's weekly availability maps each weekday to an ordered list of
//! disjoint time windows during which they may teach. A day with no entry
//! means the lecturer is unavailable that day. The map is a `BTreeMap`
//! keyed by [`Weekday`], so iteration follows the canonical day order and
//! generation stays deterministic.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::timegrid::{TimeOfDay, TimeWindow, Weekday};

/// A lecturer and their static weekly availability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lecturer {
    /// Unique lecturer identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Per-weekday availability windows, in stored order within a day.
    pub availability: BTreeMap<Weekday, Vec<TimeWindow>>,
}

impl Lecturer {
    /// Creates a lecturer with no availability.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            availability: BTreeMap::new(),
        }
    }

    /// Adds an availability window on a day.
    pub fn with_window(mut self, day: Weekday, start: TimeOfDay, end: TimeOfDay) -> Self {
        self.availability
            .entry(day)
            .or_default()
            .push(TimeWindow::new(start, end));
        self
    }

    /// Whether some availability window on `day` contains `span` entirely.
    pub fn allows(&self, day: Weekday, span: &TimeWindow) -> bool {
        self.availability
            .get(&day)
            .is_some_and(|windows| windows.iter().any(|w| w.encloses(span)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u16, m: u16) -> TimeOfDay {
        TimeOfDay::from_hm(h, m)
    }

    #[test]
    fn test_allows_within_window() {
        let l = Lecturer::new("l1", "Ada").with_window(Weekday::Monday, hm(8, 0), hm(12, 0));

        assert!(l.allows(Weekday::Monday, &TimeWindow::new(hm(9, 0), hm(10, 0))));
        // Exact bounds count as contained
        assert!(l.allows(Weekday::Monday, &TimeWindow::new(hm(8, 0), hm(12, 0))));
        assert!(!l.allows(Weekday::Monday, &TimeWindow::new(hm(11, 30), hm(12, 30))));
    }

    #[test]
    fn test_allows_requires_single_window() {
        // Two adjacent windows do not merge: a span across the seam fails.
        let l = Lecturer::new("l1", "Ada")
            .with_window(Weekday::Monday, hm(8, 0), hm(9, 0))
            .with_window(Weekday::Monday, hm(9, 0), hm(10, 0));

        assert!(!l.allows(Weekday::Monday, &TimeWindow::new(hm(8, 30), hm(9, 30))));
        assert!(l.allows(Weekday::Monday, &TimeWindow::new(hm(9, 0), hm(10, 0))));
    }

    #[test]
    fn test_unlisted_day_unavailable() {
        let l = Lecturer::new("l1", "Ada").with_window(Weekday::Monday, hm(8, 0), hm(12, 0));
        assert!(!l.allows(Weekday::Tuesday, &TimeWindow::new(hm(9, 0), hm(10, 0))));
    }

    #[test]
    fn test_availability_iterates_in_day_order() {
        let l = Lecturer::new("l1", "Ada")
            .with_window(Weekday::Friday, hm(8, 0), hm(10, 0))
            .with_window(Weekday::Monday, hm(8, 0), hm(10, 0));

        let days: Vec<Weekday> = l.availability.keys().copied().collect();
        assert_eq!(days, vec![Weekday::Monday, Weekday::Friday]);
    }

    #[test]
    fn test_serde_availability_map() {
        let l = Lecturer::new("l1", "Ada").with_window(Weekday::Monday, hm(8, 0), hm(10, 0));
        let json = serde_json::to_string(&l).unwrap();
        assert!(json.contains("\"Monday\""));
        assert!(json.contains("\"08:00\""));
        let back: Lecturer = serde_json::from_str(&json).unwrap();
        assert_eq!(back, l);
    }
}
