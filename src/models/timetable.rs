//! The schedule under construction, with booking indexes.
//!
//! A [`Timetable`] owns the flat, append-only list of placed lectures plus
//! three incremental indexes (classroom+day, lecturer+day, section+day →
//! sorted interval lists), so every availability check is a lookup over one
//! short interval list instead of a rescan of the whole schedule.
//!
//! The `*_free` predicates implement the half-open overlap rule: intervals
//! `[s1,e1)` and `[s2,e2)` conflict iff `s1 < e2 && s2 < e1`. The
//! `*_free_excluding` variants additionally discount one booking exactly
//! equal to a given interval; the alternative-slot finder uses them to
//! judge candidate slots as if the lecture being moved had been lifted out.

use std::collections::HashMap;

use super::PlacedLecture;
use crate::timegrid::{TimeWindow, Weekday};

type BookingIndex = HashMap<String, HashMap<Weekday, Vec<TimeWindow>>>;

/// A weekly schedule: placed lectures plus booking indexes.
#[derive(Debug, Clone, Default)]
pub struct Timetable {
    lectures: Vec<PlacedLecture>,
    by_classroom: BookingIndex,
    by_lecturer: BookingIndex,
    by_section: BookingIndex,
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a timetable (and its indexes) from a stored placement list.
    pub fn from_lectures(lectures: Vec<PlacedLecture>) -> Self {
        let mut timetable = Self::new();
        for lecture in lectures {
            timetable.place(lecture);
        }
        timetable
    }

    /// Appends a placement and updates the indexes.
    ///
    /// Does not re-check conflicts; callers verify availability first.
    pub fn place(&mut self, lecture: PlacedLecture) {
        let span = lecture.span();
        insert_booking(&mut self.by_classroom, &lecture.classroom_id, lecture.day, span);
        insert_booking(&mut self.by_lecturer, &lecture.lecturer_id, lecture.day, span);
        insert_booking(&mut self.by_section, &lecture.section_id, lecture.day, span);
        self.lectures.push(lecture);
    }

    /// The placements in insertion order.
    pub fn lectures(&self) -> &[PlacedLecture] {
        &self.lectures
    }

    /// Consumes the timetable into its flat placement list.
    pub fn into_lectures(self) -> Vec<PlacedLecture> {
        self.lectures
    }

    /// Number of placements.
    pub fn len(&self) -> usize {
        self.lectures.len()
    }

    /// Whether no lecture has been placed yet.
    pub fn is_empty(&self) -> bool {
        self.lectures.is_empty()
    }

    /// Whether the classroom has no booking overlapping `span` on `day`.
    pub fn classroom_free(&self, classroom_id: &str, day: Weekday, span: &TimeWindow) -> bool {
        is_free(&self.by_classroom, classroom_id, day, span, None)
    }

    /// Whether the lecturer has no booking overlapping `span` on `day`.
    ///
    /// Checks placed lectures only, not the lecturer's static availability
    /// windows; see [`Lecturer::allows`](super::Lecturer::allows) for those.
    pub fn lecturer_free(&self, lecturer_id: &str, day: Weekday, span: &TimeWindow) -> bool {
        is_free(&self.by_lecturer, lecturer_id, day, span, None)
    }

    /// Whether the section has no booking overlapping `span` on `day`.
    pub fn section_free(&self, section_id: &str, day: Weekday, span: &TimeWindow) -> bool {
        is_free(&self.by_section, section_id, day, span, None)
    }

    /// Like [`classroom_free`](Self::classroom_free), ignoring one booking
    /// exactly equal to `exclude`.
    pub fn classroom_free_excluding(
        &self,
        classroom_id: &str,
        day: Weekday,
        span: &TimeWindow,
        exclude: &TimeWindow,
    ) -> bool {
        is_free(&self.by_classroom, classroom_id, day, span, Some(exclude))
    }

    /// Like [`section_free`](Self::section_free), ignoring one booking
    /// exactly equal to `exclude`.
    pub fn section_free_excluding(
        &self,
        section_id: &str,
        day: Weekday,
        span: &TimeWindow,
        exclude: &TimeWindow,
    ) -> bool {
        is_free(&self.by_section, section_id, day, span, Some(exclude))
    }
}

fn insert_booking(index: &mut BookingIndex, key: &str, day: Weekday, span: TimeWindow) {
    let bookings = index
        .entry(key.to_string())
        .or_default()
        .entry(day)
        .or_default();
    let pos = bookings.partition_point(|w| w.start <= span.start);
    bookings.insert(pos, span);
}

fn is_free(
    index: &BookingIndex,
    key: &str,
    day: Weekday,
    span: &TimeWindow,
    exclude: Option<&TimeWindow>,
) -> bool {
    let Some(bookings) = index.get(key).and_then(|days| days.get(&day)) else {
        return true;
    };
    let mut exclude = exclude.copied();
    for booking in bookings {
        if exclude == Some(*booking) {
            // Discount this booking once; identical duplicates stay counted.
            exclude = None;
            continue;
        }
        if booking.overlaps(span) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timegrid::TimeOfDay;

    fn hm(h: u16, m: u16) -> TimeOfDay {
        TimeOfDay::from_hm(h, m)
    }

    fn window(s: (u16, u16), e: (u16, u16)) -> TimeWindow {
        TimeWindow::new(hm(s.0, s.1), hm(e.0, e.1))
    }

    fn lecture(room: &str, section: &str, lecturer: &str, day: Weekday, span: TimeWindow) -> PlacedLecture {
        PlacedLecture {
            classroom_id: room.into(),
            classroom_name: room.into(),
            course_id: "c1".into(),
            course_name: "Course".into(),
            section_id: section.into(),
            section_name: section.into(),
            lecturer_id: lecturer.into(),
            lecturer_name: lecturer.into(),
            day,
            start: span.start,
            end: span.end,
        }
    }

    #[test]
    fn test_empty_is_free() {
        let t = Timetable::new();
        assert!(t.is_empty());
        assert!(t.classroom_free("r1", Weekday::Monday, &window((8, 0), (9, 0))));
        assert!(t.lecturer_free("l1", Weekday::Monday, &window((8, 0), (9, 0))));
        assert!(t.section_free("s1", Weekday::Monday, &window((8, 0), (9, 0))));
    }

    #[test]
    fn test_booking_blocks_overlap() {
        let mut t = Timetable::new();
        t.place(lecture("r1", "s1", "l1", Weekday::Monday, window((8, 0), (9, 0))));

        let overlapping = window((8, 30), (9, 30));
        assert!(!t.classroom_free("r1", Weekday::Monday, &overlapping));
        assert!(!t.lecturer_free("l1", Weekday::Monday, &overlapping));
        assert!(!t.section_free("s1", Weekday::Monday, &overlapping));

        // Other keys unaffected
        assert!(t.classroom_free("r2", Weekday::Monday, &overlapping));
        assert!(t.lecturer_free("l2", Weekday::Monday, &overlapping));
        // Other days unaffected
        assert!(t.classroom_free("r1", Weekday::Tuesday, &overlapping));
    }

    #[test]
    fn test_adjacent_bookings_allowed() {
        let mut t = Timetable::new();
        t.place(lecture("r1", "s1", "l1", Weekday::Monday, window((8, 0), (9, 0))));
        assert!(t.classroom_free("r1", Weekday::Monday, &window((9, 0), (10, 0))));
        assert!(t.classroom_free("r1", Weekday::Monday, &window((7, 0), (8, 0))));
    }

    #[test]
    fn test_free_excluding_discounts_own_booking() {
        let mut t = Timetable::new();
        let original = window((8, 0), (9, 0));
        t.place(lecture("r1", "s1", "l1", Weekday::Monday, original));
        t.place(lecture("r1", "s2", "l2", Weekday::Monday, window((10, 0), (10, 30))));

        // Overlaps the excluded booking only → free
        let span = window((8, 30), (9, 30));
        assert!(!t.classroom_free("r1", Weekday::Monday, &span));
        assert!(t.classroom_free_excluding("r1", Weekday::Monday, &span, &original));

        // Overlaps another booking → still blocked
        let blocked = window((10, 0), (11, 0));
        assert!(!t.classroom_free_excluding("r1", Weekday::Monday, &blocked, &original));
    }

    #[test]
    fn test_free_excluding_skips_only_one_duplicate() {
        // A joined pair books the section twice with identical intervals;
        // excluding discounts one of them, the twin still blocks.
        let mut t = Timetable::new();
        let span = window((8, 0), (9, 0));
        t.place(lecture("r1", "s1", "l1", Weekday::Monday, span));
        t.place(lecture("r2", "s1", "l1", Weekday::Monday, span));

        assert!(!t.section_free_excluding("s1", Weekday::Monday, &window((8, 30), (9, 30)), &span));
    }

    #[test]
    fn test_from_lectures_rebuilds_indexes() {
        let lectures = vec![
            lecture("r1", "s1", "l1", Weekday::Monday, window((8, 0), (9, 0))),
            lecture("r2", "s2", "l1", Weekday::Tuesday, window((9, 0), (10, 0))),
        ];
        let t = Timetable::from_lectures(lectures.clone());

        assert_eq!(t.len(), 2);
        assert_eq!(t.lectures(), lectures.as_slice());
        assert!(!t.classroom_free("r1", Weekday::Monday, &window((8, 0), (9, 0))));
        assert!(!t.lecturer_free("l1", Weekday::Tuesday, &window((9, 30), (10, 30))));
        assert_eq!(t.into_lectures(), lectures);
    }
}
