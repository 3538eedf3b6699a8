//! Alternative-slot enumeration for one placed lecture.
//!
//! Scans the full canonical grid (every day, every slot) rather than the
//! lecturer's windows, then filters, so callers see exactly which grid
//! positions the lecture could move to while keeping its classroom and
//! duration.

use std::collections::HashSet;

use tracing::warn;

use crate::models::{Catalogs, PlacedLecture, Timetable};
use crate::timegrid::{self, TimeWindow, Weekday};

/// Enumerates every (day, start) the lecture could legally move to.
///
/// Candidates keep the lecture's classroom and duration. The schedule
/// snapshot still contains the lecture itself; its own booking is
/// discounted so slots it would vacate are judged free. The current
/// (day, start) is never returned. The timetable is read-only here;
/// candidates are fresh records, not applied moves.
///
/// A candidate is accepted iff:
/// - one of the lecturer's static windows contains the whole interval,
/// - the classroom has no conflicting booking, and
/// - the section has no conflicting booking, so applying a suggested move
///   cannot double-book the section.
///
/// Results are day-major in canonical day order, ascending start within a
/// day, deduplicated by (day, start) on first occurrence. An unknown
/// lecturer yields no candidates.
pub fn alternative_slots(
    lecture: &PlacedLecture,
    catalogs: &Catalogs,
    timetable: &Timetable,
) -> Vec<PlacedLecture> {
    let Some(lecturer) = catalogs.lecturer(&lecture.lecturer_id) else {
        warn!(
            section = %lecture.section_id,
            lecturer = %lecture.lecturer_id,
            "alternative-slot query for a lecturer not in the catalog"
        );
        return Vec::new();
    };

    let duration = i32::from(lecture.duration_minutes());
    let original = lecture.span();

    let mut seen = HashSet::new();
    let mut candidates = Vec::new();

    for day in Weekday::ALL {
        for start in timegrid::slots() {
            let Some(end) = start.add_minutes(duration) else {
                continue;
            };
            if end > timegrid::GRID_END {
                continue;
            }
            if day == lecture.day && start == lecture.start {
                continue;
            }

            let span = TimeWindow::new(start, end);
            if !lecturer.allows(day, &span) {
                continue;
            }

            let (classroom_ok, section_ok) = if day == lecture.day {
                (
                    timetable.classroom_free_excluding(&lecture.classroom_id, day, &span, &original),
                    timetable.section_free_excluding(&lecture.section_id, day, &span, &original),
                )
            } else {
                (
                    timetable.classroom_free(&lecture.classroom_id, day, &span),
                    timetable.section_free(&lecture.section_id, day, &span),
                )
            };
            if !classroom_ok || !section_ok {
                continue;
            }

            if seen.insert((day, start)) {
                let mut candidate = lecture.clone();
                candidate.day = day;
                candidate.start = start;
                candidate.end = end;
                candidates.push(candidate);
            }
        }
    }

    candidates
}
