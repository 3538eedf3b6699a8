//! Placed-lecture record.
//!
//! The atomic unit of a schedule. Identifier/name pairs are denormalized so
//! the schedule can be displayed and persisted without consulting the
//! catalogs again.

use serde::{Deserialize, Serialize};

use super::{Classroom, Course, Lecturer, Section};
use crate::timegrid::{TimeOfDay, TimeWindow, Weekday};

/// One committed (day, interval, classroom) lecture assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedLecture {
    pub classroom_id: String,
    pub classroom_name: String,
    pub course_id: String,
    pub course_name: String,
    pub section_id: String,
    pub section_name: String,
    pub lecturer_id: String,
    pub lecturer_name: String,
    pub day: Weekday,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl PlacedLecture {
    /// Builds a placement from catalog entries.
    pub fn new(
        classroom: &Classroom,
        course: &Course,
        section: &Section,
        lecturer: &Lecturer,
        day: Weekday,
        span: TimeWindow,
    ) -> Self {
        Self {
            classroom_id: classroom.id.clone(),
            classroom_name: classroom.name.clone(),
            course_id: course.id.clone(),
            course_name: course.name.clone(),
            section_id: section.id.clone(),
            section_name: section.name.clone(),
            lecturer_id: lecturer.id.clone(),
            lecturer_name: lecturer.name.clone(),
            day,
            start: span.start,
            end: span.end,
        }
    }

    /// The lecture's half-open time interval.
    #[inline]
    pub fn span(&self) -> TimeWindow {
        TimeWindow::new(self.start, self.end)
    }

    /// Lecture length in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> u16 {
        self.span().duration_minutes()
    }

    /// Whether two placements double-book a classroom, lecturer, or section:
    /// same day, a shared classroom/lecturer/section ID, and overlapping
    /// half-open intervals.
    pub fn conflicts_with(&self, other: &Self) -> bool {
        self.day == other.day
            && (self.classroom_id == other.classroom_id
                || self.lecturer_id == other.lecturer_id
                || self.section_id == other.section_id)
            && self.span().overlaps(&other.span())
    }

    /// Whether `other` is the other-site half of the same joined lecture:
    /// same section, day, and interval, in a different classroom.
    pub fn linked_twin_of(&self, other: &Self) -> bool {
        self.section_id == other.section_id
            && self.day == other.day
            && self.start == other.start
            && self.end == other.end
            && self.classroom_id != other.classroom_id
    }
}
