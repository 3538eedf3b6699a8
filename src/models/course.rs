//! Course catalog model.
//!
//! A course's weekly teaching time is expressed in "boxes": 30-minute units
//! (2/3/4/6/12 in practice). `lecture_amount` says how many separate weekly
//! meetings that time is split into, so the length of one meeting is
//! `(boxes / lecture_amount) × 30` minutes. The division must be even;
//! [`validate_catalogs`](crate::validation::validate_catalogs) rejects
//! catalogs where it is not.

use serde::{Deserialize, Serialize};

use crate::timegrid::SLOT_MINUTES;

/// A course in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course identifier.
    pub id: String,
    /// Short code, e.g. "ALG".
    pub abbreviation: String,
    /// Display name.
    pub name: String,
    /// Study program the course belongs to.
    pub program: String,
    /// Year of study (0–4).
    pub year_level: u8,
    /// Credit weight; the primary placement-priority key.
    pub credits: u8,
    /// Total weekly teaching time in 30-minute units.
    pub boxes: u8,
    /// Number of separate weekly meetings the time is split into.
    pub lecture_amount: u8,
    /// Whether every meeting needs a lab classroom.
    pub requires_lab: bool,
}

impl Course {
    /// Creates a course with one 60-minute weekly meeting by default.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            abbreviation: String::new(),
            name: name.into(),
            program: String::new(),
            year_level: 0,
            credits: 0,
            boxes: 2,
            lecture_amount: 1,
            requires_lab: false,
        }
    }

    /// Sets the short code.
    pub fn with_abbreviation(mut self, abbreviation: impl Into<String>) -> Self {
        self.abbreviation = abbreviation.into();
        self
    }

    /// Sets the study program.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Sets the year of study.
    pub fn with_year_level(mut self, year_level: u8) -> Self {
        self.year_level = year_level;
        self
    }

    /// Sets the credit weight.
    pub fn with_credits(mut self, credits: u8) -> Self {
        self.credits = credits;
        self
    }

    /// Sets the weekly teaching time in 30-minute units.
    pub fn with_boxes(mut self, boxes: u8) -> Self {
        self.boxes = boxes;
        self
    }

    /// Sets the number of weekly meetings.
    pub fn with_lecture_amount(mut self, lecture_amount: u8) -> Self {
        self.lecture_amount = lecture_amount;
        self
    }

    /// Marks the course as lab-requiring.
    pub fn with_lab(mut self) -> Self {
        self.requires_lab = true;
        self
    }

    /// Length of one meeting in minutes.
    ///
    /// `None` when `lecture_amount` is zero or does not divide `boxes`
    /// evenly; validation reports both as configuration errors.
    pub fn lecture_minutes(&self) -> Option<u16> {
        if self.lecture_amount == 0 || self.boxes % self.lecture_amount != 0 {
            return None;
        }
        Some(u16::from(self.boxes / self.lecture_amount) * SLOT_MINUTES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_builder() {
        let c = Course::new("c1", "Algorithms")
            .with_abbreviation("ALG")
            .with_program("CS")
            .with_year_level(2)
            .with_credits(6)
            .with_boxes(4)
            .with_lecture_amount(2)
            .with_lab();

        assert_eq!(c.id, "c1");
        assert_eq!(c.abbreviation, "ALG");
        assert_eq!(c.program, "CS");
        assert_eq!(c.year_level, 2);
        assert_eq!(c.credits, 6);
        assert!(c.requires_lab);
    }

    #[test]
    fn test_lecture_minutes() {
        let c = Course::new("c1", "A").with_boxes(4).with_lecture_amount(2);
        assert_eq!(c.lecture_minutes(), Some(60));

        let c = Course::new("c2", "B").with_boxes(3).with_lecture_amount(1);
        assert_eq!(c.lecture_minutes(), Some(90));

        let c = Course::new("c3", "C").with_boxes(12).with_lecture_amount(3);
        assert_eq!(c.lecture_minutes(), Some(120));
    }

    #[test]
    fn test_lecture_minutes_malformed() {
        let c = Course::new("c1", "A").with_boxes(4).with_lecture_amount(0);
        assert_eq!(c.lecture_minutes(), None);

        let c = Course::new("c2", "B").with_boxes(3).with_lecture_amount(2);
        assert_eq!(c.lecture_minutes(), None);
    }
}
