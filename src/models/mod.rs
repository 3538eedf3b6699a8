//! Catalog and schedule domain models.
//!
//! The core exchanges data with its collaborators purely in memory: four
//! read-only catalogs come in ([`Catalogs`]), a flat list of placed
//! lectures goes out. The [`Timetable`] wraps that list with booking
//! indexes while a schedule is being built or queried.
//!
//! | Type | Role |
//! |------|------|
//! | [`Course`] | What is taught, how much, how often |
//! | [`Section`] | One teaching group of a course |
//! | [`Lecturer`] | Who teaches, and when they may |
//! | [`Classroom`] | Where lectures can be hosted |
//! | [`PlacedLecture`] | One committed (day, interval, room) assignment |
//! | [`Timetable`] | The schedule under construction, with indexes |

mod classroom;
mod course;
mod lecturer;
mod placement;
mod section;
mod timetable;

pub use classroom::Classroom;
pub use course::Course;
pub use lecturer::Lecturer;
pub use placement::PlacedLecture;
pub use section::Section;
pub use timetable::Timetable;

use serde::{Deserialize, Serialize};

/// The four read-only input catalogs for one generation run.
///
/// Catalogs are treated as immutable snapshots; iteration order over their
/// vectors is part of the observable contract (it decides which of several
/// equally valid slots is taken first).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalogs {
    pub courses: Vec<Course>,
    pub sections: Vec<Section>,
    pub lecturers: Vec<Lecturer>,
    pub classrooms: Vec<Classroom>,
}

impl Catalogs {
    /// Bundles the four catalogs.
    pub fn new(
        courses: Vec<Course>,
        sections: Vec<Section>,
        lecturers: Vec<Lecturer>,
        classrooms: Vec<Classroom>,
    ) -> Self {
        Self {
            courses,
            sections,
            lecturers,
            classrooms,
        }
    }

    /// Looks up a course by ID.
    pub fn course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Looks up a lecturer by ID.
    pub fn lecturer(&self, id: &str) -> Option<&Lecturer> {
        self.lecturers.iter().find(|l| l.id == id)
    }

    /// Looks up a classroom by ID.
    pub fn classroom(&self, id: &str) -> Option<&Classroom> {
        self.classrooms.iter().find(|c| c.id == id)
    }

    /// Sections of a course, in catalog order.
    pub fn sections_of<'a>(&'a self, course_id: &'a str) -> impl Iterator<Item = &'a Section> + 'a {
        self.sections.iter().filter(move |s| s.course_id == course_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lookups() {
        let catalogs = Catalogs::new(
            vec![Course::new("c1", "Algorithms")],
            vec![
                Section::new("s1", "c1", "l1"),
                Section::new("s2", "c1", "l1"),
                Section::new("s3", "other", "l1"),
            ],
            vec![Lecturer::new("l1", "Ada")],
            vec![Classroom::new("r1", "A-101")],
        );

        assert!(catalogs.course("c1").is_some());
        assert!(catalogs.course("c9").is_none());
        assert!(catalogs.lecturer("l1").is_some());
        assert!(catalogs.classroom("r1").is_some());

        let of_c1: Vec<&str> = catalogs.sections_of("c1").map(|s| s.id.as_str()).collect();
        assert_eq!(of_c1, vec!["s1", "s2"]);
    }
}
