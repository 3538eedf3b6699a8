//! Classroom catalog model.

use serde::{Deserialize, Serialize};

use super::{Course, Section};

/// A classroom that can host lectures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classroom {
    /// Unique classroom identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Seat capacity.
    pub capacity: u32,
    /// Lab flag; lab-requiring courses may only use lab classrooms.
    pub lab: bool,
    /// Sites this classroom belongs to (typically one).
    pub locations: Vec<String>,
}

impl Classroom {
    /// Creates a classroom.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            capacity: 0,
            lab: false,
            locations: Vec::new(),
        }
    }

    /// Sets the seat capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Marks the classroom as a lab.
    pub fn with_lab(mut self) -> Self {
        self.lab = true;
        self
    }

    /// Adds a site this classroom belongs to.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.locations.push(location.into());
        self
    }

    /// Whether this classroom is at the given site.
    pub fn at_site(&self, site: &str) -> bool {
        self.locations.iter().any(|l| l == site)
    }

    /// Whether this classroom's locations cover every required one.
    pub fn covers(&self, required: &[String]) -> bool {
        required.iter().all(|r| self.at_site(r))
    }

    /// Suitability for a section of a course: the lab flag satisfies the
    /// course's requirement (a non-lab course may use any room) and the
    /// location set covers the section's required locations.
    pub fn suits(&self, course: &Course, section: &Section) -> bool {
        (!course.requires_lab || self.lab) && self.covers(&section.locations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classroom_builder() {
        let c = Classroom::new("r1", "A-101")
            .with_capacity(60)
            .with_lab()
            .with_location("Zagreb");

        assert_eq!(c.id, "r1");
        assert_eq!(c.capacity, 60);
        assert!(c.lab);
        assert!(c.at_site("Zagreb"));
        assert!(!c.at_site("Dubrovnik"));
    }

    #[test]
    fn test_covers_superset() {
        let c = Classroom::new("r1", "A-101")
            .with_location("Zagreb")
            .with_location("Online");

        assert!(c.covers(&["Zagreb".into()]));
        assert!(c.covers(&["Zagreb".into(), "Online".into()]));
        assert!(!c.covers(&["Dubrovnik".into()]));
    }

    #[test]
    fn test_suits_lab_rule() {
        let lab_course = Course::new("c1", "Chemistry").with_lab();
        let plain_course = Course::new("c2", "History");
        let section = Section::new("s1", "c1", "l1").with_location("Zagreb");

        let lab_room = Classroom::new("r1", "Lab 1").with_lab().with_location("Zagreb");
        let plain_room = Classroom::new("r2", "A-101").with_location("Zagreb");

        assert!(lab_room.suits(&lab_course, &section));
        assert!(!plain_room.suits(&lab_course, &section));
        // A non-lab course may use any room, lab or not
        assert!(lab_room.suits(&plain_course, &section));
        assert!(plain_room.suits(&plain_course, &section));
    }

    #[test]
    fn test_suits_location_rule() {
        let course = Course::new("c1", "History");
        let section = Section::new("s1", "c1", "l1").with_location("Dubrovnik");
        let room = Classroom::new("r1", "A-101").with_location("Zagreb");

        assert!(!room.suits(&course, &section));
    }
}
