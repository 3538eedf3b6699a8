//! Section catalog model.

use serde::{Deserialize, Serialize};

/// One teaching group of a course.
///
/// A section belongs to exactly one course and is taught by exactly one
/// lecturer. Its location set names the sites a hosting classroom must
/// cover; a "joined" section is instead taught simultaneously at both
/// sites of the generator's configured pair, as two linked placements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Unique section identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Course this section belongs to.
    pub course_id: String,
    /// Lecturer who teaches this section.
    pub lecturer_id: String,
    /// Enrollment capacity.
    pub capacity: u32,
    /// Required locations. Must be non-empty.
    pub locations: Vec<String>,
    /// Whether the section is taught at both configured sites at once.
    pub joined: bool,
}

impl Section {
    /// Creates a section for a course and lecturer.
    pub fn new(
        id: impl Into<String>,
        course_id: impl Into<String>,
        lecturer_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            course_id: course_id.into(),
            lecturer_id: lecturer_id.into(),
            capacity: 0,
            locations: Vec::new(),
            joined: false,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the enrollment capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Adds a required location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.locations.push(location.into());
        self
    }

    /// Marks the section as joined (taught at both configured sites).
    pub fn with_joined(mut self) -> Self {
        self.joined = true;
        self
    }
}
