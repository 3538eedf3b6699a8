//! Structural catalog validation.
//!
//! Checks the invariants the generator assumes rather than re-verifying:
//! - No duplicate IDs within any catalog
//! - Every section references an existing course
//! - Every course's meeting duration is well-formed
//!   (`lecture_amount` non-zero and dividing `boxes` evenly)
//! - Every section has a non-empty required-location set
//! - Every lecturer availability window has `start < end`
//!
//! A section whose lecturer is missing from the catalog is deliberately
//! *not* an error here: the generator skips such sections at run time and
//! reports them in its outcome.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::Catalogs;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities in the same catalog share an ID.
    DuplicateId,
    /// A section references a course that doesn't exist.
    DanglingCourseRef,
    /// A course's boxes/lecture_amount pair yields no whole meeting length.
    MalformedDuration,
    /// A section has no required locations.
    EmptyLocationSet,
    /// A lecturer availability window does not satisfy `start < end`.
    InvalidWindow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the four catalogs before a generation run.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalogs(catalogs: &Catalogs) -> ValidationResult {
    let mut errors = Vec::new();

    let mut course_ids = HashSet::new();
    for course in &catalogs.courses {
        if !course_ids.insert(course.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate course ID: {}", course.id),
            ));
        }
        if course.lecture_amount == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::MalformedDuration,
                format!("Course '{}' has a zero lecture amount", course.id),
            ));
        } else if course.boxes % course.lecture_amount != 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::MalformedDuration,
                format!(
                    "Course '{}': {} boxes do not split evenly into {} lectures",
                    course.id, course.boxes, course.lecture_amount
                ),
            ));
        }
    }

    let mut section_ids = HashSet::new();
    for section in &catalogs.sections {
        if !section_ids.insert(section.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate section ID: {}", section.id),
            ));
        }
        if !course_ids.contains(section.course_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DanglingCourseRef,
                format!(
                    "Section '{}' references unknown course '{}'",
                    section.id, section.course_id
                ),
            ));
        }
        if section.locations.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyLocationSet,
                format!("Section '{}' has no required locations", section.id),
            ));
        }
    }

    let mut lecturer_ids = HashSet::new();
    for lecturer in &catalogs.lecturers {
        if !lecturer_ids.insert(lecturer.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate lecturer ID: {}", lecturer.id),
            ));
        }
        for (day, windows) in &lecturer.availability {
            for window in windows {
                if window.start >= window.end {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::InvalidWindow,
                        format!(
                            "Lecturer '{}' has an empty or inverted window on {:?} ({}–{})",
                            lecturer.id, day, window.start, window.end
                        ),
                    ));
                }
            }
        }
    }

    let mut classroom_ids = HashSet::new();
    for classroom in &catalogs.classrooms {
        if !classroom_ids.insert(classroom.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate classroom ID: {}", classroom.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
