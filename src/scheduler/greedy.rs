//! Greedy first-fit schedule generator.
//!
//! # Algorithm
//!
//! 1. Order courses by descending credits, then lab requirement (lab
//!    courses first), then descending year level; input order breaks ties.
//! 2. For each section of each course, walk the lecturer's availability
//!    windows day by day, stepping forward one lecture length at a time.
//! 3. At each candidate start, attempt a placement; failure just advances
//!    the walk. A section stops as soon as it has `lecture_amount` placed
//!    lectures.
//!
//! Placement prefers the classroom already hosting the same course's
//! lecture ending exactly at the candidate start for the same lecturer,
//! keeping a lecturer's consecutive lectures in one room. Joined sections
//! are booked atomically at both configured sites or not at all.
//!
//! # Complexity
//! O(s · w · c) where s = sections, w = window slots per lecturer,
//! c = classrooms; bounded catalog sizes keep this trivial.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::models::{Catalogs, Classroom, Course, Lecturer, PlacedLecture, Section, Timetable};
use crate::timegrid::{TimeWindow, Weekday};
use crate::validation::{validate_catalogs, ValidationError};

/// Errors for structurally invalid generator input.
///
/// Normal negative outcomes (missing lecturer, placement failure,
/// under-scheduling) never produce an error; they appear in the
/// [`GenerationReport`] instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationError {
    /// The catalogs failed structural validation.
    #[error("invalid catalogs: {} validation error(s)", .0.len())]
    InvalidCatalogs(Vec<ValidationError>),
}

/// The two sites a joined section must be taught at simultaneously.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SitePair {
    pub first: String,
    pub second: String,
}

impl SitePair {
    /// Creates a site pair.
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }
}

/// Why a section was skipped without any placement attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The section's lecturer is not in the catalog.
    MissingLecturer,
    /// The section is joined but no site pair was configured.
    JoinedSitesUnconfigured,
}

/// Placement count for one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionOutcome {
    /// The section this outcome describes.
    pub section_id: String,
    /// Lectures requested (the course's `lecture_amount`).
    pub requested: u32,
    /// Lectures actually placed.
    pub placed: u32,
    /// Set when the section was skipped outright.
    pub skipped: Option<SkipReason>,
}

impl SectionOutcome {
    fn skipped(section: &Section, requested: u32, reason: SkipReason) -> Self {
        Self {
            section_id: section.id.clone(),
            requested,
            placed: 0,
            skipped: Some(reason),
        }
    }

    /// Whether the section reached its requested lecture count.
    pub fn fully_placed(&self) -> bool {
        self.placed == self.requested
    }
}

/// Output of one generation run.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// The produced conflict-free weekly schedule.
    pub timetable: Timetable,
    /// Per-section placement counts, in processing order.
    pub sections: Vec<SectionOutcome>,
}

impl GenerationReport {
    /// Whether every section reached its requested lecture count.
    pub fn fully_scheduled(&self) -> bool {
        self.sections.iter().all(SectionOutcome::fully_placed)
    }

    /// Sections that fell short of their requested lecture count.
    pub fn under_scheduled(&self) -> impl Iterator<Item = &SectionOutcome> + '_ {
        self.sections.iter().filter(|s| !s.fully_placed())
    }
}

/// Greedy first-fit weekly schedule generator.
///
/// A pure function of its catalog inputs: every run starts from an empty
/// timetable and identical input ordering yields an identical schedule.
///
/// # Example
///
/// ```
/// use timetable_core::models::{Catalogs, Classroom, Course, Lecturer, Section};
/// use timetable_core::scheduler::GreedyGenerator;
/// use timetable_core::timegrid::{TimeOfDay, Weekday};
///
/// let course = Course::new("c1", "Algorithms").with_boxes(4).with_lecture_amount(2);
/// let section = Section::new("s1", "c1", "l1").with_location("Zagreb");
/// let lecturer = Lecturer::new("l1", "Ada").with_window(
///     Weekday::Monday,
///     TimeOfDay::from_hm(8, 0),
///     TimeOfDay::from_hm(10, 0),
/// );
/// let classroom = Classroom::new("r1", "A-101").with_location("Zagreb");
///
/// let catalogs = Catalogs::new(vec![course], vec![section], vec![lecturer], vec![classroom]);
/// let report = GreedyGenerator::new().generate(&catalogs).unwrap();
///
/// assert_eq!(report.timetable.len(), 2);
/// assert!(report.fully_scheduled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyGenerator {
    joined_sites: Option<SitePair>,
}

impl GreedyGenerator {
    /// Creates a generator with no joined-site pair configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the site pair joined sections are taught at.
    pub fn with_joined_sites(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.joined_sites = Some(SitePair::new(first, second));
        self
    }

    /// Generates a weekly schedule from the four catalogs.
    ///
    /// Validates the catalogs first and fails on structural errors; all
    /// other negative outcomes are reported per section, never raised.
    pub fn generate(&self, catalogs: &Catalogs) -> Result<GenerationReport, GenerationError> {
        validate_catalogs(catalogs).map_err(GenerationError::InvalidCatalogs)?;

        let mut timetable = Timetable::new();
        let mut sections = Vec::new();

        for &course_idx in &course_order(&catalogs.courses) {
            let course = &catalogs.courses[course_idx];
            // Validation rules out malformed durations
            let Some(length) = course.lecture_minutes() else {
                continue;
            };
            let target = u32::from(course.lecture_amount);

            for section in catalogs.sections_of(&course.id) {
                let Some(lecturer) = catalogs.lecturer(&section.lecturer_id) else {
                    warn!(
                        section = %section.id,
                        lecturer = %section.lecturer_id,
                        "skipping section: lecturer not in catalog"
                    );
                    sections.push(SectionOutcome::skipped(
                        section,
                        target,
                        SkipReason::MissingLecturer,
                    ));
                    continue;
                };
                if section.joined && self.joined_sites.is_none() {
                    warn!(section = %section.id, "skipping joined section: no site pair configured");
                    sections.push(SectionOutcome::skipped(
                        section,
                        target,
                        SkipReason::JoinedSitesUnconfigured,
                    ));
                    continue;
                }

                let mut placed = 0u32;
                'days: for (&day, windows) in &lecturer.availability {
                    for window in windows {
                        let mut start = window.start;
                        while placed < target {
                            let Some(end) = start.add_minutes(i32::from(length)) else {
                                break;
                            };
                            if end > window.end {
                                break;
                            }
                            let span = TimeWindow::new(start, end);
                            if self.attempt(day, span, course, section, lecturer, catalogs, &mut timetable)
                            {
                                placed += 1;
                            }
                            start = end;
                        }
                        if placed == target {
                            break 'days;
                        }
                    }
                }

                if placed < target {
                    warn!(
                        section = %section.id,
                        placed,
                        requested = target,
                        "section under-scheduled"
                    );
                }
                sections.push(SectionOutcome {
                    section_id: section.id.clone(),
                    requested: target,
                    placed,
                    skipped: None,
                });
            }
        }

        Ok(GenerationReport { timetable, sections })
    }

    /// One placement attempt at (day, span). Appends one lecture (two for
    /// joined sections) on success; leaves the timetable untouched on
    /// failure.
    fn attempt(
        &self,
        day: Weekday,
        span: TimeWindow,
        course: &Course,
        section: &Section,
        lecturer: &Lecturer,
        catalogs: &Catalogs,
        timetable: &mut Timetable,
    ) -> bool {
        if !timetable.lecturer_free(&lecturer.id, day, &span)
            || !timetable.section_free(&section.id, day, &span)
        {
            return false;
        }

        if section.joined {
            return self.attempt_joined(day, span, course, section, lecturer, catalogs, timetable);
        }

        let suitable: Vec<&Classroom> = catalogs
            .classrooms
            .iter()
            .filter(|c| c.suits(course, section))
            .collect();

        // Back-to-back preference: reuse the room hosting this lecturer's
        // lecture of the same course that ends exactly at the candidate start.
        let preferred = timetable
            .lectures()
            .iter()
            .find(|placed| {
                placed.course_id == course.id
                    && placed.lecturer_id == lecturer.id
                    && placed.day == day
                    && placed.end == span.start
            })
            .map(|placed| placed.classroom_id.clone());

        let chosen = preferred
            .as_deref()
            .and_then(|id| suitable.iter().copied().find(|c| c.id == id))
            .filter(|c| timetable.classroom_free(&c.id, day, &span))
            .or_else(|| {
                suitable
                    .iter()
                    .copied()
                    .find(|c| timetable.classroom_free(&c.id, day, &span))
            });

        match chosen {
            Some(classroom) => {
                timetable.place(PlacedLecture::new(classroom, course, section, lecturer, day, span));
                true
            }
            None => false,
        }
    }

    /// Books a joined section at both configured sites, atomically.
    ///
    /// Site classrooms are matched on location only (no lab/location-set
    /// suitability filtering); two distinct rooms must be free at once.
    fn attempt_joined(
        &self,
        day: Weekday,
        span: TimeWindow,
        course: &Course,
        section: &Section,
        lecturer: &Lecturer,
        catalogs: &Catalogs,
        timetable: &mut Timetable,
    ) -> bool {
        let Some(sites) = &self.joined_sites else {
            return false;
        };

        let first = catalogs
            .classrooms
            .iter()
            .find(|c| c.at_site(&sites.first) && timetable.classroom_free(&c.id, day, &span));
        let Some(first) = first else {
            return false;
        };
        let second = catalogs.classrooms.iter().find(|c| {
            c.id != first.id && c.at_site(&sites.second) && timetable.classroom_free(&c.id, day, &span)
        });
        let Some(second) = second else {
            return false;
        };

        timetable.place(PlacedLecture::new(first, course, section, lecturer, day, span));
        timetable.place(PlacedLecture::new(second, course, section, lecturer, day, span));
        true
    }
}

/// Course indices in placement-priority order: descending credits, lab
/// courses before non-lab, then descending year level. Stable, so input
/// order breaks remaining ties.
fn course_order(courses: &[Course]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..courses.len()).collect();
    indices.sort_by(|&a, &b| {
        let (ca, cb) = (&courses[a], &courses[b]);
        cb.credits
            .cmp(&ca.credits)
            .then(cb.requires_lab.cmp(&ca.requires_lab))
            .then(cb.year_level.cmp(&ca.year_level))
    });
    indices
}
