//! Weekly course timetabling core.
//!
//! Assigns course lectures to (day, time slot, classroom) triples subject to
//! lecturer availability, classroom suitability, and no-double-booking
//! constraints, and answers "where else could this lecture go" queries
//! against an existing schedule.
//!
//! # Modules
//!
//! - **`timegrid`**: the canonical 08:00–21:00 half-hour grid (`TimeOfDay`,
//!   `Weekday`, `TimeWindow`, slot indexing)
//! - **`models`**: catalog types (`Course`, `Section`, `Lecturer`,
//!   `Classroom`), `PlacedLecture`, and the indexed `Timetable`
//! - **`scheduler`**: `GreedyGenerator` and `alternative_slots`
//! - **`validation`**: structural catalog checks
//!
//! # Design
//!
//! The generator is a deterministic greedy first-fit heuristic, not a
//! constraint solver: courses claim slots in priority order (credits, then
//! lab requirement, then year level) and each section walks its lecturer's
//! availability windows first-fit. Sections that cannot be fully placed are
//! reported in the generation outcome, never surfaced as errors. Both
//! routines are pure functions of their catalog inputs; re-running them on
//! the same input yields the same schedule.
//!
//! # Reference
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"

pub mod models;
pub mod scheduler;
pub mod timegrid;
pub mod validation;
