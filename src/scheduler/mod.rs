//! Greedy schedule generation and alternative-slot search.
//!
//! # Algorithm
//!
//! [`GreedyGenerator`] builds the weekly schedule with a deterministic
//! first-fit heuristic: courses are ordered by priority (credits, lab
//! requirement, year level) so higher-priority courses claim slots first,
//! and each section walks its lecturer's availability windows in fixed
//! lecture-length steps, placing into the first classroom that passes the
//! suitability and booking checks. It is fast and conflict-free, not
//! optimal or complete.
//!
//! [`alternative_slots`] answers "where else could this lecture go" for a
//! single placed lecture, keeping its classroom and duration.
//!
//! # Reference
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod altslot;
mod greedy;

pub use altslot::alternative_slots;
pub use greedy::{
    GenerationError, GenerationReport, GreedyGenerator, SectionOutcome, SitePair, SkipReason,
};
