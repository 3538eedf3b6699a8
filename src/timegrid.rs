//! The canonical weekly time grid.
//!
//! The teaching week is discretized into fixed 30-minute slots between
//! 08:00 and 21:00 inclusive, 27 slot labels per day. Every time handled
//! by the placement engine and the alternative-slot finder is a member of
//! this grid, and every duration is a whole number of slots.
//!
//! # Time Model
//!
//! Times are stored as minutes since midnight ([`TimeOfDay`]) and rendered
//! as zero-padded `"HH:MM"` labels only at the interface boundary, so
//! lexicographic label order always matches numeric order. Intervals are
//! half-open `[start, end)`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Length of one grid slot in minutes.
pub const SLOT_MINUTES: u16 = 30;

/// First slot label of the teaching day (08:00).
pub const GRID_START: TimeOfDay = TimeOfDay::from_minutes(8 * 60);

/// Last slot label of the teaching day (21:00).
pub const GRID_END: TimeOfDay = TimeOfDay::from_minutes(21 * 60);

/// Number of slot labels from [`GRID_START`] to [`GRID_END`] inclusive.
pub const SLOT_COUNT: usize = 27;

/// A time of day in minutes since midnight.
///
/// Serializes as a zero-padded `"HH:MM"` label. Values past 24:00 are
/// representable (duration arithmetic may briefly exceed the day) but the
/// grid never produces them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Creates a time from minutes since midnight.
    pub const fn from_minutes(minutes: u16) -> Self {
        Self(minutes)
    }

    /// Creates a time from an hour/minute pair.
    pub fn from_hm(hours: u16, minutes: u16) -> Self {
        Self(hours * 60 + minutes)
    }

    /// Minutes since midnight.
    #[inline]
    pub const fn minutes(self) -> u16 {
        self.0
    }

    /// Adds a signed minute offset, carrying hours.
    ///
    /// Returns `None` when the result would be negative or out of range;
    /// the grid walk treats that as window exhaustion.
    pub fn add_minutes(self, delta: i32) -> Option<Self> {
        u16::try_from(i32::from(self.0) + delta).ok().map(Self)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

/// Error for a label that is not a zero-padded `"HH:MM"` time of day.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid time of day label: {0:?}")]
pub struct ParseTimeError(String);

impl FromStr for TimeOfDay {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseTimeError(s.to_string());
        let (h, m) = s.split_once(':').ok_or_else(err)?;
        if h.len() != 2 || m.len() != 2 {
            return Err(err());
        }
        let hours: u16 = h.parse().map_err(|_| err())?;
        let minutes: u16 = m.parse().map_err(|_| err())?;
        if hours >= 24 || minutes >= 60 {
            return Err(err());
        }
        Ok(Self::from_hm(hours, minutes))
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ParseTimeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(t: TimeOfDay) -> Self {
        t.to_string()
    }
}

/// Days of the teaching week, in canonical scan order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All days in canonical order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];
}

/// A half-open time interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Interval start (inclusive).
    pub start: TimeOfDay,
    /// Interval end (exclusive).
    pub end: TimeOfDay,
}

impl TimeWindow {
    /// Creates a new time window.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    /// Duration of this window in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes().saturating_sub(self.start.minutes())
    }

    /// Half-open overlap test: `[s1,e1)` and `[s2,e2)` overlap iff
    /// `s1 < e2 && s2 < e1`.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether `other` lies entirely within this window.
    pub fn encloses(&self, other: &Self) -> bool {
        other.start >= self.start && other.end <= self.end
    }
}

/// Index of a time label in the canonical slot sequence.
///
/// `None` for labels off the grid or not on a 30-minute boundary.
pub fn slot_index(time: TimeOfDay) -> Option<usize> {
    if time < GRID_START || time > GRID_END {
        return None;
    }
    let offset = time.minutes() - GRID_START.minutes();
    if offset % SLOT_MINUTES != 0 {
        return None;
    }
    Some(usize::from(offset / SLOT_MINUTES))
}

/// Time label at a slot index, clamped to the last slot.
pub fn time_at_index(index: usize) -> TimeOfDay {
    let clamped = index.min(SLOT_COUNT - 1) as u16;
    TimeOfDay::from_minutes(GRID_START.minutes() + clamped * SLOT_MINUTES)
}

/// Iterates every slot label from [`GRID_START`] to [`GRID_END`].
pub fn slots() -> impl Iterator<Item = TimeOfDay> {
    (0..SLOT_COUNT).map(time_at_index)
}
