use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A candidate or booked appointment window. Half-open: `start` inclusive,
/// `end` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeSlot {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Slot of `minutes` width starting at `start`.
    pub fn from_start(start: NaiveDateTime, minutes: i64) -> Self {
        Self {
            start,
            end: start + Duration::minutes(minutes),
        }
    }

    /// Half-open overlap test: touching endpoints do not overlap.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// The slot widened by `buffer_minutes` on both sides. This is what a
    /// booking occupies: nothing else may be scheduled inside it.
    pub fn expanded(&self, buffer_minutes: i64) -> TimeSlot {
        let buffer = Duration::minutes(buffer_minutes);
        TimeSlot {
            start: self.start - buffer,
            end: self.end + buffer,
        }
    }
}
