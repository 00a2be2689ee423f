//! Working-hour intervals and containment.
//!
//! Intervals are half-open `[from, to)`. A `to` earlier than `from` marks an
//! interval running past midnight into the next day; the past-midnight slice
//! belongs to the next day and is synthesized by [`midnight_spill`].

use serde::{Deserialize, Serialize};

use crate::time::{TimeOfDay, MINUTES_PER_DAY};

/// A single working interval within one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub from: TimeOfDay,
    pub to: TimeOfDay,
}

impl Interval {
    pub fn new(from: TimeOfDay, to: TimeOfDay) -> Self {
        Self { from, to }
    }

    /// True when the interval continues past midnight into the next day.
    pub fn is_overnight(&self) -> bool {
        self.to < self.from
    }

    /// Half-open containment: `from <= time < to`.
    ///
    /// When `to` does not lie after `from` it is pushed past midnight
    /// (+24h) first. The probe time itself is never extended, so the
    /// past-midnight tail does not contain early-morning times; the next
    /// day's [`midnight_spill`] covers those.
    pub fn contains(&self, time: TimeOfDay) -> bool {
        let to = if self.to > self.from {
            self.to.0
        } else {
            self.to.0 + MINUTES_PER_DAY
        };
        self.from.0 <= time.0 && time.0 < to
    }
}

/// First interval containing `time`, scanning in list order.
pub fn find_interval(intervals: &[Interval], time: TimeOfDay) -> Option<&Interval> {
    intervals.iter().find(|interval| interval.contains(time))
}

/// The slice of a day's schedule that spills past midnight.
///
/// Scans `intervals` (the previous day's list) for overnight entries and
/// returns `{00:00, to}` for the last one, if any.
pub fn midnight_spill(intervals: &[Interval]) -> Option<Interval> {
    intervals
        .iter()
        .rev()
        .find(|interval| interval.is_overnight())
        .map(|interval| Interval::new(TimeOfDay::MIDNIGHT, interval.to))
}
