//! Opening and closing events derived from the weekly schedule.
//!
//! Each working interval splits into an `Open` and a `Close` event tagged
//! with a day offset from the observation day. The status forecaster only
//! ever needs the next two events, so the stream is built by a bounded scan
//! that stops as soon as it has them.

use serde::{Deserialize, Serialize};

use crate::interval::{midnight_spill, Interval};
use crate::schedule::{WeekSchedule, WeekTime};
use crate::time::TimeOfDay;

/// How many upcoming events [`WeekSchedule::next_events`] returns at most.
pub const NEXT_EVENTS_LIMIT: usize = 2;

/// Kind of a schedule state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Open,
    Close,
}

/// A scheduled state change, `day_offset` days after the observation day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub kind: EventKind,
    pub time: TimeOfDay,
    /// Days forward from the observation day; 0 is the same day.
    pub day_offset: u8,
}

impl Event {
    /// Whether this event lies strictly after `now`. An event at exactly
    /// `now.time` on day 0 is not upcoming.
    pub fn is_after(&self, now: &WeekTime) -> bool {
        self.day_offset > 0 || self.time > now.time
    }
}

/// Split an interval into its opening and closing events.
///
/// An overnight interval closes on the following day, so its `Close` event
/// carries `day_offset + 1`, saturating at `u8::MAX`.
pub fn split_interval(interval: &Interval, day_offset: u8) -> [Event; 2] {
    let close_offset = if interval.is_overnight() {
        day_offset.saturating_add(1)
    } else {
        day_offset
    };
    [
        Event {
            kind: EventKind::Open,
            time: interval.from,
            day_offset,
        },
        Event {
            kind: EventKind::Close,
            time: interval.to,
            day_offset: close_offset,
        },
    ]
}

impl WeekSchedule {
    /// The next schedule events after `now`, at most two, in stream order.
    ///
    /// The stream starts with the closing half of yesterday's overnight
    /// interval when one spills into today, then walks today through
    /// today + 7, each day's intervals in order. The window repeats today's
    /// weekday at the end, so a venue whose only events already passed today
    /// is still caught on the wrap. The scan stops as soon as two upcoming
    /// events are found.
    pub fn next_events(&self, now: &WeekTime) -> Vec<Event> {
        let mut events = Vec::with_capacity(NEXT_EVENTS_LIMIT);

        let spill = self
            .day(now.day.previous())
            .and_then(|yesterday| midnight_spill(&yesterday.working_hours));
        if let Some(spill) = spill {
            // Only the closing half matters; the opening happened yesterday.
            let [_, close] = split_interval(&spill, 0);
            if close.is_after(now) {
                events.push(close);
            }
        }

        for day_offset in 0..=7u8 {
            let weekday = now.day.add_days(usize::from(day_offset));
            let day = match self.day(weekday) {
                Some(day) => day,
                None => continue,
            };
            for interval in &day.working_hours {
                for event in split_interval(interval, day_offset) {
                    if !event.is_after(now) {
                        continue;
                    }
                    events.push(event);
                    if events.len() == NEXT_EVENTS_LIMIT {
                        return events;
                    }
                }
            }
        }

        events
    }
}
