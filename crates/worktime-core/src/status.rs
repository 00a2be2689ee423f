//! Status forecasting: what the venue does next and when.
//!
//! The forecaster reads the next two schedule events and renders them as a
//! typed status. Rules:
//!
//! - Around-the-clock schedules are simply `Opened`.
//! - Fewer than two upcoming events means the schedule has nothing to say.
//! - When the next event is a closing, a countdown at or beyond the caller's
//!   threshold stays `Opened`; otherwise the closing is announced, typed
//!   with the break it leads into when the reopening falls on the same day.
//! - When the next event is an opening on the same day, the countdown obeys
//!   the same threshold (beyond it the absolute time is reported instead),
//!   typed with the break the venue is currently in.
//! - Openings further out collapse to tomorrow / day-after-tomorrow /
//!   at-day forms; "day after tomorrow" is suppressed on weekend days.

use serde::{Deserialize, Serialize};

use crate::breaks::{break_between, classify_break, BreakKind};
use crate::event::EventKind;
use crate::interval::find_interval;
use crate::schedule::{WeekSchedule, WeekTime, Weekday};
use crate::time::TimeOfDay;

/// What the venue is about to do, seen from the observation instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Status {
    /// Open, with no closing worth announcing yet.
    Opened,
    /// Closing within a minute.
    WillCloseInMinute,
    /// Closing within a minute for a same-day break.
    WillCloseInMinuteForBreak { break_kind: BreakKind },
    /// Closing in `minutes_to` minutes.
    WillCloseInTime { minutes_to: i64 },
    /// Closing in `minutes_to` minutes for a same-day break.
    WillCloseInTimeForBreak {
        minutes_to: i64,
        break_kind: BreakKind,
    },
    /// Opening today at `time`, too far off for a countdown.
    WillOpenAtTime { time: TimeOfDay },
    /// As [`Status::WillOpenAtTime`], while currently on a break.
    WillOpenAtTimeFromBreak {
        time: TimeOfDay,
        break_kind: BreakKind,
    },
    /// Opening within a minute.
    WillOpenInMinute,
    /// Opening within a minute, ending the current break.
    WillOpenInMinuteFromBreak { break_kind: BreakKind },
    /// Opening in `minutes_to` minutes.
    WillOpenInTime { minutes_to: i64 },
    /// Opening in `minutes_to` minutes, ending the current break.
    WillOpenInTimeFromBreak {
        minutes_to: i64,
        break_kind: BreakKind,
    },
    /// Opening tomorrow at `time`.
    WillOpenTomorrowAtTime { time: TimeOfDay },
    /// Opening the day after tomorrow at `time`.
    WillOpenDayAfterTomorrowAtTime { time: TimeOfDay },
    /// Opening on `day` at `time`.
    WillOpenAtDayAtTime { day: Weekday, time: TimeOfDay },
}

impl WeekSchedule {
    /// Forecast the next state change as seen from `now`.
    ///
    /// `forecast_threshold` caps how many minutes ahead a countdown is worth
    /// announcing: at or beyond it an open venue stays [`Status::Opened`]
    /// and a closed one reports the absolute reopening time. `weekends`
    /// lists the days on which the day-after-tomorrow phrasing is
    /// suppressed in favor of naming the weekday.
    ///
    /// Returns `None` when the schedule yields fewer than two upcoming
    /// events, which only an interval-free schedule does.
    pub fn status(
        &self,
        now: &WeekTime,
        forecast_threshold: i64,
        weekends: &[Weekday],
    ) -> Option<Status> {
        if self.is_24x7() {
            return Some(Status::Opened);
        }

        let events = self.next_events(now);
        let (next, overnext) = match events.as_slice() {
            [next, overnext] => (*next, *overnext),
            _ => return None,
        };
        let minutes_to = now.time.minutes_until(next.time, next.day_offset);

        if next.kind == EventKind::Close {
            // Currently open.
            if minutes_to >= forecast_threshold {
                return Some(Status::Opened);
            }
            let break_kind = break_between(&next, &overnext);
            if minutes_to <= 1 {
                return Some(match break_kind {
                    Some(break_kind) => Status::WillCloseInMinuteForBreak { break_kind },
                    None => Status::WillCloseInMinute,
                });
            }
            return Some(match break_kind {
                Some(break_kind) => Status::WillCloseInTimeForBreak {
                    minutes_to,
                    break_kind,
                },
                None => Status::WillCloseInTime { minutes_to },
            });
        }

        // Currently closed; the next event is an opening.
        let days = next.day_offset;
        if days == 0 {
            let breaks = self.today_break_hours(now);
            let break_kind = find_interval(&breaks, now.time).map(classify_break);
            if minutes_to >= forecast_threshold {
                return Some(match break_kind {
                    Some(break_kind) => Status::WillOpenAtTimeFromBreak {
                        time: next.time,
                        break_kind,
                    },
                    None => Status::WillOpenAtTime { time: next.time },
                });
            }
            if minutes_to <= 1 {
                return Some(match break_kind {
                    Some(break_kind) => Status::WillOpenInMinuteFromBreak { break_kind },
                    None => Status::WillOpenInMinute,
                });
            }
            return Some(match break_kind {
                Some(break_kind) => Status::WillOpenInTimeFromBreak {
                    minutes_to,
                    break_kind,
                },
                None => Status::WillOpenInTime { minutes_to },
            });
        }
        if days == 1 {
            return Some(Status::WillOpenTomorrowAtTime { time: next.time });
        }
        if days == 2 && !weekends.contains(&now.day) {
            return Some(Status::WillOpenDayAfterTomorrowAtTime { time: next.time });
        }
        Some(Status::WillOpenAtDayAtTime {
            day: now.day.add_days(usize::from(days)),
            time: next.time,
        })
    }
}
