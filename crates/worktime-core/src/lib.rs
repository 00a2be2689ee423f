//! # Worktime Core Library
//!
//! Opening-hours engine for venues with weekly schedules. Given the weekly
//! working intervals and an observation instant, it answers whether the
//! venue is open, what today's hours and breaks are, and what the next
//! state change is, as a typed status ready for rendering.
//!
//! ## Architecture
//!
//! - **Interval algebra**: half-open minute intervals with a past-midnight
//!   extension for overnight work
//! - **Day overlap**: yesterday's overnight tail is synthesized into today
//!   as a spill interval, never stored back
//! - **Event stream**: a bounded eight-day scan yielding at most the next
//!   two open/close events
//! - **Forecast**: the two events render into one of fourteen status values
//!
//! ## Key Components
//!
//! - [`WeekSchedule`]: the weekly schedule and every query on it
//! - [`WeekTime`]: an observation instant (weekday plus time of day)
//! - [`Status`]: the typed forecast returned by [`WeekSchedule::status`]
//! - [`WorkTime`]: today's hours summary for display

pub mod breaks;
pub mod error;
pub mod event;
pub mod interval;
pub mod schedule;
pub mod status;
pub mod time;

pub use breaks::{break_between, break_hours, classify_break, BreakKind};
pub use error::{TimeParseError, WeekdayParseError};
pub use event::{split_interval, Event, EventKind, NEXT_EVENTS_LIMIT};
pub use interval::{find_interval, midnight_spill, Interval};
pub use schedule::{DaySchedule, WeekSchedule, WeekTime, Weekday, WorkTime};
pub use status::Status;
pub use time::TimeOfDay;
