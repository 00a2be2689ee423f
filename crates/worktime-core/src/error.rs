//! Error types for worktime-core.
//!
//! Parsing the wire text is the only fallible surface; schedule queries
//! assume well-formed input and never validate it.

use thiserror::Error;

/// Errors from parsing an `"HH:MM"` time of day.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeParseError {
    /// Input is not two digits, a colon, two digits
    #[error("time must be \"HH:MM\", got {0:?}")]
    Malformed(String),

    /// Hour outside 0..=24
    #[error("hour {0} is out of range (0-24)")]
    HourOutOfRange(u32),

    /// Minute outside 0..=59
    #[error("minute {0} is out of range (0-59)")]
    MinuteOutOfRange(u32),

    /// Hour 24 with a nonzero minute
    #[error("\"24:{0:02}\" is past the end of the day")]
    PastEndOfDay(u32),
}

/// Error from parsing a weekday key.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown weekday {0:?}, expected Mon/Tue/Wed/Thu/Fri/Sat/Sun")]
pub struct WeekdayParseError(pub String);
