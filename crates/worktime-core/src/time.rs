//! Time-of-day representation.
//!
//! Times are integer minutes since midnight rather than wall-clock strings,
//! so interval checks and countdowns are plain integer arithmetic. The wire
//! format still reads and writes `"HH:MM"` text.

use std::fmt;
use std::str::FromStr;

use chrono::Timelike;
use serde::{Deserialize, Serialize};

use crate::error::TimeParseError;

/// Minutes in a full day.
pub(crate) const MINUTES_PER_DAY: u16 = 24 * 60;

/// A time of day as minutes since midnight, `0..=1440`.
///
/// `1440` is the end-of-day value, rendered `"24:00"`. It appears as an
/// interval endpoint (a day worked to the very end) but never as a probe
/// time coming from a real clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(pub(crate) u16);

impl TimeOfDay {
    /// Start of the day, `"00:00"`.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    /// End of the day, `"24:00"`.
    pub const END_OF_DAY: TimeOfDay = TimeOfDay(MINUTES_PER_DAY);

    /// Build from an hour and minute pair.
    ///
    /// Hours run 0..=24; hour 24 is only valid with minute 0.
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, TimeParseError> {
        if hour > 24 {
            return Err(TimeParseError::HourOutOfRange(hour));
        }
        if minute > 59 {
            return Err(TimeParseError::MinuteOutOfRange(minute));
        }
        if hour == 24 && minute != 0 {
            return Err(TimeParseError::PastEndOfDay(minute));
        }
        Ok(TimeOfDay((hour * 60 + minute) as u16))
    }

    /// Hour component, 0..=24.
    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    /// Minute component, 0..=59.
    pub fn minute(self) -> u16 {
        self.0 % 60
    }

    /// Total minutes since midnight.
    pub fn minutes_from_midnight(self) -> u16 {
        self.0
    }

    /// Signed minute count from `self` to a time lying `day_offset` days
    /// ahead. Negative when the target is earlier on the same day.
    pub fn minutes_until(self, later: TimeOfDay, day_offset: u8) -> i64 {
        i64::from(later.0) - i64::from(self.0) + i64::from(day_offset) * i64::from(MINUTES_PER_DAY)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || TimeParseError::Malformed(s.to_string());
        let (hh, mm) = s.split_once(':').ok_or_else(malformed)?;
        if hh.len() != 2 || mm.len() != 2 {
            return Err(malformed());
        }
        if !hh.bytes().all(|b| b.is_ascii_digit()) || !mm.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        let hour = hh.parse().map_err(|_| malformed())?;
        let minute = mm.parse().map_err(|_| malformed())?;
        Self::from_hm(hour, minute)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = TimeParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}

impl From<chrono::NaiveTime> for TimeOfDay {
    /// Truncates seconds; a clock reading is never `"24:00"`.
    fn from(time: chrono::NaiveTime) -> Self {
        TimeOfDay((time.hour() * 60 + time.minute()) as u16)
    }
}
