//! The weekly schedule model and day-level queries.
//!
//! A schedule holds up to seven day entries in fixed Monday-first order;
//! days absent from the schedule are closed days. The JSON wire format uses
//! the literal `"Mon".."Sun"` keys plus the optional `"is24x7"` and
//! `"comment"` authoring fields.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::error::WeekdayParseError;
use crate::interval::{find_interval, midnight_spill, Interval};
use crate::time::TimeOfDay;

/// Day of the week, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    /// All days in week order, used for iteration and offset arithmetic.
    pub const ALL: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    /// Position in the week, 0 for Monday.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Day at `index`, wrapping modulo the week length.
    pub fn from_index(index: usize) -> Weekday {
        Self::ALL[index % 7]
    }

    /// The day `offset` days later, wrapping around the week.
    pub fn add_days(self, offset: usize) -> Weekday {
        Self::from_index(self.index() + offset)
    }

    /// The day before.
    pub fn previous(self) -> Weekday {
        self.add_days(6)
    }

    /// The schedule key, `"Mon".."Sun"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
            Weekday::Sun => "Sun",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = WeekdayParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weekday::ALL
            .iter()
            .copied()
            .find(|day| day.as_str() == s)
            .ok_or_else(|| WeekdayParseError(s.to_string()))
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        Weekday::from_index(day.num_days_from_monday() as usize)
    }
}

impl From<Weekday> for chrono::Weekday {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Mon => chrono::Weekday::Mon,
            Weekday::Tue => chrono::Weekday::Tue,
            Weekday::Wed => chrono::Weekday::Wed,
            Weekday::Thu => chrono::Weekday::Thu,
            Weekday::Fri => chrono::Weekday::Fri,
            Weekday::Sat => chrono::Weekday::Sat,
            Weekday::Sun => chrono::Weekday::Sun,
        }
    }
}

/// An observation instant: weekday plus time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekTime {
    pub day: Weekday,
    pub time: TimeOfDay,
}

impl WeekTime {
    pub fn new(day: Weekday, time: TimeOfDay) -> Self {
        Self { day, time }
    }
}

impl From<NaiveDateTime> for WeekTime {
    fn from(datetime: NaiveDateTime) -> Self {
        WeekTime {
            day: datetime.weekday().into(),
            time: datetime.time().into(),
        }
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for WeekTime {
    /// Reads the wall clock of the value's own time zone.
    fn from(datetime: DateTime<Tz>) -> Self {
        datetime.naive_local().into()
    }
}

/// One day's working hours.
///
/// Intervals are assumed sorted ascending and non-overlapping, with at most
/// the last one running past midnight. Nothing here validates that.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub working_hours: Vec<Interval>,
}

impl DaySchedule {
    pub fn new(working_hours: Vec<Interval>) -> Self {
        Self { working_hours }
    }
}

/// A weekly opening-hours schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WeekScheduleWire", into = "WeekScheduleWire")]
pub struct WeekSchedule {
    days: [Option<DaySchedule>; 7],
    /// Authoring hint from the wire format. Queries never consult it;
    /// around-the-clock operation is always derived from the intervals.
    pub is_24x7_flag: Option<bool>,
    /// Free-form note carried through serialization untouched.
    pub comment: Option<String>,
}

impl WeekSchedule {
    /// An empty schedule: closed all week.
    pub fn new() -> Self {
        Self::default()
    }

    /// The entry for `day`, if the venue works that day at all.
    pub fn day(&self, day: Weekday) -> Option<&DaySchedule> {
        self.days[day.index()].as_ref()
    }

    /// Set or replace one day's entry.
    pub fn set_day(&mut self, day: Weekday, schedule: DaySchedule) {
        self.days[day.index()] = Some(schedule);
    }

    /// Builder-style [`set_day`](Self::set_day).
    pub fn with_day(mut self, day: Weekday, schedule: DaySchedule) -> Self {
        self.set_day(day, schedule);
        self
    }

    /// Working hours for `day` including the slice of the previous day's
    /// overnight interval that spills past midnight.
    ///
    /// The spill is synthesized on the fly and never written back.
    pub fn effective_working_hours(&self, day: Weekday) -> Vec<Interval> {
        let mut hours = Vec::new();
        let spill = self
            .day(day.previous())
            .and_then(|yesterday| midnight_spill(&yesterday.working_hours));
        if let Some(spill) = spill {
            hours.push(spill);
        }
        if let Some(today) = self.day(day) {
            hours.extend_from_slice(&today.working_hours);
        }
        hours
    }

    /// True when every day of the week is worked around the clock.
    ///
    /// Each day must be present with `{00:00, 24:00}` as its first interval;
    /// later intervals are ignored, as is the `is_24x7_flag` hint.
    pub fn is_24x7(&self) -> bool {
        Weekday::ALL.iter().all(|day| {
            self.day(*day)
                .and_then(|schedule| schedule.working_hours.first())
                .map_or(false, |first| {
                    first.from == TimeOfDay::MIDNIGHT && first.to == TimeOfDay::END_OF_DAY
                })
        })
    }

    /// True when all seven days carry identical hours. Absent days count as
    /// matching absent days, so an empty schedule is trivially every-day.
    pub fn is_every_day(&self) -> bool {
        let monday = &self.days[0];
        self.days[1..].iter().all(|day| day == monday)
    }

    /// Whether the venue is open at `now`.
    pub fn is_open(&self, now: &WeekTime) -> bool {
        if self.is_24x7() {
            return true;
        }
        find_interval(&self.effective_working_hours(now.day), now.time).is_some()
    }

    /// Today's working summary for display.
    ///
    /// Carries the day's raw intervals; overnight entries stay as written.
    pub fn today_worktime(&self, now: &WeekTime) -> WorkTime {
        if self.is_24x7() {
            return WorkTime::TwentyFourSeven;
        }
        let today = match self.day(now.day) {
            Some(day) => day,
            None => return WorkTime::NotWorking,
        };
        let intervals = today.working_hours.clone();
        if self.is_every_day() {
            WorkTime::Everyday { intervals }
        } else {
            WorkTime::Today { intervals }
        }
    }
}

/// Summary of today's working hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WorkTime {
    /// Open around the clock, all week.
    #[serde(rename = "24x7")]
    TwentyFourSeven,
    /// Same hours every day.
    Everyday { intervals: Vec<Interval> },
    /// Hours specific to today.
    Today { intervals: Vec<Interval> },
    /// Closed today.
    NotWorking,
}

/// JSON shape: optional day keys plus the authoring fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct WeekScheduleWire {
    #[serde(rename = "Mon", skip_serializing_if = "Option::is_none")]
    mon: Option<DaySchedule>,
    #[serde(rename = "Tue", skip_serializing_if = "Option::is_none")]
    tue: Option<DaySchedule>,
    #[serde(rename = "Wed", skip_serializing_if = "Option::is_none")]
    wed: Option<DaySchedule>,
    #[serde(rename = "Thu", skip_serializing_if = "Option::is_none")]
    thu: Option<DaySchedule>,
    #[serde(rename = "Fri", skip_serializing_if = "Option::is_none")]
    fri: Option<DaySchedule>,
    #[serde(rename = "Sat", skip_serializing_if = "Option::is_none")]
    sat: Option<DaySchedule>,
    #[serde(rename = "Sun", skip_serializing_if = "Option::is_none")]
    sun: Option<DaySchedule>,
    #[serde(rename = "is24x7", skip_serializing_if = "Option::is_none")]
    is_24x7: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
}

impl From<WeekScheduleWire> for WeekSchedule {
    fn from(wire: WeekScheduleWire) -> Self {
        WeekSchedule {
            days: [
                wire.mon, wire.tue, wire.wed, wire.thu, wire.fri, wire.sat, wire.sun,
            ],
            is_24x7_flag: wire.is_24x7,
            comment: wire.comment,
        }
    }
}

impl From<WeekSchedule> for WeekScheduleWire {
    fn from(schedule: WeekSchedule) -> Self {
        let [mon, tue, wed, thu, fri, sat, sun] = schedule.days;
        WeekScheduleWire {
            mon,
            tue,
            wed,
            thu,
            fri,
            sat,
            sun,
            is_24x7: schedule.is_24x7_flag,
            comment: schedule.comment,
        }
    }
}
