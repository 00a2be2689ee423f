//! Break detection and classification.
//!
//! Breaks are the gaps between consecutive working intervals of a single
//! day. A gap sitting inside the midday window classifies as lunch;
//! everything else is a rest break.

use serde::{Deserialize, Serialize};

use crate::event::Event;
use crate::interval::Interval;
use crate::schedule::{WeekSchedule, WeekTime};
use crate::time::{TimeOfDay, MINUTES_PER_DAY};

const LUNCH_WINDOW_START: TimeOfDay = TimeOfDay(12 * 60);
const LUNCH_WINDOW_END: TimeOfDay = TimeOfDay(16 * 60);

/// Kind of a break between working intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakKind {
    Lunch,
    Rest,
}

/// Gaps between consecutive working intervals, in order.
///
/// A list with fewer than two intervals has no breaks.
pub fn break_hours(working_hours: &[Interval]) -> Vec<Interval> {
    working_hours
        .windows(2)
        .map(|pair| Interval::new(pair[0].to, pair[1].from))
        .collect()
}

/// Classify a break gap.
///
/// Lunch means the whole gap sits inside 12:00-16:00. A gap ending exactly
/// at `00:00` is read as ending at `24:00` and therefore never lunch.
pub fn classify_break(gap: &Interval) -> BreakKind {
    let end = if gap.to == TimeOfDay::MIDNIGHT {
        MINUTES_PER_DAY
    } else {
        gap.to.0
    };
    if gap.from >= LUNCH_WINDOW_START && end <= LUNCH_WINDOW_END.0 {
        BreakKind::Lunch
    } else {
        BreakKind::Rest
    }
}

/// Classify the closed period between a closing event and the following
/// opening event.
///
/// Returns `None` when the two events fall on different days: a closure
/// spanning midnight is not a typed break.
pub fn break_between(close: &Event, open: &Event) -> Option<BreakKind> {
    if close.day_offset != open.day_offset {
        return None;
    }
    Some(classify_break(&Interval::new(close.time, open.time)))
}

impl WeekSchedule {
    /// Break gaps in today's own working hours.
    ///
    /// Works on the day's raw interval list; a previous day's overnight
    /// spill never shows up as an early-morning break.
    pub fn today_break_hours(&self, now: &WeekTime) -> Vec<Interval> {
        self.day(now.day)
            .map(|day| break_hours(&day.working_hours))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventKind;
    use crate::schedule::{DaySchedule, Weekday};

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    fn interval(from: &str, to: &str) -> Interval {
        Interval::new(t(from), t(to))
    }

    fn event(kind: EventKind, day_offset: u8, time: &str) -> Event {
        Event {
            kind,
            time: t(time),
            day_offset,
        }
    }

    #[test]
    fn test_break_hours_are_the_gaps() {
        let hours = [
            interval("08:00", "13:00"),
            interval("14:00", "17:00"),
            interval("18:00", "22:00"),
        ];
        assert_eq!(
            break_hours(&hours),
            vec![interval("13:00", "14:00"), interval("17:00", "18:00")]
        );
    }

    #[test]
    fn test_short_lists_have_no_breaks() {
        assert!(break_hours(&[]).is_empty());
        assert!(break_hours(&[interval("08:00", "13:00")]).is_empty());
    }

    #[test]
    fn test_midday_gap_is_lunch() {
        assert_eq!(classify_break(&interval("13:00", "14:00")), BreakKind::Lunch);
        assert_eq!(classify_break(&interval("12:00", "16:00")), BreakKind::Lunch);
    }

    #[test]
    fn test_gap_outside_midday_window_is_rest() {
        assert_eq!(classify_break(&interval("11:00", "11:01")), BreakKind::Rest);
        assert_eq!(classify_break(&interval("11:59", "14:00")), BreakKind::Rest);
        assert_eq!(classify_break(&interval("15:00", "16:01")), BreakKind::Rest);
    }

    #[test]
    fn test_gap_ending_at_midnight_is_rest() {
        assert_eq!(classify_break(&interval("23:00", "00:00")), BreakKind::Rest);
        assert_eq!(classify_break(&interval("12:00", "00:00")), BreakKind::Rest);
    }

    #[test]
    fn test_break_between_same_day_events() {
        let close = event(EventKind::Close, 0, "13:00");
        let open = event(EventKind::Open, 0, "14:00");
        assert_eq!(break_between(&close, &open), Some(BreakKind::Lunch));
    }

    #[test]
    fn test_break_between_different_days_is_untyped() {
        let close = event(EventKind::Close, 0, "17:00");
        let open = event(EventKind::Open, 1, "08:00");
        assert_eq!(break_between(&close, &open), None);
    }

    #[test]
    fn test_today_break_hours_use_the_raw_day_list() {
        let schedule = WeekSchedule::new()
            .with_day(
                Weekday::Sun,
                DaySchedule::new(vec![interval("06:00", "07:00"), interval("23:00", "00:50")]),
            )
            .with_day(
                Weekday::Mon,
                DaySchedule::new(vec![interval("08:00", "13:00"), interval("14:00", "17:15")]),
            );
        let monday = WeekTime::new(Weekday::Mon, t("09:00"));
        // Sunday's overnight spill does not open a phantom 00:50-08:00 break.
        assert_eq!(
            schedule.today_break_hours(&monday),
            vec![interval("13:00", "14:00")]
        );
        let sunday = WeekTime::new(Weekday::Sun, t("09:00"));
        assert_eq!(
            schedule.today_break_hours(&sunday),
            vec![interval("07:00", "23:00")]
        );
        let tuesday = WeekTime::new(Weekday::Tue, t("09:00"));
        assert!(schedule.today_break_hours(&tuesday).is_empty());
    }
}
