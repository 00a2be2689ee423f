//! Property tests for schedule queries.
//!
//! Schedules are generated as sorted, non-overlapping interval lists per
//! day, which is the well-formedness the library assumes of its input.

use proptest::prelude::*;

use worktime_core::{
    break_hours, DaySchedule, Interval, Status, TimeOfDay, WeekSchedule, WeekTime, Weekday,
};

fn minutes(value: u16) -> TimeOfDay {
    TimeOfDay::from_hm(u32::from(value / 60), u32::from(value % 60)).unwrap()
}

/// Pairs consecutive distinct cut points into ascending intervals.
fn day_from_points(points: Vec<u16>) -> DaySchedule {
    let intervals = points
        .chunks_exact(2)
        .map(|pair| Interval::new(minutes(pair[0]), minutes(pair[1])))
        .collect();
    DaySchedule::new(intervals)
}

fn arb_day() -> impl Strategy<Value = DaySchedule> {
    prop::collection::btree_set(0u16..=1440, 0..7)
        .prop_map(|points| day_from_points(points.into_iter().collect()))
}

fn arb_schedule() -> impl Strategy<Value = WeekSchedule> {
    prop::collection::vec(prop::option::of(arb_day()), 7).prop_map(|days| {
        let mut schedule = WeekSchedule::new();
        for (index, entry) in days.into_iter().enumerate() {
            if let Some(entry) = entry {
                schedule.set_day(Weekday::from_index(index), entry);
            }
        }
        schedule
    })
}

fn arb_now() -> impl Strategy<Value = WeekTime> {
    (0usize..7, 0u16..1440)
        .prop_map(|(day, time)| WeekTime::new(Weekday::from_index(day), minutes(time)))
}

fn full_week() -> WeekSchedule {
    let mut schedule = WeekSchedule::new();
    for weekday in Weekday::ALL {
        schedule.set_day(
            weekday,
            DaySchedule::new(vec![Interval::new(TimeOfDay::MIDNIGHT, TimeOfDay::END_OF_DAY)]),
        );
    }
    schedule
}

proptest! {
    #[test]
    fn time_text_round_trips(value in 0u16..=1440) {
        let original = minutes(value);
        let parsed: TimeOfDay = original.to_string().parse().unwrap();
        prop_assert_eq!(parsed, original);
    }

    #[test]
    fn around_the_clock_is_always_open(now in arb_now()) {
        let schedule = full_week();
        prop_assert!(schedule.is_open(&now));
        prop_assert_eq!(
            schedule.status(&now, 60, &[Weekday::Sat, Weekday::Sun]),
            Some(Status::Opened)
        );
    }

    #[test]
    fn next_events_are_bounded_and_upcoming(schedule in arb_schedule(), now in arb_now()) {
        let events = schedule.next_events(&now);
        prop_assert!(events.len() <= 2);
        for event in &events {
            prop_assert!(event.day_offset > 0 || event.time > now.time);
        }
    }

    #[test]
    fn opened_status_implies_open(
        schedule in arb_schedule(),
        now in arb_now(),
        threshold in 0i64..240,
    ) {
        if schedule.status(&now, threshold, &[]) == Some(Status::Opened) {
            prop_assert!(schedule.is_open(&now));
        }
    }

    #[test]
    fn break_gaps_align_with_working_hours(day in arb_day()) {
        let gaps = break_hours(&day.working_hours);
        prop_assert_eq!(gaps.len(), day.working_hours.len().saturating_sub(1));
        for (index, gap) in gaps.iter().enumerate() {
            prop_assert_eq!(gap.from, day.working_hours[index].to);
            prop_assert_eq!(gap.to, day.working_hours[index + 1].from);
        }
    }

    #[test]
    fn status_is_deterministic(schedule in arb_schedule(), now in arb_now()) {
        let weekends = [Weekday::Sat, Weekday::Sun];
        prop_assert_eq!(
            schedule.status(&now, 60, &weekends),
            schedule.status(&now, 60, &weekends)
        );
    }

    #[test]
    fn schedule_json_round_trips(schedule in arb_schedule()) {
        let json = serde_json::to_string(&schedule).unwrap();
        let reloaded: WeekSchedule = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(reloaded, schedule);
    }
}
