//! Property-based tests for week windows

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use studyplan::calendar::WeekWindow;
use studyplan::types::{Deadline, SemesterInfo};

fn semester(start: NaiveDate, total_weeks: u32, deadlines: Vec<NaiveDate>) -> SemesterInfo {
    SemesterInfo {
        start_date: start,
        end_date: start + Duration::days(i64::from(total_weeks) * 7 - 1),
        total_weeks,
        key_deadlines: deadlines
            .into_iter()
            .enumerate()
            .map(|(i, date)| Deadline {
                date,
                description: format!("deadline {i}"),
            })
            .collect(),
        major_topics: vec![],
    }
}

fn start_date(days: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + Duration::days(days)
}

/// Consecutive windows are 7 days long and leave no gap between them
#[test]
fn test_windows_are_contiguous_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(0i64..3650, 1u32..30), |(offset, total_weeks)| {
            let info = semester(start_date(offset), total_weeks, vec![]);

            let first = WeekWindow::compute(&info, 1);
            prop_assert_eq!(first.start, info.start_date);
            for week in 1..=total_weeks {
                let window = WeekWindow::compute(&info, week);
                prop_assert_eq!(window.end - window.start, Duration::days(6));
                let next = WeekWindow::compute(&info, week + 1);
                prop_assert_eq!(next.start, window.end + Duration::days(1));
            }

            Ok(())
        })
        .unwrap();
}

/// A deadline inside the semester lands in exactly one week, the one containing its date
#[test]
fn test_deadline_lands_in_one_week_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(0i64..3650, 1u32..20, prop::collection::vec(0i64..140, 0..6)),
            |(offset, total_weeks, deadline_offsets)| {
                let start = start_date(offset);
                let deadlines: Vec<NaiveDate> = deadline_offsets
                    .iter()
                    .filter(|d| **d < i64::from(total_weeks) * 7)
                    .map(|d| start + Duration::days(*d))
                    .collect();
                let info = semester(start, total_weeks, deadlines.clone());

                let windows: Vec<WeekWindow> = (1..=total_weeks)
                    .map(|week| WeekWindow::compute(&info, week))
                    .collect();
                for (i, date) in deadlines.iter().enumerate() {
                    let holders: Vec<u32> = windows
                        .iter()
                        .filter(|w| {
                            w.deadlines
                                .iter()
                                .any(|d| d.description == format!("deadline {i}"))
                        })
                        .map(|w| w.week_number)
                        .collect();
                    prop_assert_eq!(holders.len(), 1);
                    let holder = &windows[(holders[0] - 1) as usize];
                    prop_assert!(holder.contains(*date));
                }

                Ok(())
            },
        )
        .unwrap();
}
