//! Tests for time-left bucketing and labels.

use crate::task::domain::{TimeLeft, describe_time_left, format_time_left};
use rstest::rstest;

const MINUTE: i64 = 60_000;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

#[rstest]
#[case(90_000_000, "Time left: 1 days")]
#[case(45 * DAY, "Time left: 1 months")]
#[case(47 * DAY, "Time left: 2 months")]
#[case(31 * DAY, "Time left: 1 months")]
#[case(31 * DAY - 1, "Time left: 31 days")]
#[case(DAY, "Time left: 1 days")]
#[case(DAY - 1, "Time left: 24 hours")]
#[case(90 * MINUTE, "Time left: 2 hours")]
#[case(HOUR, "Time left: 1 hours")]
#[case(HOUR - 1, "Time left: 60 minutes")]
#[case(30_000, "Time left: 1 minutes")]
#[case(29_999, "Time left: 0 minutes")]
#[case(0, "Time left: 0 minutes")]
fn buckets_pick_first_matching_unit(#[case] duration: i64, #[case] expected: &str) {
    assert_eq!(format_time_left(duration), expected);
}

#[rstest]
#[case(-30_000, "Time left: 0 minutes")]
#[case(-90_000, "Time left: -1 minutes")]
#[case(-5 * DAY, "Time left: -7200 minutes")]
fn overdue_durations_fall_through_to_minutes(#[case] duration: i64, #[case] expected: &str) {
    assert_eq!(format_time_left(duration), expected);
}

#[rstest]
fn extreme_durations_do_not_overflow() {
    assert!(format_time_left(i64::MAX).ends_with(" months"));
    assert!(format_time_left(i64::MIN).ends_with(" minutes"));
}

#[rstest]
fn unbounded_time_left_has_empty_label() {
    assert_eq!(describe_time_left(TimeLeft::Unbounded), "");
}

#[rstest]
fn concrete_time_left_uses_the_formatter() {
    assert_eq!(
        describe_time_left(TimeLeft::Remaining(90_000_000)),
        "Time left: 1 days"
    );
}
