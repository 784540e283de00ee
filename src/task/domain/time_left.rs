//! Human-readable bucketing of the time left until a deadline.

use super::TimeLeft;

const MINUTE_MS: i64 = 60 * 1000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;
const MONTH_MS: i64 = 31 * DAY_MS;

/// Formats a duration in milliseconds as `"Time left: {n} {unit}"`.
///
/// The first matching bucket wins: at least 31 days is counted in months
/// of 31 days, at least a day in days, at least an hour in hours, and
/// anything shorter in minutes. Counts are rounded half-up.
///
/// Overdue (negative) durations are not special-cased: they fall through to
/// the minutes bucket and produce a zero or negative count.
///
/// # Examples
///
/// ```
/// use tasklist::task::domain::format_time_left;
///
/// assert_eq!(format_time_left(90_000_000), "Time left: 1 days");
/// assert_eq!(format_time_left(5 * 60 * 1000), "Time left: 5 minutes");
/// ```
#[must_use]
pub fn format_time_left(duration_ms: i64) -> String {
    let (count, unit) = if duration_ms >= MONTH_MS {
        (round_div(duration_ms, MONTH_MS), "months")
    } else if duration_ms >= DAY_MS {
        (round_div(duration_ms, DAY_MS), "days")
    } else if duration_ms >= HOUR_MS {
        (round_div(duration_ms, HOUR_MS), "hours")
    } else {
        (round_div(duration_ms, MINUTE_MS), "minutes")
    };
    format!("Time left: {count} {unit}")
}

/// Returns the time-left label shown for a task.
///
/// Tasks without a deadline get an empty label; the formatter is never
/// consulted for them.
#[must_use]
pub fn describe_time_left(time_left: TimeLeft) -> String {
    time_left.millis().map(format_time_left).unwrap_or_default()
}

/// Divides and rounds half toward positive infinity.
///
/// `floor(n / d + 1/2)` is computed as `floor((2n + d) / 2d)` in `i128` so
/// no intermediate step can overflow.
fn round_div(numerator: i64, denominator: i64) -> i64 {
    let doubled = i128::from(numerator) * 2 + i128::from(denominator);
    let quotient = doubled.div_euclid(i128::from(denominator) * 2);
    i64::try_from(quotient).unwrap_or(if quotient.is_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}
