//! Time bucketing utilities for series aggregation
//!
//! All temporal grouping is UTC-calendar-day granularity: a bucket key is
//! the millisecond timestamp of a day's UTC midnight, regardless of the
//! precision of the event timestamp it was derived from. The event store
//! keeps microseconds; the chart frontend expects milliseconds.

use chrono::{NaiveDate, NaiveTime, Utc};

/// One day in milliseconds (bucket key unit).
pub const DAY_MS: i64 = 86_400_000;

/// One day in microseconds (event store unit).
pub const DAY_US: i64 = 86_400_000_000;

/// Truncate a microsecond event timestamp to its UTC day bucket key.
///
/// Two timestamps map to the same key iff they fall on the same UTC
/// calendar day, and every key is a multiple of [`DAY_MS`].
///
/// # Example
/// ```
/// use ticketgraph::graph::day_bucket_ms;
/// let noon = 1_703_766_896_000_000; // 2023-12-28 12:34:56 UTC
/// assert_eq!(day_bucket_ms(noon), 1_703_721_600_000); // 2023-12-28 00:00 UTC
/// ```
pub fn day_bucket_ms(time_us: i64) -> i64 {
    (time_us / DAY_US) * DAY_MS
}

/// Millisecond timestamp of a date's UTC midnight.
pub fn day_start_ms(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
}

/// UTC midnight of the current day, in milliseconds.
pub fn today_start_ms() -> i64 {
    day_start_ms(Utc::now().date_naive())
}
