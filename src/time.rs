use chrono::Utc;

pub const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Whole days elapsed from `start_ms` to `end_ms`, floored. Negative
/// spans floor too: a base date half a day in the future is day -1,
/// not day 0.
pub fn days_between(start_ms: i64, end_ms: i64) -> i64 {
    (end_ms - start_ms).div_euclid(MS_PER_DAY)
}
