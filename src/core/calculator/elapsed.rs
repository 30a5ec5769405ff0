use chrono::{DateTime, Local};

/// Whole seconds from `start` to `now`, floored. Negative when `start` lies in the future.
pub fn elapsed_seconds(now: DateTime<Local>, start: DateTime<Local>) -> i64 {
    (now - start).num_milliseconds().div_euclid(1000)
}
