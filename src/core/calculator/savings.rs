use crate::models::time_units::SECONDS_PER_DAY;

/// Savings accrued over `elapsed` seconds at `daily_rate` per day.
/// A negative elapsed time (future start) accrues nothing.
pub fn gross_saved(elapsed: i64, daily_rate: f64) -> f64 {
    if elapsed < 0 {
        return 0.0;
    }
    elapsed as f64 * daily_rate / SECONDS_PER_DAY as f64
}

/// Gross savings minus treats, floored at zero.
pub fn net_saved(gross: f64, total_treats: f64) -> f64 {
    (gross - total_treats).max(0.0)
}
