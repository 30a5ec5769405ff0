use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Timelike};

/// Format used to persist the start instant: local time, seconds forced to zero.
pub const START_FORMAT: &str = "%Y-%m-%dT%H:%M:00";

/// Active tracker configuration. The three fields are persisted together or not at all.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    pub label: String,
    pub start: NaiveDateTime, // ⇔ trackerStartDateTime ("YYYY-MM-DDTHH:MM:00")
    pub daily_rate: f64,      // ⇔ trackerDailySaving (decimal string)
}

impl TrackerConfig {
    pub fn start_str(&self) -> String {
        self.start.format(START_FORMAT).to_string()
    }

    /// Resolve the local start moment to an absolute instant.
    ///
    /// Ambiguous local times (DST fold) resolve to the earlier instant;
    /// times that do not exist locally (DST gap) are rejected.
    pub fn start_instant(&self) -> AppResult<DateTime<Local>> {
        Local
            .from_local_datetime(&self.start)
            .earliest()
            .ok_or_else(|| AppError::InvalidDate(self.start_str()))
    }

    /// Parse a persisted start string. Accepts the stored `YYYY-MM-DDTHH:MM:SS`
    /// and the shorter `YYYY-MM-DDTHH:MM`; seconds are always dropped.
    pub fn parse_start(s: &str) -> Option<NaiveDateTime> {
        let parsed = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
            .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
            .ok()?;
        parsed.with_second(0)?.with_nanosecond(0)
    }
}
