use super::time_units::TimeUnits;
use serde::Serialize;

/// Elapsed time since the configured start, or the future-start sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Elapsed {
    Since(u64),
    Future,
}

impl Elapsed {
    pub fn is_future(&self) -> bool {
        matches!(self, Elapsed::Future)
    }

    pub fn seconds(&self) -> Option<u64> {
        match self {
            Elapsed::Since(s) => Some(*s),
            Elapsed::Future => None,
        }
    }

    pub fn units(&self) -> Option<TimeUnits> {
        self.seconds().map(TimeUnits::from_seconds)
    }
}

/// Snapshot recomputed on every tick. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionState {
    pub elapsed: Elapsed,
    pub gross_saved: f64,
    pub total_treats: f64,
    pub net_saved: f64,
}
