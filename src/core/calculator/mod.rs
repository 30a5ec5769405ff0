pub mod elapsed;
pub mod savings;

use crate::errors::AppResult;
use crate::models::session_state::{Elapsed, SessionState};
use crate::models::tracker_config::TrackerConfig;
use chrono::{DateTime, Local};

pub use elapsed::elapsed_seconds;
pub use savings::{gross_saved, net_saved};

pub struct SavingsCalculator;

impl SavingsCalculator {
    /// Full display snapshot for `now`.
    pub fn snapshot(
        now: DateTime<Local>,
        config: &TrackerConfig,
        total_treats: f64,
    ) -> AppResult<SessionState> {
        let elapsed = elapsed_seconds(now, config.start_instant()?);

        if elapsed < 0 {
            return Ok(SessionState {
                elapsed: Elapsed::Future,
                gross_saved: 0.0,
                total_treats,
                net_saved: 0.0,
            });
        }

        let gross = gross_saved(elapsed, config.daily_rate);
        Ok(SessionState {
            elapsed: Elapsed::Since(elapsed as u64),
            gross_saved: gross,
            total_treats,
            net_saved: net_saved(gross, total_treats),
        })
    }
}
