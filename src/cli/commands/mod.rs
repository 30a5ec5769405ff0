pub mod config;
pub mod init;
pub mod log;
pub mod reset;
pub mod start;
pub mod status;
pub mod treat;
pub mod treats;
pub mod watch;

use crate::config::Config;
use crate::core::clock::SystemClock;
use crate::core::scheduler::IntervalScheduler;
use crate::core::session::TrackerSession;
use crate::errors::AppResult;
use crate::store::SqliteStore;
use crate::ui::messages::info;

pub type CliSession = TrackerSession<SqliteStore, SystemClock, IntervalScheduler>;

/// Open the configured database and load the tracker from it.
pub fn open_session(cfg: &Config) -> AppResult<CliSession> {
    let store = SqliteStore::open(&cfg.database_path().to_string_lossy())?;
    TrackerSession::with_interval(
        store,
        SystemClock,
        IntervalScheduler::new(),
        cfg.tick_interval()?,
    )
}

/// Hint printed by read-only commands while no tracker is configured.
pub fn print_start_hint(session: &CliSession) -> AppResult<()> {
    let defaults = session.defaults()?;
    info("No tracker configured yet. Start one with:");
    println!(
        "   rsavetracker start --label \"{}\" --date {} --time {} --rate <DAILY_SAVING>",
        defaults.label.as_deref().unwrap_or("<LABEL>"),
        defaults.date,
        defaults.time
    );
    Ok(())
}
