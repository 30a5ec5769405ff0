//! Key-value persistence used by the tracker session.
//!
//! The session never touches a concrete medium: everything goes through
//! [`KeyValueStore`] (four fixed keys) and [`OperationLog`] (diagnostics).

pub mod memory;
pub mod sqlite;

use crate::errors::AppResult;

pub const START_DATETIME_KEY: &str = "trackerStartDateTime";
pub const DAILY_SAVING_KEY: &str = "trackerDailySaving";
pub const TRACKER_LABEL_KEY: &str = "trackerLabel";
pub const TREAT_LOG_KEY: &str = "trackerTreatLog";

/// All keys owned by the tracker, in the order they are cleared on reset.
pub const ALL_KEYS: [&str; 4] = [
    TRACKER_LABEL_KEY,
    START_DATETIME_KEY,
    DAILY_SAVING_KEY,
    TREAT_LOG_KEY,
];

pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&mut self, key: &str) -> AppResult<()>;

    fn contains(&self, key: &str) -> AppResult<bool> {
        Ok(self.get(key)?.is_some())
    }
}

/// Internal diagnostic log. Writing is best effort and never fails the caller.
pub trait OperationLog {
    fn log_operation(&mut self, operation: &str, target: &str, message: &str);
}

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
