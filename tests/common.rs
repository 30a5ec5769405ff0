#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Local, TimeZone};
use rsavetracker::core::clock::ManualClock;
use rsavetracker::core::scheduler::ManualScheduler;
use rsavetracker::core::session::TrackerSession;
use rsavetracker::store::MemoryStore;
use std::env;
use std::fs;
use std::path::PathBuf;

pub type TestSession = TrackerSession<MemoryStore, ManualClock, ManualScheduler>;

pub fn rst() -> Command {
    cargo_bin_cmd!("rsavetracker")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rsavetracker.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Local instant; winter dates keep tests clear of DST transitions.
pub fn local(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(y, mo, d, h, mi, s)
        .single()
        .expect("unambiguous local time")
}

/// Session over an empty in-memory store with a frozen clock.
pub fn session_at(now: DateTime<Local>) -> (TestSession, ManualClock) {
    session_with(MemoryStore::new(), now)
}

pub fn session_with(store: MemoryStore, now: DateTime<Local>) -> (TestSession, ManualClock) {
    let clock = ManualClock::at(now);
    let session = TrackerSession::new(store, clock.clone(), ManualScheduler::driving(clock.clone()))
        .expect("session");
    (session, clock)
}

/// Active tracker with `rate` per day started at 2025-01-10 08:00, clock at
/// `elapsed` seconds later.
pub fn active_session(rate: &str, elapsed: i64) -> (TestSession, ManualClock) {
    let start = local(2025, 1, 10, 8, 0, 0);
    let (mut session, clock) = session_at(start + chrono::TimeDelta::seconds(elapsed));
    session
        .start("Coffee", "2025-01-10", "08:00", rate)
        .expect("start");
    (session, clock)
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
