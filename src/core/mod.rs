pub mod calculator;
pub mod clock;
pub mod ledger;
pub mod log;
pub mod scheduler;
pub mod session;
