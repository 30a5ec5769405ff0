use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// A discretionary expenditure logged against accumulated savings.
///
/// Serialized as `{label, amount, timestamp}` inside the ledger key;
/// `timestamp` is an RFC 3339 UTC instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Treat {
    pub label: String,
    pub amount: f64,
    pub timestamp: DateTime<Utc>,
}

impl Treat {
    pub fn new(label: impl Into<String>, amount: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            label: label.into(),
            amount,
            timestamp,
        }
    }

    /// Timestamp converted to the local zone, for display.
    pub fn local_timestamp(&self) -> DateTime<Local> {
        self.timestamp.with_timezone(&Local)
    }
}
