//! Append-only ledger of treats, stored as one JSON array under [`TREAT_LOG_KEY`].

use crate::errors::AppResult;
use crate::models::treat::Treat;
use crate::store::{KeyValueStore, OperationLog, TREAT_LOG_KEY};
use crate::ui::messages::warning;
use thiserror::Error;

/// The persisted ledger could not be decoded.
#[derive(Debug, Error)]
#[error("treat log is not a valid list of treats: {0}")]
pub struct LedgerCorruption(#[from] serde_json::Error);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TreatLedger {
    treats: Vec<Treat>,
}

impl TreatLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(raw: &str) -> Result<Self, LedgerCorruption> {
        let treats: Vec<Treat> = serde_json::from_str(raw)?;
        Ok(Self { treats })
    }

    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string(&self.treats)?)
    }

    /// Persisted ledger, or an empty one when the key is absent or unreadable.
    /// Corruption is logged, never returned.
    pub fn load<S: KeyValueStore + OperationLog>(store: &mut S) -> AppResult<Self> {
        let Some(raw) = store.get(TREAT_LOG_KEY)? else {
            return Ok(Self::new());
        };

        match Self::parse(&raw) {
            Ok(ledger) => Ok(ledger),
            Err(e) => {
                warning(format!("Error parsing treat log, starting from an empty one: {}", e));
                store.log_operation("corruption", TREAT_LOG_KEY, &e.to_string());
                Ok(Self::new())
            }
        }
    }

    pub fn exists<S: KeyValueStore>(store: &S) -> AppResult<bool> {
        store.contains(TREAT_LOG_KEY)
    }

    /// Write the whole ledger in one `set`.
    pub fn persist<S: KeyValueStore>(&self, store: &mut S) -> AppResult<()> {
        store.set(TREAT_LOG_KEY, &self.to_json()?)
    }

    /// Remove the key entirely (not the same as persisting an empty list).
    pub fn clear<S: KeyValueStore>(store: &mut S) -> AppResult<()> {
        store.remove(TREAT_LOG_KEY)
    }

    pub fn append(mut self, treat: Treat) -> Self {
        self.treats.push(treat);
        self
    }

    pub fn total_spent(&self) -> f64 {
        self.treats.iter().map(|t| t.amount).sum()
    }

    pub fn len(&self) -> usize {
        self.treats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.treats.is_empty()
    }

    /// Chronological (append) order.
    pub fn entries(&self) -> &[Treat] {
        &self.treats
    }

    pub fn newest_first(&self) -> impl Iterator<Item = &Treat> {
        self.treats.iter().rev()
    }
}
