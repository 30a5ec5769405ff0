use super::{KeyValueStore, OperationLog};
use crate::errors::AppResult;
use std::collections::HashMap;

/// One row of the in-memory operation log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Volatile store, used by tests and by callers that do not need durability.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    log: Vec<LogEntry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the store, e.g. to simulate data left by a previous run.
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn log_entries(&self) -> &[LogEntry] {
        &self.log
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.values.remove(key);
        Ok(())
    }
}

impl OperationLog for MemoryStore {
    fn log_operation(&mut self, operation: &str, target: &str, message: &str) {
        self.log.push(LogEntry {
            operation: operation.to_string(),
            target: target.to_string(),
            message: message.to_string(),
        });
    }
}
