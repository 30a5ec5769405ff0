use chrono::{DateTime, Local};

/// Values the configuration form is pre-filled with while no tracker is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputDefaults {
    pub label: Option<String>,
    pub date: String, // "YYYY-MM-DD"
    pub time: String, // "HH:MM"
}

impl InputDefaults {
    pub fn at(now: DateTime<Local>, label: Option<String>) -> Self {
        Self {
            label,
            date: now.format("%Y-%m-%d").to_string(),
            time: now.format("%H:%M").to_string(),
        }
    }
}
