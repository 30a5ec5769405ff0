//! Unified application error type.
//! All modules (store, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Tracker validation
    // ---------------------------
    #[error("Please enter a label for what you are tracking.")]
    EmptyLabel,

    #[error("Please select both a start date and a start time.")]
    MissingStartDateTime,

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Please enter a valid daily saving amount (0 or greater), got '{0}'.")]
    InvalidDailyRate(String),

    // ---------------------------
    // Treat validation
    // ---------------------------
    #[error("Please enter a description for the treat.")]
    EmptyTreatLabel,

    #[error("Please enter a valid amount greater than zero, got '{0}'.")]
    InvalidTreatAmount(String),

    #[error(
        "Cannot log treat. Your available net savings are currently {available:.2}. Treat amount ({requested:.2}) is too high."
    )]
    InsufficientSavings { available: f64, requested: f64 },

    // ---------------------------
    // Session state
    // ---------------------------
    #[error("No tracker configured. Run `rsavetracker start` first.")]
    NotConfigured,

    #[error("Start time is in the future! Updates are halted until the tracker is reset.")]
    FutureStart,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl AppError {
    /// True for errors caused by user input that was rejected before any
    /// state was touched.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::EmptyLabel
                | AppError::MissingStartDateTime
                | AppError::InvalidDate(_)
                | AppError::InvalidTime(_)
                | AppError::InvalidDailyRate(_)
                | AppError::EmptyTreatLabel
                | AppError::InvalidTreatAmount(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
