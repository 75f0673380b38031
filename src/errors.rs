//! Unified application error type.
//! The calculator only ever returns `InvalidTimeFormat` or `NegativeBreak`;
//! the remaining variants belong to config, CLI and export.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Core
    // ---------------------------
    #[error("Invalid time: '{0}'. Use the HH:MM format (e.g. 09:03).")]
    InvalidTimeFormat(String),

    #[error("The lunch break is negative: check lunch-out / lunch-in.")]
    NegativeBreak,

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid work duration: {0}")]
    InvalidDuration(String),

    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
