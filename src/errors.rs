//! Unified application error type.
//! All modules (api, session, core, cli, utils) return AppError to keep the
//! error handling consistent and easy to surface at the command boundary.

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
    // Network / remote API
    // ---------------------------
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Server returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Unexpected server response: {0}")]
    Rejected(String),

    #[error("Operation cancelled")]
    Cancelled,

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Session / device
    // ---------------------------
    #[error("Session expired: please log in again")]
    SessionAbsent,

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    // ---------------------------
    // Validation
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    #[error("Not enough stock: {0}")]
    InsufficientStock(String),

    #[error("{0}")]
    Validation(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// True for failures caused by the network layer rather than by the user.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            AppError::Http(_) | AppError::Timeout(_) | AppError::Api { .. }
        )
    }
}
