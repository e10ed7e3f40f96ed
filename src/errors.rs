//! Unified application error type.
//! All modules (probe, notify, config, cli) return AppError to keep the error
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
    // Collaborator errors
    // ---------------------------
    #[error("Idle probe error: {0}")]
    Probe(String),

    #[error("Notification error: {0}")]
    Notify(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
