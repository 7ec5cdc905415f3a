//! Unified application error type.
//! All modules (db, core, cli, config) return AppError to keep the error
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

    /// The operator's input stream reached end-of-file.
    #[error("Input stream closed")]
    InputClosed,

    // ---------------------------
    // Database-related
    // ---------------------------
    /// Raised once at startup; fatal.
    #[error("Unable to Connect to Database: {0}")]
    Connection(String),

    /// Raised by any execute/query call; caught at the handler boundary.
    #[error("{0}")]
    Statement(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        AppError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

impl From<postgres::Error> for AppError {
    fn from(e: postgres::Error) -> Self {
        // Prefer the server's own message over the client's wrapper text.
        match e.as_db_error() {
            Some(db) => AppError::Statement(db.message().to_string()),
            None => AppError::Statement(e.to_string()),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
