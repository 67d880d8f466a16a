//! Unified application error type.
//! All modules (db, core, cli) return AppError to keep the error
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

    #[error("Source file not found: {0}")]
    SourceNotFound(String),

    // ---------------------------
    // CSV parsing
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Row at line {line}: expected {expected} fields, found {found}")]
    RowShape {
        line: u64,
        expected: usize,
        found: usize,
    },

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Table '{0}' does not exist in the destination database")]
    MissingTable(String),
}

pub type AppResult<T> = Result<T, AppError>;
