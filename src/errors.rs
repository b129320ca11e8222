//! Unified application error type.
//! All modules (db, scheduler, cli, utils) return AppError to keep the error
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
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Invalid details payload: {0}")]
    Details(#[from] serde_json::Error),

    // ---------------------------
    // Argument errors
    // ---------------------------
    #[error("Invalid task id: {0} (must be larger than 0)")]
    InvalidId(i64),

    #[error("The task title must not be empty")]
    EmptyTitle,

    #[error("Invalid reminder: {0} (expected 'YYYY-MM-DD HH:MM' or 'tomorrow')")]
    InvalidReminder(String),

    #[error("Invalid list position: {0}")]
    InvalidListPosition(usize),

    // ---------------------------
    // Store errors
    // ---------------------------
    #[error("No task found with id {0}")]
    TaskNotFound(i64),

    #[error("The passed task batch was empty")]
    EmptyBatch,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to save configuration")]
    ConfigSave,
}

pub type AppResult<T> = Result<T, AppError>;
