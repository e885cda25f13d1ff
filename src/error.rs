//! Application Errors
//!
//! Failures from the caller-side plumbing (config, seed data, storage).
//! The list view itself never fails.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("invalid project seed: {0}")]
    Seed(String),

    #[error("storage unavailable: {0}")]
    Storage(String),

    #[error("malformed project data: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
