//! Error types for the fitness tracker

use thiserror::Error;

/// Errors that can occur while reading packages or computing a workout
#[derive(Debug, Error)]
pub enum ComputeError {
    #[error("Failed to parse workout package: {0}")]
    ParseError(String),

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("{workout_type} expects {expected} sensor fields, got {actual}")]
    ArityMismatch {
        workout_type: String,
        expected: usize,
        actual: usize,
    },

    #[error("Zero duration for {0}: mean speed is undefined")]
    ZeroDuration(String),

    #[error("Zero height for {0}: calories are undefined")]
    ZeroHeight(String),
}
