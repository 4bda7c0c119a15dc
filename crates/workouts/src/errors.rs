//! Errors raised while turning packages into workouts.

use thiserror::Error;

use crate::dispatch::WorkoutKind;

#[derive(Error, Debug)]
pub enum WorkoutError {
    #[error("Unknown workout type: {0}")]
    UnknownWorkoutType(String),

    #[error("{kind} expects {expected} readings, got {actual}")]
    ReadingCount {
        kind: WorkoutKind,
        expected: usize,
        actual: usize,
    },

    #[error("Reading #{index} must be a non-negative whole number, got {value}")]
    InvalidReading { index: usize, value: f64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
