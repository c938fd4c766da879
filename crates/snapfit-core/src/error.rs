//! Error types for the workout document and the workout model

use thiserror::Error;

/// Why a workout document could not be turned into a collection.
///
/// Every variant is handled the same way by [`crate::parse_workouts`]: the
/// whole document is discarded and an empty collection is returned.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed workout document at `{path}`: expected {expected}")]
    Malformed { path: String, expected: &'static str },
}

impl ParseError {
    pub fn malformed(path: impl Into<String>, expected: &'static str) -> Self {
        Self::Malformed {
            path: path.into(),
            expected,
        }
    }
}

/// Toggle requests that point outside the current workout collection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkoutError {
    #[error("workout index {index} out of range ({len} workouts)")]
    GroupOutOfRange { index: usize, len: usize },

    #[error("exercise index {index} out of range for workout {group} ({len} exercises)")]
    ExerciseOutOfRange { group: usize, index: usize, len: usize },
}
