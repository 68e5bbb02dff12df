//! Errors raised by student records and program configuration.

use thiserror::Error;

use crate::student::StudentId;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("invalid year of study {year} (expected 1..={max})")]
    InvalidYear { year: u32, max: u32 },

    #[error("cannot classify: {found} of {expected} years have marks")]
    IncompleteRecord { expected: usize, found: usize },

    #[error("student {id} has already graduated")]
    AlreadyGraduated { id: StudentId },

    #[error("mark set has {found} modules (expected {expected})")]
    MarkSetSize { expected: usize, found: usize },

    #[error("mark {mark} outside {min}..={max}")]
    MarkOutOfRange { mark: u32, min: u32, max: u32 },

    #[error("inconsistent student record: {0}")]
    InconsistentRecord(String),

    #[error("invalid program config: {0}")]
    InvalidConfig(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RecordError>;
