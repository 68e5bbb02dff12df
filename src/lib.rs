//! Degree progression library
//!
//! Tracks students through a multi-year degree program: module marks for
//! each completed year, year advancement, and the final weighted degree
//! classification.

pub mod config;
pub mod error;
pub mod student;

pub use config::ProgramConfig;
pub use error::{RecordError, Result};
pub use student::{
    Classification, MarkSet, StudentId, StudentRecord, YearState,
    compute_classification, generate_mark_set, overall_average, year_average,
};
