//! Student progression
//!
//! A student record tracks one student through a multi-year degree:
//! mark sets for each completed year, the year currently in progress,
//! and the final classification once every year has been completed.

pub mod classification;
pub mod marks;
pub mod record;
pub mod report;

use std::fmt;
use serde::{Serialize, Deserialize};

/// Unique identifier of a student.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(pub u64);

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub use classification::{compute_classification, overall_average, year_average, Classification};
pub use marks::{generate_mark_set, MarkSet};
pub use record::{StudentRecord, YearState};
