//! Degree classification from weighted yearly averages.
//!
//! Each year's average is weighted by `2^year_index`, so the final year of a
//! three-year program counts four times as much as the first. Every division
//! truncates: the year average, then the weighted overall average.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::ProgramConfig;
use crate::error::{RecordError, Result};
use crate::student::marks::MarkSet;

/// Final degree outcome. Ordered from lowest to highest tier, with
/// `Pending` below every awarded classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Classification {
    /// Degree not yet completed
    Pending,
    /// Weighted average below 50
    ThirdClass,
    /// Weighted average 50-59
    LowerSecond,
    /// Weighted average 60-69
    UpperSecond,
    /// Weighted average 70 and above
    FirstClass,
}

impl Classification {
    /// Classification for a weighted overall average. Thresholds are checked
    /// from highest to lowest.
    pub fn from_average(average: u64) -> Self {
        if average >= 70 {
            Classification::FirstClass
        } else if average >= 60 {
            Classification::UpperSecond
        } else if average >= 50 {
            Classification::LowerSecond
        } else {
            Classification::ThirdClass
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Pending => "Pending",
            Classification::FirstClass => "First Class Honours",
            Classification::UpperSecond => "Second Class Honours (Upper Division)",
            Classification::LowerSecond => "Second Class Honours (Lower Division)",
            Classification::ThirdClass => "Third Class Honours",
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Classification::Pending)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Truncated mean of one year's module marks.
pub fn year_average(marks: &MarkSet, config: &ProgramConfig) -> u64 {
    marks.total() / config.modules_per_year() as u64
}

/// Weighted overall average across the first `total_years` mark sets.
pub fn overall_average(yearly_marks: &[MarkSet], config: &ProgramConfig) -> Result<u64> {
    let expected = config.total_years() as usize;
    if yearly_marks.len() < expected {
        return Err(RecordError::IncompleteRecord {
            expected,
            found: yearly_marks.len(),
        });
    }

    let weighted_sum: u64 = yearly_marks[..expected]
        .iter()
        .enumerate()
        .map(|(i, set)| year_average(set, config) << i)
        .sum();

    Ok(weighted_sum / config.weight_divisor())
}

pub fn compute_classification(yearly_marks: &[MarkSet], config: &ProgramConfig) -> Result<Classification> {
    overall_average(yearly_marks, config).map(Classification::from_average)
}
