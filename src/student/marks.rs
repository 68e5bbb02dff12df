//! Module marks for a single completed year.

use std::fmt;

use rand::Rng;
use serde::Serialize;

use crate::config::ProgramConfig;
use crate::error::{RecordError, Result};

/// Marks for every module of one completed year, in module order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MarkSet(Vec<u32>);

impl MarkSet {
    /// Build a mark set, checking its size and mark range against the program.
    pub fn new(marks: Vec<u32>, config: &ProgramConfig) -> Result<Self> {
        if marks.len() != config.modules_per_year() {
            return Err(RecordError::MarkSetSize {
                expected: config.modules_per_year(),
                found: marks.len(),
            });
        }
        if let Some(&mark) = marks
            .iter()
            .find(|&&m| m < config.min_mark() || m > config.max_mark())
        {
            return Err(RecordError::MarkOutOfRange {
                mark,
                min: config.min_mark(),
                max: config.max_mark(),
            });
        }
        Ok(Self(marks))
    }

    pub fn marks(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all module marks.
    pub fn total(&self) -> u64 {
        self.0.iter().map(|&m| m as u64).sum()
    }
}

impl fmt::Display for MarkSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, mark) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", mark)?;
        }
        write!(f, "]")
    }
}

/// Draw one mark per module, each uniform over `min_mark..=max_mark`.
pub fn generate_mark_set<R: Rng>(config: &ProgramConfig, rng: &mut R) -> MarkSet {
    let marks = (0..config.modules_per_year())
        .map(|_| rng.gen_range(config.min_mark()..=config.max_mark()))
        .collect();
    MarkSet(marks)
}
