//! Configuration for a degree program.
//!
//! A `ProgramConfig` can only be obtained through `Default`, `new`, or
//! deserialization, all of which validate, so every config in circulation
//! is safe to divide by and to weight with.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RecordError, Result};

/// Largest supported program length. Year weights are `2^year` in a `u64`.
pub const MAX_TOTAL_YEARS: u32 = 16;

/// Parameters shared by every record in a program.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProgramConfigFields", into = "ProgramConfigFields")]
pub struct ProgramConfig {
    modules_per_year: usize,
    total_years: u32,
    min_mark: u32,
    max_mark: u32,
}

/// Unchecked wire form of `ProgramConfig`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
struct ProgramConfigFields {
    /// Number of module marks recorded for each completed year (default: 6).
    modules_per_year: usize,

    /// Number of years before graduation is triggered (default: 3).
    total_years: u32,

    /// Lowest mark a module can receive (default: 40).
    min_mark: u32,

    /// Highest mark a module can receive (default: 100).
    max_mark: u32,
}

impl Default for ProgramConfigFields {
    fn default() -> Self {
        Self {
            modules_per_year: 6,
            total_years: 3,
            min_mark: 40,
            max_mark: 100,
        }
    }
}

impl TryFrom<ProgramConfigFields> for ProgramConfig {
    type Error = RecordError;

    fn try_from(fields: ProgramConfigFields) -> Result<Self> {
        ProgramConfig::new(fields.modules_per_year, fields.total_years, fields.min_mark, fields.max_mark)
    }
}

impl From<ProgramConfig> for ProgramConfigFields {
    fn from(config: ProgramConfig) -> Self {
        Self {
            modules_per_year: config.modules_per_year,
            total_years: config.total_years,
            min_mark: config.min_mark,
            max_mark: config.max_mark,
        }
    }
}

impl Default for ProgramConfig {
    fn default() -> Self {
        let fields = ProgramConfigFields::default();
        Self {
            modules_per_year: fields.modules_per_year,
            total_years: fields.total_years,
            min_mark: fields.min_mark,
            max_mark: fields.max_mark,
        }
    }
}

impl ProgramConfig {
    pub fn new(modules_per_year: usize, total_years: u32, min_mark: u32, max_mark: u32) -> Result<Self> {
        if modules_per_year == 0 {
            return Err(RecordError::InvalidConfig("modules_per_year must be at least 1".into()));
        }
        if total_years == 0 || total_years > MAX_TOTAL_YEARS {
            return Err(RecordError::InvalidConfig(format!(
                "total_years must be in 1..={}",
                MAX_TOTAL_YEARS
            )));
        }
        if min_mark > max_mark {
            return Err(RecordError::InvalidConfig(format!(
                "min_mark {} exceeds max_mark {}",
                min_mark, max_mark
            )));
        }
        Ok(Self { modules_per_year, total_years, min_mark, max_mark })
    }

    /// Parse a config from JSON. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Number of module marks recorded for each completed year.
    pub fn modules_per_year(&self) -> usize {
        self.modules_per_year
    }

    /// Number of years before graduation is triggered.
    pub fn total_years(&self) -> u32 {
        self.total_years
    }

    pub fn min_mark(&self) -> u32 {
        self.min_mark
    }

    pub fn max_mark(&self) -> u32 {
        self.max_mark
    }

    /// Highest year a record may be created in. One past the final year
    /// means the student has already graduated.
    pub fn max_initial_year(&self) -> u32 {
        self.total_years + 1
    }

    /// Sum of the year weights `1 + 2 + 4 + ...`, i.e. `2^total_years - 1`.
    pub fn weight_divisor(&self) -> u64 {
        1u64.checked_shl(self.total_years).map_or(u64::MAX, |w| w - 1)
    }
}
