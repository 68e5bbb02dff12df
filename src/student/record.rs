//! Student record lifecycle
//!
//! A record is created in some year of study, advances one year at a time,
//! and graduates once the final year is completed. Graduation is terminal:
//! advancing a graduated record is rejected and leaves it unchanged.
//!
//! The current year is always one past the number of completed mark sets.

use std::io::Write;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::ProgramConfig;
use crate::error::{RecordError, Result};
use crate::student::classification::{compute_classification, Classification};
use crate::student::marks::{generate_mark_set, MarkSet};
use crate::student::report;
use crate::student::StudentId;

/// Where a student is in their degree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum YearState {
    /// Studying `year`, which is in `1..=total_years`
    InProgress { year: u32 },
    /// Every year completed, classification awarded
    Graduated { classification: Classification },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StudentRecordFields", into = "StudentRecordFields")]
pub struct StudentRecord {
    config: ProgramConfig,
    id: StudentId,
    forename: String,
    surname: String,
    program_title: String,
    /// One mark set per completed year, oldest first
    yearly_marks: Vec<MarkSet>,
    state: YearState,
}

/// JSON snapshot form. `current_year` and `state` are written for readers
/// and checked against the mark history when read back.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct StudentRecordFields {
    config: ProgramConfig,
    id: StudentId,
    forename: String,
    surname: String,
    program_title: String,
    current_year: u32,
    yearly_marks: Vec<Vec<u32>>,
    state: YearState,
}

impl From<StudentRecord> for StudentRecordFields {
    fn from(record: StudentRecord) -> Self {
        let current_year = record.current_year();
        Self {
            current_year,
            yearly_marks: record.yearly_marks.iter().map(|set| set.marks().to_vec()).collect(),
            state: record.state,
            config: record.config,
            id: record.id,
            forename: record.forename,
            surname: record.surname,
            program_title: record.program_title,
        }
    }
}

impl TryFrom<StudentRecordFields> for StudentRecord {
    type Error = RecordError;

    fn try_from(fields: StudentRecordFields) -> Result<Self> {
        let record = StudentRecord::from_history(
            &fields.config,
            fields.id,
            fields.forename,
            fields.surname,
            fields.program_title,
            fields.yearly_marks,
        )?;

        if fields.current_year != record.current_year() {
            return Err(RecordError::InconsistentRecord(format!(
                "current_year {} but {} completed years",
                fields.current_year,
                record.yearly_marks.len()
            )));
        }
        if fields.state != record.state {
            return Err(RecordError::InconsistentRecord(format!(
                "state {:?} does not match marks (expected {:?})",
                fields.state, record.state
            )));
        }
        Ok(record)
    }
}

impl StudentRecord {
    /// Create a record for a student currently in `initial_year`.
    ///
    /// Marks for every earlier year are generated up front. A record created
    /// in `total_years + 1` has completed the program and is classified
    /// immediately.
    pub fn new<R: Rng>(
        config: &ProgramConfig,
        id: StudentId,
        forename: impl Into<String>,
        surname: impl Into<String>,
        program_title: impl Into<String>,
        initial_year: u32,
        rng: &mut R,
    ) -> Result<Self> {
        if initial_year < 1 || initial_year > config.max_initial_year() {
            return Err(RecordError::InvalidYear {
                year: initial_year,
                max: config.max_initial_year(),
            });
        }

        let yearly_marks = (1..initial_year)
            .map(|_| generate_mark_set(config, rng))
            .collect();

        Self::assemble(config, id, forename.into(), surname.into(), program_title.into(), yearly_marks)
    }

    /// Rebuild a record from a known mark history, one entry per completed
    /// year. The student is placed in the year after the last entry.
    pub fn from_history(
        config: &ProgramConfig,
        id: StudentId,
        forename: impl Into<String>,
        surname: impl Into<String>,
        program_title: impl Into<String>,
        history: Vec<Vec<u32>>,
    ) -> Result<Self> {
        if history.len() > config.total_years() as usize {
            return Err(RecordError::InvalidYear {
                year: history.len() as u32 + 1,
                max: config.max_initial_year(),
            });
        }

        let yearly_marks = history
            .into_iter()
            .map(|marks| MarkSet::new(marks, config))
            .collect::<Result<Vec<_>>>()?;

        Self::assemble(config, id, forename.into(), surname.into(), program_title.into(), yearly_marks)
    }

    fn assemble(
        config: &ProgramConfig,
        id: StudentId,
        forename: String,
        surname: String,
        program_title: String,
        yearly_marks: Vec<MarkSet>,
    ) -> Result<Self> {
        let current_year = yearly_marks.len() as u32 + 1;
        let state = if current_year > config.total_years() {
            YearState::Graduated {
                classification: compute_classification(&yearly_marks, config)?,
            }
        } else {
            YearState::InProgress { year: current_year }
        };

        let record = StudentRecord {
            config: config.clone(),
            id,
            forename,
            surname,
            program_title,
            yearly_marks,
            state,
        };
        debug!(
            id = %record.id,
            year = current_year,
            completed = record.yearly_marks.len(),
            "student record created"
        );
        Ok(record)
    }

    pub fn id(&self) -> StudentId {
        self.id
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.forename, self.surname)
    }

    pub fn program_title(&self) -> &str {
        &self.program_title
    }

    /// Year in progress, or `total_years + 1` once graduated.
    pub fn current_year(&self) -> u32 {
        self.yearly_marks.len() as u32 + 1
    }

    /// Mark sets for completed years, oldest first.
    pub fn yearly_marks(&self) -> &[MarkSet] {
        &self.yearly_marks
    }

    pub fn state(&self) -> YearState {
        self.state
    }

    pub fn config(&self) -> &ProgramConfig {
        &self.config
    }

    pub fn classification(&self) -> Classification {
        match self.state {
            YearState::InProgress { .. } => Classification::Pending,
            YearState::Graduated { classification } => classification,
        }
    }

    pub fn is_graduated(&self) -> bool {
        matches!(self.state, YearState::Graduated { .. })
    }

    /// Draw a fresh set of module marks under this record's program.
    /// The record itself is not modified.
    pub fn generate_mark_set<R: Rng>(&self, rng: &mut R) -> MarkSet {
        generate_mark_set(&self.config, rng)
    }

    /// Finish the current year: record its marks and move to the next year,
    /// graduating after the final year. The graduation announcement is
    /// written to `out`.
    ///
    /// If classification fails the record is left as it was.
    pub fn advance_year<R: Rng, W: Write>(&mut self, rng: &mut R, out: &mut W) -> Result<YearState> {
        if self.is_graduated() {
            return Err(RecordError::AlreadyGraduated { id: self.id });
        }

        let marks = generate_mark_set(&self.config, rng);
        debug!(id = %self.id, year = self.current_year() + 1, marks = %marks, "year advanced");
        self.yearly_marks.push(marks);

        let year = self.current_year();
        if year > self.config.total_years() {
            let classification = match compute_classification(&self.yearly_marks, &self.config) {
                Ok(classification) => classification,
                Err(e) => {
                    self.yearly_marks.pop();
                    return Err(e);
                }
            };
            self.graduate(classification, out)?;
        } else {
            self.state = YearState::InProgress { year };
        }
        Ok(self.state)
    }

    fn graduate<W: Write>(&mut self, classification: Classification, out: &mut W) -> Result<()> {
        self.state = YearState::Graduated { classification };
        info!(id = %self.id, %classification, "student graduated");
        report::write_graduation(self, out)?;
        Ok(())
    }

    /// Identity line followed by the marks report.
    pub fn details(&self) -> String {
        report::format_details(self)
    }

    pub fn write_details<W: Write>(&self, out: &mut W) -> Result<()> {
        report::write_details(self, out)?;
        Ok(())
    }

    /// JSON snapshot of the record.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read a record back from a JSON snapshot, rejecting any snapshot
    /// whose year, state, or marks disagree with each other or the program.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
