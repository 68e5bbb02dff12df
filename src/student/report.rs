//! Text reports for student records.

use std::io::{self, Write};

use crate::student::record::{StudentRecord, YearState};

/// Full details block: identity line, marks report, then a blank line.
pub fn format_details(record: &StudentRecord) -> String {
    let mut text = match record.state() {
        YearState::Graduated { classification } => format!(
            "Student {} - {}, {} Graduate in {}\n",
            record.id(),
            record.full_name(),
            classification,
            record.program_title()
        ),
        YearState::InProgress { year } => format!(
            "Student {} - {}, Year {} in {}\n",
            record.id(),
            record.full_name(),
            year,
            record.program_title()
        ),
    };

    text.push_str(&format_marks(record));
    text.push('\n');
    text
}

/// Marks for every completed year, or a note that none are completed.
pub fn format_marks(record: &StudentRecord) -> String {
    let name = record.full_name();

    if record.yearly_marks().is_empty() {
        return format!("{} has not completed any modules yet\n", name);
    }

    let mut text = format!("All marks for {}:\n", name);
    for (i, marks) in record.yearly_marks().iter().enumerate() {
        text.push_str(&format!("Year {} - {}\n", i + 1, marks));
    }
    text
}

pub fn write_details<W: Write>(record: &StudentRecord, writer: &mut W) -> io::Result<()> {
    writer.write_all(format_details(record).as_bytes())
}

pub fn write_marks<W: Write>(record: &StudentRecord, writer: &mut W) -> io::Result<()> {
    writer.write_all(format_marks(record).as_bytes())
}

pub fn write_graduation<W: Write>(record: &StudentRecord, writer: &mut W) -> io::Result<()> {
    writeln!(
        writer,
        "{} has graduated with a {}",
        record.full_name(),
        record.classification()
    )
}
