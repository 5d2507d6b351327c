use crate::domain::model::{SemesterEntry, SubjectEntry};
use crate::utils::error::Result;
use std::path::Path;

/// Reads subject rows from a CSV file with a `grade,credit` header.
/// Values stay raw strings so the usual validation still applies.
pub fn load_subjects<P: AsRef<Path>>(path: P) -> Result<Vec<SubjectEntry>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut entries = Vec::new();
    for row in reader.deserialize() {
        entries.push(row?);
    }
    Ok(entries)
}

/// Reads semester rows from a CSV file with a `gpa,credits` header.
pub fn load_semesters<P: AsRef<Path>>(path: P) -> Result<Vec<SemesterEntry>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut entries = Vec::new();
    for row in reader.deserialize() {
        entries.push(row?);
    }
    Ok(entries)
}
