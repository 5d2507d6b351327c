use crate::core::calculator::{cumulative_gpa, semester_gpa};
use crate::domain::model::{Semester, SemesterEntry, Student, Subject, SubjectEntry};
use crate::utils::error::{GpaError, Result};
use crate::utils::validation;

/// Validates raw string-typed inputs and runs the calculators over them.
///
/// This is the whole boundary contract: front ends hand over form values
/// as-is and get back either a rounded result or a validation error they can
/// show verbatim.
pub struct GradeEngine;

impl GradeEngine {
    pub fn new() -> Self {
        Self
    }

    /// GPA for one student. When `num_subjects` is given it is validated and
    /// exactly that many entries are consumed; surplus entries are ignored.
    /// Without it, every entry counts and at least one is required.
    pub fn gpa(
        &self,
        student_name: &str,
        num_subjects: Option<&str>,
        entries: &[SubjectEntry],
    ) -> Result<f64> {
        let count = entry_count("Subjects", num_subjects, entries.len())?;

        let mut subjects = Vec::with_capacity(count);
        for i in 1..=count {
            let entry = entries.get(i - 1).ok_or_else(|| GpaError::MissingEntryError {
                field: format!("Grade {i}"),
            })?;
            let credit = validation::positive_float(&format!("Credit {i}"), &entry.credit)?;
            subjects.push(Subject::new(&entry.grade, credit));
        }

        let student = Student::new(student_name, subjects);
        tracing::debug!(
            "Computing GPA over {} subjects for '{}'",
            student.subjects.len(),
            student.name
        );

        Ok(semester_gpa(&student))
    }

    /// Cumulative GPA across semesters; same count semantics as [`Self::gpa`].
    pub fn cgpa(&self, num_semesters: Option<&str>, entries: &[SemesterEntry]) -> Result<f64> {
        let count = entry_count("Semesters", num_semesters, entries.len())?;

        let mut semesters = Vec::with_capacity(count);
        for i in 1..=count {
            let entry = entries.get(i - 1).ok_or_else(|| GpaError::MissingEntryError {
                field: format!("GPA {i}"),
            })?;
            let gpa = validation::gpa_range(&format!("GPA {i}"), &entry.gpa)?;
            let credits = validation::positive_float(&format!("Credit {i}"), &entry.credits)?;
            semesters.push(Semester::new(gpa, credits));
        }

        tracing::debug!("Computing CGPA over {} semesters", semesters.len());

        Ok(cumulative_gpa(&semesters))
    }
}

impl Default for GradeEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn entry_count(field_name: &str, declared: Option<&str>, available: usize) -> Result<usize> {
    match declared {
        Some(raw) => validation::positive_int(field_name, raw),
        None if available == 0 => Err(GpaError::NotPositiveError {
            field: field_name.to_string(),
        }),
        None => Ok(available),
    }
}
