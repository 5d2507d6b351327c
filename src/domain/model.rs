use serde::{Deserialize, Serialize};

/// Raw subject row as it arrives from a form, JSON body, or CSV file.
/// Both fields stay string-typed until validation turns them into a [`Subject`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectEntry {
    pub grade: String,
    pub credit: String,
}

/// Raw semester row, string-typed like [`SubjectEntry`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemesterEntry {
    pub gpa: String,
    pub credits: String,
}

#[derive(Debug, Clone)]
pub struct Subject {
    pub grade: String,
    pub credit: f64,
}

impl Subject {
    pub fn new(grade: &str, credit: f64) -> Self {
        Self {
            grade: grade.trim().to_string(),
            credit,
        }
    }
}

/// One student's subject list for a single term. The name is display-only
/// and never participates in the calculation.
#[derive(Debug, Clone)]
pub struct Student {
    pub name: String,
    pub subjects: Vec<Subject>,
}

impl Student {
    pub fn new(name: &str, subjects: Vec<Subject>) -> Self {
        Self {
            name: name.trim().to_string(),
            subjects,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Semester {
    pub gpa: f64,
    pub credits: f64,
}

impl Semester {
    pub fn new(gpa: f64, credits: f64) -> Self {
        Self { gpa, credits }
    }
}
