use crate::domain::model::{SemesterEntry, SubjectEntry};
use crate::utils::error::{GpaError, Result};
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "gpa-calc")]
#[command(about = "GPA and CGPA calculator")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print the result as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute a term GPA from subject grades and credits
    Gpa {
        /// Student name, display-only
        #[arg(long, default_value = "")]
        student: String,

        /// Subject as GRADE:CREDIT, repeatable (e.g. -s A:3 -s B+:4)
        #[arg(short = 's', long = "subject", value_name = "GRADE:CREDIT")]
        subjects: Vec<String>,

        /// Read subjects from a CSV file with a grade,credit header
        #[arg(long, value_name = "FILE")]
        input: Option<String>,
    },

    /// Compute a cumulative GPA from semester GPA/credit pairs
    Cgpa {
        /// Semester as GPA:CREDITS, repeatable (e.g. -s 3.5:15 -s 3.8:12)
        #[arg(short = 's', long = "semester", value_name = "GPA:CREDITS")]
        semesters: Vec<String>,

        /// Read semesters from a CSV file with a gpa,credits header
        #[arg(long, value_name = "FILE")]
        input: Option<String>,
    },

    /// Print the letter-grade point table
    Scale,
}

pub fn parse_subject(raw: &str) -> Result<SubjectEntry> {
    let (grade, credit) = split_pair(raw, "GRADE:CREDIT")?;
    Ok(SubjectEntry { grade, credit })
}

pub fn parse_semester(raw: &str) -> Result<SemesterEntry> {
    let (gpa, credits) = split_pair(raw, "GPA:CREDITS")?;
    Ok(SemesterEntry { gpa, credits })
}

fn split_pair(raw: &str, expected: &str) -> Result<(String, String)> {
    match raw.split_once(':') {
        Some((left, right)) if !left.trim().is_empty() && !right.trim().is_empty() => {
            Ok((left.trim().to_string(), right.trim().to_string()))
        }
        _ => Err(GpaError::ConfigError {
            message: format!("expected {expected}, got '{raw}'"),
        }),
    }
}
