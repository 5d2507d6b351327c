pub mod average;
pub mod calculator;
pub mod engine;
pub mod roster;
pub mod scale;

pub use crate::domain::model::{Semester, SemesterEntry, Student, Subject, SubjectEntry};
pub use crate::utils::error::Result;
