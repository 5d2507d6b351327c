use crate::core::average::weighted_average;
use crate::core::scale::point_for;
use crate::domain::model::{Semester, Student};

/// GPA for one student's term: subject grade points weighted by credits.
pub fn semester_gpa(student: &Student) -> f64 {
    weighted_average(
        student
            .subjects
            .iter()
            .map(|subject| (point_for(&subject.grade), subject.credit)),
    )
}

/// Cumulative GPA: per-semester GPAs weighted by semester credit totals.
pub fn cumulative_gpa(semesters: &[Semester]) -> f64 {
    weighted_average(
        semesters
            .iter()
            .map(|semester| (semester.gpa, semester.credits)),
    )
}
