use anyhow::Result;
use gpa_calc::core::roster;
use gpa_calc::{GpaError, GradeEngine};
use tempfile::TempDir;

#[test]
fn test_subjects_roster_end_to_end() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("subjects.csv");
    std::fs::write(&path, "grade,credit\nA,3\nB,3\n")?;

    let entries = roster::load_subjects(&path)?;
    assert_eq!(entries.len(), 2);

    let value = GradeEngine::new().gpa("Ada", None, &entries)?;
    assert_eq!(value, 3.5);

    Ok(())
}

#[test]
fn test_semesters_roster_end_to_end() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("semesters.csv");
    std::fs::write(&path, "gpa,credits\n3.5,15\n3.8,12\n")?;

    let entries = roster::load_semesters(&path)?;
    let value = GradeEngine::new().cgpa(None, &entries)?;
    assert_eq!(value, 3.63);

    Ok(())
}

#[test]
fn test_roster_values_are_trimmed() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("subjects.csv");
    std::fs::write(&path, "grade,credit\n A , 3.0 \n")?;

    let entries = roster::load_subjects(&path)?;
    assert_eq!(entries[0].grade, "A");
    assert_eq!(entries[0].credit, "3.0");

    Ok(())
}

#[test]
fn test_roster_rows_still_go_through_validation() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("subjects.csv");
    std::fs::write(&path, "grade,credit\nA,-3\n")?;

    let entries = roster::load_subjects(&path)?;
    let err = GradeEngine::new().gpa("", None, &entries).unwrap_err();
    assert_eq!(err.to_string(), "Credit 1 must be positive");

    Ok(())
}

#[test]
fn test_missing_roster_file_is_an_error() {
    let result = roster::load_subjects("no/such/file.csv");
    assert!(matches!(result, Err(GpaError::CsvError(_))));
}

#[test]
fn test_short_roster_row_is_an_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("subjects.csv");
    std::fs::write(&path, "grade,credit\nA\n")?;

    let result = roster::load_subjects(&path);
    assert!(matches!(result, Err(GpaError::CsvError(_))));

    Ok(())
}
