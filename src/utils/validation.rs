use crate::utils::error::{GpaError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Parses a raw form value as a count. Parses signed first so "-1" reports
/// not-positive rather than unparsable.
pub fn positive_int(field_name: &str, raw: &str) -> Result<usize> {
    let value: i64 = raw.trim().parse().map_err(|_| GpaError::NotNumericError {
        field: field_name.to_string(),
        value: raw.to_string(),
    })?;

    if value <= 0 {
        return Err(GpaError::NotPositiveError {
            field: field_name.to_string(),
        });
    }

    Ok(value as usize)
}

pub fn positive_float(field_name: &str, raw: &str) -> Result<f64> {
    let value: f64 = raw.trim().parse().map_err(|_| GpaError::NotNumericError {
        field: field_name.to_string(),
        value: raw.to_string(),
    })?;

    if value <= 0.0 {
        return Err(GpaError::NotPositiveError {
            field: field_name.to_string(),
        });
    }

    Ok(value)
}

/// Parses a raw GPA value. Both boundaries are inclusive.
pub fn gpa_range(field_name: &str, raw: &str) -> Result<f64> {
    let value: f64 = raw.trim().parse().map_err(|_| GpaError::NotNumericError {
        field: field_name.to_string(),
        value: raw.to_string(),
    })?;

    if value < 0.0 || value > 4.0 {
        return Err(GpaError::OutOfRangeError {
            field: field_name.to_string(),
        });
    }

    Ok(value)
}

pub fn non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GpaError::InvalidConfigValueError {
            field: field_name.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
