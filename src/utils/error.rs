use thiserror::Error;

#[derive(Error, Debug)]
pub enum GpaError {
    #[error("{field} must be positive")]
    NotPositiveError { field: String },

    #[error("{field} must be between 0 and 4")]
    OutOfRangeError { field: String },

    #[error("{field} must be a number, got '{value}'")]
    NotNumericError { field: String, value: String },

    #[error("{field} is missing")]
    MissingEntryError { field: String },

    #[error("Roster file error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for {field}: {reason}")]
    InvalidConfigValueError { field: String, reason: String },
}

impl GpaError {
    /// True for input errors meant to be shown to the end user verbatim.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            GpaError::NotPositiveError { .. }
                | GpaError::OutOfRangeError { .. }
                | GpaError::NotNumericError { .. }
                | GpaError::MissingEntryError { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, GpaError>;
