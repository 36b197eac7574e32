use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Invalid value for {field}: {reason}")]
    InvalidField {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl RecordError {
    pub fn invalid_field(field: &'static str, value: impl ToString, reason: impl Into<String>) -> Self {
        RecordError::InvalidField {
            field,
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Name of the rejected field, for validation errors.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            RecordError::InvalidField { field, .. } => Some(*field),
            _ => None,
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            RecordError::InvalidField { reason, .. } => Some(reason.as_str()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RecordError>;
