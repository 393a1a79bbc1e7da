use std::fmt;
use thiserror::Error;

/// Outcome of validating a whole configuration document.
pub type ValidationResult = Result<(), ValidationError>;

/// Reason tag attached to a failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationReason {
    MissingField,
    InvalidNameFormat,
}

impl ValidationReason {
    pub fn as_str(self) -> &'static str {
        match self {
            ValidationReason::MissingField => "missing_field",
            ValidationReason::InvalidNameFormat => "invalid_name_format",
        }
    }
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Instance {index} [{label}] is missing required field '{field}'")]
    MissingField {
        index: usize,
        label: String,
        field: &'static str,
    },

    #[error(
        "Instance {index} [{label}] has invalid name '{name}': only lowercase letters and digits are allowed"
    )]
    InvalidNameFormat {
        index: usize,
        label: String,
        name: String,
    },
}

impl ValidationError {
    pub fn reason(&self) -> ValidationReason {
        match self {
            ValidationError::MissingField { .. } => ValidationReason::MissingField,
            ValidationError::InvalidNameFormat { .. } => ValidationReason::InvalidNameFormat,
        }
    }
}
