//! Configuration validation errors.

use crate::common::ErrorSeverity;

/// Validation error types.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Value is structurally invalid
    #[error("Invalid value for field '{field}': {reason}")]
    Invalid {
        /// Field name
        field: String,
        /// Reason
        reason: String,
    },
}

impl ValidationError {
    /// Create an invalid value error.
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Get the error severity.
    pub fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_display() {
        let err = ValidationError::invalid("memory_management", "unknown bits 0x80");
        assert!(err.to_string().contains("memory_management"));
    }
}
