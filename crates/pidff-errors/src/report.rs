//! Wire-level report errors.
//!
//! All variants belong to the `MalformedReport` class: the report is dropped
//! and no device state changes.

use crate::common::ErrorSeverity;

/// A received (or to-be-sent) report does not match its fixed layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ReportError {
    /// Zero-length buffer, no report id to dispatch on.
    #[error("Empty report buffer")]
    Empty,

    /// The report id does not name any report of this kind.
    #[error("Unknown report id {0:#04x}")]
    UnknownReportId(u8),

    /// The byte count does not match the fixed size for the report id.
    #[error("Report {report_id:#04x}: expected {expected} bytes, got {actual}")]
    LengthMismatch {
        /// Report id that selected the layout
        report_id: u8,
        /// Fixed size of the layout
        expected: usize,
        /// Bytes actually supplied
        actual: usize,
    },

    /// A field carries a value outside its enumerated domain.
    #[error("Report {report_id:#04x}: invalid value {value} for field '{field}'")]
    InvalidField {
        /// Report id that selected the layout
        report_id: u8,
        /// Field name
        field: &'static str,
        /// Offending raw value
        value: u32,
    },
}

impl ReportError {
    /// Create a length mismatch error.
    pub fn length(report_id: u8, expected: usize, actual: usize) -> Self {
        ReportError::LengthMismatch {
            report_id,
            expected,
            actual,
        }
    }

    /// Create an invalid field error.
    pub fn invalid_field(report_id: u8, field: &'static str, value: impl Into<u32>) -> Self {
        ReportError::InvalidField {
            report_id,
            field,
            value: value.into(),
        }
    }

    /// Get the error severity.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ReportError::Empty => ErrorSeverity::Info,
            ReportError::UnknownReportId(_) => ErrorSeverity::Warning,
            ReportError::LengthMismatch { .. } | ReportError::InvalidField { .. } => {
                ErrorSeverity::Error
            }
        }
    }

    /// The report id involved, if one was read.
    pub fn report_id(&self) -> Option<u8> {
        match self {
            ReportError::Empty => None,
            ReportError::UnknownReportId(id) => Some(*id),
            ReportError::LengthMismatch { report_id, .. }
            | ReportError::InvalidField { report_id, .. } => Some(*report_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_display() {
        let err = ReportError::length(0x01, 16, 15);
        let msg = err.to_string();
        assert!(msg.contains("0x01"));
        assert!(msg.contains("16"));
        assert!(msg.contains("15"));
    }

    #[test]
    fn test_report_id_accessor() {
        assert_eq!(ReportError::Empty.report_id(), None);
        assert_eq!(ReportError::UnknownReportId(9).report_id(), Some(9));
        assert_eq!(
            ReportError::invalid_field(10, "operation", 7u8).report_id(),
            Some(10)
        );
    }

    #[test]
    fn test_severity() {
        assert_eq!(ReportError::Empty.severity(), ErrorSeverity::Info);
        assert_eq!(
            ReportError::length(1, 2, 3).severity(),
            ErrorSeverity::Error
        );
    }
}
