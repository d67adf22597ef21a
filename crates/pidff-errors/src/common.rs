//! Top-level error type and classification.

use core::fmt;

use crate::{PoolError, ReportError, ValidationError};

/// Top-level error wrapping every device model failure.
#[derive(Debug, thiserror::Error)]
pub enum PidError {
    /// Malformed or unknown report
    #[error("Malformed report: {0}")]
    Report(#[from] ReportError),

    /// Effect slot pool failure
    #[error("Effect pool: {0}")]
    Pool(#[from] PoolError),

    /// Configuration validation failure
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration could not be parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PidError {
    /// Get the error category for classification.
    pub fn category(&self) -> ErrorCategory {
        match self {
            PidError::Report(_) => ErrorCategory::MalformedReport,
            PidError::Pool(PoolError::InvalidIndex(_)) => ErrorCategory::InvalidIndex,
            PidError::Pool(PoolError::PoolExhausted) => ErrorCategory::PoolExhausted,
            PidError::Pool(PoolError::InvalidTransition { .. }) => {
                ErrorCategory::InvalidTransition
            }
            PidError::Pool(_) => ErrorCategory::InvalidRequest,
            PidError::Validation(_) | PidError::Config(_) => ErrorCategory::Validation,
        }
    }

    /// Get the error severity level.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PidError::Report(e) => e.severity(),
            PidError::Pool(e) => e.severity(),
            PidError::Validation(e) => e.severity(),
            PidError::Config(_) => ErrorSeverity::Error,
        }
    }

    /// Host-triggered errors never require a device reset.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, PidError::Report(_) | PidError::Pool(_))
    }

    /// Create a configuration error with a message.
    pub fn config(msg: impl Into<String>) -> Self {
        PidError::Config(msg.into())
    }
}

/// Error category for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCategory {
    /// Wrong size, unknown id or out-of-domain field
    MalformedReport = 0,
    /// Effect block index 0, beyond capacity, or FREE
    InvalidIndex = 1,
    /// Create with no free slot
    PoolExhausted = 2,
    /// Illegal state machine step
    InvalidTransition = 3,
    /// Request that is well-formed but does not apply to the slot
    InvalidRequest = 4,
    /// Configuration errors
    Validation = 5,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::MalformedReport => write!(f, "MalformedReport"),
            ErrorCategory::InvalidIndex => write!(f, "InvalidIndex"),
            ErrorCategory::PoolExhausted => write!(f, "PoolExhausted"),
            ErrorCategory::InvalidTransition => write!(f, "InvalidTransition"),
            ErrorCategory::InvalidRequest => write!(f, "InvalidRequest"),
            ErrorCategory::Validation => write!(f, "Validation"),
        }
    }
}

/// Error severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ErrorSeverity {
    /// Informational, no action required
    Info = 0,
    /// Warning, may require attention
    Warning = 1,
    /// Error, operation failed
    Error = 2,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
        }
    }
}
