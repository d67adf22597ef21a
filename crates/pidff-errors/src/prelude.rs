//! Convenience re-exports for error handling.

pub use crate::{
    PidResult,
    common::{ErrorCategory, ErrorSeverity, PidError},
    pool::{BlockLoadStatus, PoolError},
    report::ReportError,
    validation::ValidationError,
};
