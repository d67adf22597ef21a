//! Error taxonomy for the HID PID force feedback device model.
//!
//! Every host-triggered failure is recoverable: the device drops or rejects
//! the offending report and answers through the synchronous Feature/Status
//! report channel instead of resetting its state.
//!
//! - [`report`]: malformed or unknown reports (wrong size, unknown id, bad field)
//! - [`pool`]: effect slot addressing and lifecycle violations
//! - [`validation`]: configuration value checks
//! - [`common`]: the top-level [`PidError`] wrapper plus classification
//!
//! # Example
//!
//! ```
//! use pidff_errors::prelude::*;
//!
//! fn lookup(index: u8) -> PidResult<usize> {
//!     if index == 0 {
//!         return Err(PoolError::InvalidIndex(index).into());
//!     }
//!     Ok(usize::from(index) - 1)
//! }
//!
//! let err = lookup(0).err();
//! assert!(matches!(err.map(|e| e.category()), Some(ErrorCategory::InvalidIndex)));
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod common;
pub mod pool;
pub mod prelude;
pub mod report;
pub mod validation;

pub use common::{ErrorCategory, ErrorSeverity, PidError};
pub use pool::{BlockLoadStatus, PoolError};
pub use report::ReportError;
pub use validation::ValidationError;

/// A specialized `Result` type for device model operations.
pub type PidResult<T> = std::result::Result<T, PidError>;
