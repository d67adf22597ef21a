//! USB HID PID force feedback report layouts.
//!
//! This crate is I/O-free and allocation-free. It defines the byte-exact
//! Output, Feature and Input reports exchanged between a force feedback
//! joystick and its host driver, plus the wire-domain constants they rely on.
//!
//! All multi-byte fields are little-endian. Field order and widths are a
//! contract with unmodifiable host drivers; layouts are written and read
//! field-by-field and never depend on in-memory struct packing.
//!
//! # Example
//!
//! ```
//! use pidff_reports::{OutputReport, PidReport, SetConstantForceReport};
//!
//! let report = SetConstantForceReport { effect_block_index: 1, magnitude: -128 };
//! let bytes = report.to_bytes();
//! assert_eq!(bytes, [0x05, 0x01, 0x80, 0xFF]);
//!
//! let decoded = OutputReport::decode(&bytes);
//! assert_eq!(decoded, Ok(OutputReport::SetConstantForce(report)));
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(static_mut_refs)]
#![deny(clippy::unwrap_used)]

pub mod codec;
pub mod constants;
pub mod effect_type;
pub mod feature;
pub mod flags;
pub mod ids;
pub mod input;
pub mod output;
pub mod report;
pub mod units;

pub use codec::{PidReport, ReportReader, ReportWriter};
pub use constants::*;
pub use effect_type::{EffectType, ParameterKind};
pub use feature::{
    BLOCK_LOAD_LEN, BlockLoadReport, CREATE_NEW_EFFECT_LEN, CreateNewEffectReport, PID_POOL_LEN,
    PidPoolReport,
};
pub use flags::{AxisEnable, DeviceControl, MemoryManagement, PidStatusFlags};
pub use input::{PID_STATUS_LEN, PidStatusReport, WHEEL_INPUT_AXES, WHEEL_INPUT_LEN, WheelInputReport};
pub use output::*;
pub use pidff_errors::{BlockLoadStatus, ReportError};
pub use report::{FeatureReport, OutputReport};
pub use units::{angle_to_radians, direction_to_radians, gain_to_physical, to_lt_end_16};
