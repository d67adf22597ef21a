//! HID PID force feedback device model.
//!
//! Glues the report wire model to the effect pool: raw Output and Feature
//! report bytes from the USB transport go in, pool mutations and
//! device-wide flag changes come out, and the PID Status, PID Pool and
//! Block Load replies are computed from live state.
//!
//! The crate performs no I/O. Transport, ADC sampling and force output
//! remain with the caller.
//!
//! # Example
//!
//! ```
//! use pidff_device::{DeviceConfig, PidDevice};
//! use pidff_reports::BlockLoadStatus;
//!
//! # fn main() -> pidff_errors::PidResult<()> {
//! let mut device: PidDevice = PidDevice::new(DeviceConfig::default())?;
//!
//! // Create New Effect: constant force, no extra bytes.
//! let load = device.handle_set_feature(&[0x01, 0x01, 0x00, 0x00])?;
//! assert_eq!(load.load_status, BlockLoadStatus::Success);
//! assert_eq!(load.effect_block_index, 1);
//!
//! // Effect Operation: start block 1 once.
//! device.handle_output(&[0x0A, 0x01, 0x01, 0x01])?;
//! assert!(device.status_report().playing);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(static_mut_refs)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod device;

pub use config::DeviceConfig;
pub use device::{PidDevice, wheel_input_report};
