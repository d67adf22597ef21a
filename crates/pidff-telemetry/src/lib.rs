//! Axis telemetry for force feedback effect computation.
//!
//! [`AxisTelemetry`] differentiates raw absolute axis positions into speed
//! and acceleration every sampling tick, and optionally publishes smoothed
//! copies of each metric through a [`MetricFilter`].
//!
//! Differences use wrapping 32-bit arithmetic and are not range checked.
//! Callers feeding positions that jump by more than `i32::MAX` between
//! samples get wrapped speeds.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(static_mut_refs)]
#![deny(clippy::unwrap_used)]

pub mod filter;
pub mod metric;
pub mod telemetry;

pub use filter::{ExponentialSmoothing, MetricFilter, MovingAverage};
pub use metric::{Metric, TelemetrySnapshot};
pub use telemetry::{AxisTelemetry, AxisTelemetryBuilder};
