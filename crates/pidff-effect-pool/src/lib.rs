//! Effect slot pool for HID PID force feedback devices.
//!
//! A fixed array of effect slots addressed by the host's 1-based effect
//! block index. Each slot carries its decoded Set Effect header, up to two
//! per-axis parameter blocks, an optional envelope and live playback state.
//!
//! No heap allocation happens after construction; capacity is the const
//! generic `N` (40 by default, matching the PID Pool capability report).
//!
//! # Concurrency
//!
//! The slot state byte is an atomic cell. Pool mutators take `&mut self`, so
//! callers sharing a pool between a transport context and a tick context
//! must serialise access; the atomic state keeps readers of a slot that see
//! `PLAYING` consistent with the configuration written before it. [`EffectPool::tick`]
//! only ever moves PLAYING to ALLOCATED, never the reverse.
//!
//! # Example
//!
//! ```
//! use pidff_effect_pool::{EffectPool, SlotState};
//! use pidff_reports::{EffectOperation, EffectType, SetEffectReport};
//!
//! # fn main() -> Result<(), pidff_errors::PoolError> {
//! let mut pool: EffectPool = EffectPool::new();
//! let index = pool.create_effect(EffectType::Sine)?;
//!
//! let mut block = SetEffectReport::new(index, EffectType::Sine);
//! block.duration = 100;
//! pool.set_effect(block)?;
//! pool.effect_operation(index, EffectOperation::Start, 1)?;
//!
//! pool.tick(100);
//! assert_eq!(pool.state(index)?, SlotState::Playing);
//! pool.tick(101);
//! assert_eq!(pool.state(index)?, SlotState::Allocated);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(static_mut_refs)]
#![deny(clippy::unwrap_used)]

pub mod parameters;
pub mod pool;
pub mod slot;
pub mod state;

pub use parameters::{CustomForce, EffectParameter};
pub use pool::{EffectPool, TickSummary};
pub use slot::{EffectSlot, LOOP_INFINITE, direction_unit_vector};
pub use state::{SlotState, StateCell};
