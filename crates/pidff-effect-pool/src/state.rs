//! Slot lifecycle state and its interrupt-safe storage cell.

use std::sync::atomic::{AtomicU8, Ordering};

const STATE_FREE: u8 = 0;
const STATE_ALLOCATED: u8 = 1;
const STATE_PLAYING: u8 = 2;

/// Lifecycle state of one effect slot.
///
/// `FREE -> ALLOCATED -> PLAYING -> ALLOCATED -> FREE`; any state may go
/// straight to `FREE` through Block Free or a device reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum SlotState {
    #[default]
    Free = STATE_FREE,
    Allocated = STATE_ALLOCATED,
    Playing = STATE_PLAYING,
}

impl SlotState {
    fn from_u8(value: u8) -> Self {
        match value {
            STATE_ALLOCATED => Self::Allocated,
            STATE_PLAYING => Self::Playing,
            _ => Self::Free,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Free => "FREE",
            Self::Allocated => "ALLOCATED",
            Self::Playing => "PLAYING",
        }
    }
}

/// Single-byte state cell shared between the transport and tick contexts.
///
/// Stores publish with `Release` and loads observe with `Acquire`: once a
/// reader sees `PLAYING`, every slot field written before the transition is
/// visible to it. This byte is the only handshake between the two contexts.
#[derive(Debug, Default)]
pub struct StateCell(AtomicU8);

impl StateCell {
    pub const fn new(state: SlotState) -> Self {
        Self(AtomicU8::new(state as u8))
    }

    pub fn load(&self) -> SlotState {
        SlotState::from_u8(self.0.load(Ordering::Acquire))
    }

    pub fn store(&self, state: SlotState) {
        self.0.store(state.as_u8(), Ordering::Release);
    }

    /// Move from `from` to `to` only if the cell still holds `from`.
    ///
    /// Returns `false` when another context changed the state first.
    pub fn transition(&self, from: SlotState, to: SlotState) -> bool {
        self.0
            .compare_exchange(from.as_u8(), to.as_u8(), Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}
