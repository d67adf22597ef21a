//! One effect slot: configuration, parameters and live playback state.

use pidff_reports::{
    AxisEnable, EffectType, NUM_AXES, SetEffectReport, SetEnvelopeReport, USB_DURATION_INFINITE,
    direction_to_radians,
};

use crate::parameters::EffectParameter;
use crate::state::{SlotState, StateCell};

/// Loop count meaning "repeat until stopped".
pub const LOOP_INFINITE: u8 = 0xFF;

/// A single effect slot.
///
/// Only `state` is shared with the tick context; every other field is
/// written by the transport context and read after observing the state.
#[derive(Debug, Default)]
pub struct EffectSlot {
    pub(crate) state: StateCell,
    pub(crate) elapsed_time: u32,
    pub(crate) start_time: u32,
    pub(crate) loops_remaining: u8,
    pub(crate) direction_unit_vec: [f32; NUM_AXES],
    pub(crate) block: Option<SetEffectReport>,
    pub(crate) parameters: [EffectParameter; NUM_AXES],
    pub(crate) envelope: Option<SetEnvelopeReport>,
}

impl EffectSlot {
    pub fn state(&self) -> SlotState {
        self.state.load()
    }

    pub fn is_free(&self) -> bool {
        self.state() == SlotState::Free
    }

    pub fn is_playing(&self) -> bool {
        self.state() == SlotState::Playing
    }

    /// Milliseconds since playback (re)started.
    pub fn elapsed_time(&self) -> u32 {
        self.elapsed_time
    }

    /// Pool tick at which playback (re)started.
    pub fn start_time(&self) -> u32 {
        self.start_time
    }

    /// Remaining loop iterations, counting the current one.
    /// [`LOOP_INFINITE`] repeats forever.
    pub fn loops_remaining(&self) -> u8 {
        self.loops_remaining
    }

    pub fn direction_unit_vec(&self) -> [f32; NUM_AXES] {
        self.direction_unit_vec
    }

    /// The Set Effect header, or `None` while FREE.
    pub fn block(&self) -> Option<&SetEffectReport> {
        self.block.as_ref()
    }

    pub fn effect_type(&self) -> Option<EffectType> {
        self.block.map(|b| b.effect_type)
    }

    pub fn parameters(&self) -> &[EffectParameter; NUM_AXES] {
        &self.parameters
    }

    pub fn parameter(&self, axis: usize) -> Option<&EffectParameter> {
        self.parameters.get(axis)
    }

    pub fn envelope(&self) -> Option<&SetEnvelopeReport> {
        self.envelope.as_ref()
    }

    /// Play time of one loop iteration, or `None` for infinite effects.
    ///
    /// `start_delay` is carried for the force engine and does not extend
    /// the iteration.
    pub(crate) fn play_time(&self) -> Option<u32> {
        let block = self.block.as_ref()?;
        if block.duration == USB_DURATION_INFINITE {
            return None;
        }
        Some(u32::from(block.duration))
    }

    /// Drop all configuration and return to FREE.
    pub(crate) fn clear(&mut self) {
        self.elapsed_time = 0;
        self.start_time = 0;
        self.loops_remaining = 0;
        self.direction_unit_vec = [0.0; NUM_AXES];
        self.block = None;
        self.parameters = [EffectParameter::Unset; NUM_AXES];
        self.envelope = None;
        self.state.store(SlotState::Free);
    }

    pub(crate) fn restart(&mut self, now_ms: u32) {
        self.start_time = now_ms;
        self.elapsed_time = 0;
    }
}

/// Unit direction for a Set Effect header.
///
/// With `DIRECTION` enabled the polar `direction_x` byte selects the angle;
/// otherwise each enabled axis contributes a unit component.
pub fn direction_unit_vector(block: &SetEffectReport) -> [f32; NUM_AXES] {
    if block.enable_axis.contains(AxisEnable::DIRECTION) {
        let theta = direction_to_radians(block.direction_x);
        [theta.cos(), theta.sin()]
    } else {
        let component = |axis| {
            if block.enable_axis.contains(axis) {
                1.0
            } else {
                0.0
            }
        };
        [component(AxisEnable::X), component(AxisEnable::Y)]
    }
}
