//! Fixed-capacity effect slot pool.
//!
//! Slots are addressed by the 1-based effect block index the host sees;
//! index `i` lives at array position `i - 1`.

use pidff_errors::{PidResult, PoolError, ReportError};
use pidff_reports::{
    EffectOperation, EffectType, MAX_EFFECTS, ParameterKind, SetConditionReport,
    SetConstantForceReport, SetCustomForceDataReport, SetCustomForceReport, SetEffectReport,
    SetEnvelopeReport, SetPeriodicReport, SetRampForceReport, TYPE_SPECIFIC_BLOCK_OFFSET_1,
    TYPE_SPECIFIC_BLOCK_OFFSET_2, ids,
};
use tracing::{debug, trace, warn};

use crate::parameters::{CustomForce, EffectParameter};
use crate::slot::{EffectSlot, LOOP_INFINITE, direction_unit_vector};
use crate::state::SlotState;

/// What a [`EffectPool::tick`] call changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickSummary {
    /// Slots that ran out of loops and returned to ALLOCATED.
    pub stopped: usize,
    /// Slots that finished one loop and started the next.
    pub restarted: usize,
}

/// The effect slot pool.
///
/// `N` is the compile-time capacity reported to the host as
/// `maxSimultaneousEffects`. It must fit the 7-bit index of the PID Status
/// report.
#[derive(Debug)]
pub struct EffectPool<const N: usize = MAX_EFFECTS> {
    slots: [EffectSlot; N],
    now_ms: u32,
}

impl<const N: usize> Default for EffectPool<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> EffectPool<N> {
    const CAPACITY_CHECK: () = assert!(N >= 1 && N <= 0x7F, "pool capacity must be 1..=127");

    pub fn new() -> Self {
        let () = Self::CAPACITY_CHECK;
        Self {
            slots: std::array::from_fn(|_| EffectSlot::default()),
            now_ms: 0,
        }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// The last time passed to [`tick`](Self::tick).
    pub fn now_ms(&self) -> u32 {
        self.now_ms
    }

    /// Bytes of device memory one slot occupies.
    pub fn slot_size() -> usize {
        std::mem::size_of::<EffectSlot>()
    }

    /// Total effect memory, as exposed in the PID Pool report.
    pub fn ram_pool_size(&self) -> u16 {
        saturate_u16(N.saturating_mul(Self::slot_size()))
    }

    /// Memory held by FREE slots, as exposed in the PID Block Load report.
    pub fn ram_pool_available(&self) -> u16 {
        saturate_u16(self.free_count().saturating_mul(Self::slot_size()))
    }

    pub fn free_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_free()).count()
    }

    pub fn playing_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_playing()).count()
    }

    /// Slot for a 1-based index, in any state.
    pub fn slot(&self, index: u8) -> Option<&EffectSlot> {
        let position = usize::from(index).checked_sub(1)?;
        self.slots.get(position)
    }

    pub fn state(&self, index: u8) -> Result<SlotState, PoolError> {
        self.slot(index)
            .map(EffectSlot::state)
            .ok_or(PoolError::InvalidIndex(index))
    }

    /// Iterate over `(index, slot)` for every non-FREE slot.
    pub fn allocated(&self) -> impl Iterator<Item = (u8, &EffectSlot)> + '_ {
        self.iter().filter(|(_, s)| !s.is_free())
    }

    /// Iterate over `(index, slot)` for every PLAYING slot.
    pub fn playing(&self) -> impl Iterator<Item = (u8, &EffectSlot)> + '_ {
        self.iter().filter(|(_, s)| s.is_playing())
    }

    fn iter(&self) -> impl Iterator<Item = (u8, &EffectSlot)> + '_ {
        (1..=u8::MAX).zip(self.slots.iter())
    }

    fn slot_mut(&mut self, index: u8) -> Result<&mut EffectSlot, PoolError> {
        let position = usize::from(index)
            .checked_sub(1)
            .ok_or(PoolError::InvalidIndex(index))?;
        self.slots
            .get_mut(position)
            .ok_or(PoolError::InvalidIndex(index))
    }

    /// Slot for an update: must exist and not be FREE.
    fn configured_slot_mut(&mut self, index: u8) -> Result<&mut EffectSlot, PoolError> {
        let slot = self.slot_mut(index)?;
        if slot.is_free() {
            warn!("Rejected update of FREE effect block {}", index);
            return Err(PoolError::InvalidIndex(index));
        }
        Ok(slot)
    }

    /// Allocate the lowest FREE slot for `effect_type`.
    ///
    /// On `PoolExhausted` no slot is touched.
    pub fn create_effect(&mut self, effect_type: EffectType) -> Result<u8, PoolError> {
        let Some((index, slot)) = (1..=u8::MAX)
            .zip(self.slots.iter_mut())
            .find(|(_, s)| s.is_free())
        else {
            warn!("Effect pool exhausted ({} slots)", N);
            return Err(PoolError::PoolExhausted);
        };

        slot.clear();
        let block = SetEffectReport::new(index, effect_type);
        slot.direction_unit_vec = direction_unit_vector(&block);
        slot.block = Some(block);
        slot.state.store(SlotState::Allocated);

        debug!("Allocated effect block {} ({})", index, effect_type.name());
        Ok(index)
    }

    /// Replace the Set Effect header of an allocated or playing slot.
    ///
    /// Changing to a type with a different parameter kind drops the
    /// previously stored parameters.
    pub fn set_effect(&mut self, report: SetEffectReport) -> Result<(), PoolError> {
        let index = report.effect_block_index;
        let slot = self.configured_slot_mut(index)?;

        let previous_kind = slot.effect_type().map(EffectType::parameter_kind);
        if previous_kind != Some(report.effect_type.parameter_kind()) {
            slot.parameters = [EffectParameter::Unset; pidff_reports::NUM_AXES];
        }
        if !report.effect_type.accepts_envelope() {
            slot.envelope = None;
        }

        slot.direction_unit_vec = direction_unit_vector(&report);
        slot.block = Some(report);
        trace!(
            "Effect block {}: {} duration={} gain={}",
            index,
            report.effect_type.name(),
            report.duration,
            report.gain
        );
        Ok(())
    }

    pub fn set_envelope(&mut self, report: SetEnvelopeReport) -> Result<(), PoolError> {
        let index = report.effect_block_index;
        let slot = self.configured_slot_mut(index)?;
        let effect_type = slot.effect_type().ok_or(PoolError::InvalidIndex(index))?;
        if !effect_type.accepts_envelope() {
            warn!("Effect block {}: envelope on {} effect", index, effect_type.name());
            return Err(PoolError::ParameterMismatch {
                index,
                effect_type: effect_type.as_u8(),
                parameter: "envelope",
            });
        }
        slot.envelope = Some(report);
        Ok(())
    }

    /// Store condition parameters on the axis selected by the block offset.
    pub fn set_condition(&mut self, report: SetConditionReport) -> Result<(), PoolError> {
        self.store_parameter(
            report.effect_block_index,
            report.offset(),
            EffectParameter::Condition(report),
        )
    }

    pub fn set_periodic(&mut self, report: SetPeriodicReport) -> Result<(), PoolError> {
        self.store_parameter(
            report.effect_block_index,
            TYPE_SPECIFIC_BLOCK_OFFSET_1,
            EffectParameter::Periodic(report),
        )
    }

    pub fn set_constant_force(&mut self, report: SetConstantForceReport) -> Result<(), PoolError> {
        self.store_parameter(
            report.effect_block_index,
            TYPE_SPECIFIC_BLOCK_OFFSET_1,
            EffectParameter::Constant(report),
        )
    }

    pub fn set_ramp_force(&mut self, report: SetRampForceReport) -> Result<(), PoolError> {
        self.store_parameter(
            report.effect_block_index,
            TYPE_SPECIFIC_BLOCK_OFFSET_1,
            EffectParameter::Ramp(report),
        )
    }

    /// Record sample count and period; previously downloaded samples are kept.
    pub fn set_custom_force(&mut self, report: SetCustomForceReport) -> Result<(), PoolError> {
        let index = report.effect_block_index;
        let mut custom = self.custom_force(index)?;
        custom.sample_count = report.sample_count;
        custom.sample_period = report.sample_period;
        self.store_parameter(
            index,
            TYPE_SPECIFIC_BLOCK_OFFSET_1,
            EffectParameter::Custom(custom),
        )
    }

    /// Write one chunk of custom force samples.
    ///
    /// # Errors
    ///
    /// `InvalidField` when the chunk would overrun the slot's sample buffer;
    /// pool errors as for any other parameter update.
    pub fn set_custom_force_data(&mut self, report: SetCustomForceDataReport) -> PidResult<()> {
        let index = report.effect_block_index;
        let mut custom = self.custom_force(index)?;
        if !custom.write_chunk(usize::from(report.data_offset), &report.data) {
            warn!(
                "Effect block {}: custom force data offset {} overruns buffer",
                index, report.data_offset
            );
            return Err(ReportError::invalid_field(
                ids::output::SET_CUSTOM_FORCE_DATA,
                "dataOffset",
                report.data_offset,
            )
            .into());
        }
        self.store_parameter(
            index,
            TYPE_SPECIFIC_BLOCK_OFFSET_1,
            EffectParameter::Custom(custom),
        )?;
        Ok(())
    }

    /// Current custom force storage of a custom slot, or an empty buffer.
    fn custom_force(&mut self, index: u8) -> Result<CustomForce, PoolError> {
        let slot = self.configured_slot_mut(index)?;
        let custom = slot
            .parameters
            .first()
            .and_then(EffectParameter::as_custom)
            .copied()
            .unwrap_or_default();
        Ok(custom)
    }

    fn store_parameter(
        &mut self,
        index: u8,
        axis: u8,
        parameter: EffectParameter,
    ) -> Result<(), PoolError> {
        let slot = self.configured_slot_mut(index)?;
        let effect_type = slot.effect_type().ok_or(PoolError::InvalidIndex(index))?;
        let kind = parameter.kind();

        if kind != Some(effect_type.parameter_kind()) {
            let parameter = kind.map_or("unset", ParameterKind::name);
            warn!(
                "Effect block {}: {} parameters on {} effect",
                index,
                parameter,
                effect_type.name()
            );
            return Err(PoolError::ParameterMismatch {
                index,
                effect_type: effect_type.as_u8(),
                parameter,
            });
        }
        if axis != TYPE_SPECIFIC_BLOCK_OFFSET_1 && axis != TYPE_SPECIFIC_BLOCK_OFFSET_2 {
            warn!("Effect block {}: parameter block offset {} names no axis", index, axis);
            return Err(PoolError::InvalidAxis(axis));
        }

        let target = slot
            .parameters
            .get_mut(usize::from(axis))
            .ok_or(PoolError::InvalidAxis(axis))?;
        *target = parameter;
        Ok(())
    }

    /// Apply an Effect Operation.
    ///
    /// Start on a PLAYING slot restarts it. A `loop_count` of 0 plays once;
    /// [`LOOP_INFINITE`] repeats until stopped.
    pub fn effect_operation(
        &mut self,
        index: u8,
        operation: EffectOperation,
        loop_count: u8,
    ) -> Result<(), PoolError> {
        match operation {
            EffectOperation::Start => self.start(index, loop_count),
            EffectOperation::StartSolo => self.start_solo(index, loop_count),
            EffectOperation::Stop => self.stop(index),
        }
    }

    pub fn start(&mut self, index: u8, loop_count: u8) -> Result<(), PoolError> {
        let now_ms = self.now_ms;
        let slot = self.slot_mut(index)?;
        if slot.is_free() {
            warn!("Cannot start FREE effect block {}", index);
            return Err(PoolError::transition(index, SlotState::Free.name(), "start"));
        }

        slot.loops_remaining = loop_count.max(1);
        slot.restart(now_ms);
        slot.state.store(SlotState::Playing);
        debug!(
            "Started effect block {} at {}ms (loops={})",
            index, now_ms, loop_count
        );
        Ok(())
    }

    /// Start `index` and stop every other PLAYING slot.
    pub fn start_solo(&mut self, index: u8, loop_count: u8) -> Result<(), PoolError> {
        let target = self.slot(index).ok_or(PoolError::InvalidIndex(index))?;
        if target.is_free() {
            warn!("Cannot solo-start FREE effect block {}", index);
            return Err(PoolError::transition(index, SlotState::Free.name(), "start"));
        }

        let mut stopped = 0usize;
        for (other, slot) in (1..=u8::MAX).zip(self.slots.iter()) {
            if other != index && slot.state.transition(SlotState::Playing, SlotState::Allocated) {
                stopped = stopped.saturating_add(1);
            }
        }
        debug!("Solo start of effect block {} stopped {} others", index, stopped);
        self.start(index, loop_count)
    }

    pub fn stop(&mut self, index: u8) -> Result<(), PoolError> {
        let slot = self.slot_mut(index)?;
        if !slot.state.transition(SlotState::Playing, SlotState::Allocated) {
            let from = slot.state().name();
            warn!("Cannot stop effect block {} while {}", index, from);
            return Err(PoolError::transition(index, from, "stop"));
        }
        debug!("Stopped effect block {}", index);
        Ok(())
    }

    /// Stop every PLAYING slot; slots stay ALLOCATED. Returns how many stopped.
    pub fn stop_all(&mut self) -> usize {
        let stopped = self
            .slots
            .iter()
            .filter(|s| s.state.transition(SlotState::Playing, SlotState::Allocated))
            .count();
        debug!("Stopped all effects ({} playing)", stopped);
        stopped
    }

    /// Return a slot to FREE, clearing its data.
    ///
    /// Index 0 frees every slot. Freeing a FREE slot is a no-op.
    pub fn block_free(&mut self, index: u8) -> Result<(), PoolError> {
        if index == 0 {
            self.reset();
            return Ok(());
        }
        let slot = self.slot_mut(index)?;
        if slot.is_free() {
            trace!("Effect block {} already FREE", index);
            return Ok(());
        }
        slot.clear();
        debug!("Freed effect block {}", index);
        Ok(())
    }

    /// Free every slot.
    pub fn reset(&mut self) {
        for slot in &mut self.slots {
            slot.clear();
        }
        debug!("Effect pool reset ({} slots)", N);
    }

    /// Advance playback time to `now_ms`.
    ///
    /// An iteration of a finite effect ends once its elapsed time exceeds
    /// `duration`. A late tick consumes every iteration it covers: the slot
    /// either restarts on the boundary of the current iteration or, once the
    /// loop count is spent, returns to ALLOCATED. A tick never starts a
    /// slot, so a concurrent Start always wins.
    pub fn tick(&mut self, now_ms: u32) -> TickSummary {
        self.now_ms = now_ms;
        let mut summary = TickSummary::default();

        for (index, slot) in (1..=u8::MAX).zip(self.slots.iter_mut()) {
            if !slot.is_playing() {
                continue;
            }
            slot.elapsed_time = now_ms.wrapping_sub(slot.start_time);

            let Some(play_time) = slot.play_time() else {
                continue;
            };
            if slot.elapsed_time <= play_time {
                continue;
            }

            // Iterations needed to bring elapsed time back within play time.
            let loops = slot.loops_remaining;
            let iterations = slot
                .elapsed_time
                .saturating_sub(1)
                .checked_div(play_time)
                .filter(|&n| loops == LOOP_INFINITE || n < u32::from(loops));

            match iterations {
                Some(n) => {
                    if loops != LOOP_INFINITE {
                        slot.loops_remaining = slot
                            .loops_remaining
                            .saturating_sub(u8::try_from(n).unwrap_or(u8::MAX));
                    }
                    slot.start_time = slot.start_time.wrapping_add(n.wrapping_mul(play_time));
                    slot.elapsed_time = now_ms.wrapping_sub(slot.start_time);
                    summary.restarted = summary
                        .restarted
                        .saturating_add(usize::try_from(n).unwrap_or(usize::MAX));
                    trace!(
                        "Effect block {} looped {} time(s) ({} remaining)",
                        index, n, slot.loops_remaining
                    );
                }
                None => {
                    if slot.state.transition(SlotState::Playing, SlotState::Allocated) {
                        slot.loops_remaining = 0;
                        summary.stopped = summary.stopped.saturating_add(1);
                        trace!("Effect block {} expired after {}ms", index, slot.elapsed_time);
                    }
                }
            }
        }
        summary
    }
}

fn saturate_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pidff_errors::PidError;
    use pidff_reports::{CUSTOM_FORCE_CHUNK_LEN, EffectType};

    type Pool = EffectPool<4>;

    fn allocate(pool: &mut Pool, effect_type: EffectType) -> Result<u8, PoolError> {
        pool.create_effect(effect_type)
    }

    #[test]
    fn test_create_lowest_free() -> Result<(), PoolError> {
        let mut pool = Pool::new();
        assert_eq!(allocate(&mut pool, EffectType::Sine)?, 1);
        assert_eq!(allocate(&mut pool, EffectType::Spring)?, 2);
        pool.block_free(1)?;
        assert_eq!(allocate(&mut pool, EffectType::Constant)?, 1);
        assert_eq!(pool.state(1)?, SlotState::Allocated);
        Ok(())
    }

    #[test]
    fn test_exhaustion_leaves_pool_untouched() -> Result<(), PoolError> {
        let mut pool = Pool::new();
        for _ in 0..4 {
            allocate(&mut pool, EffectType::Ramp)?;
        }
        pool.start(2, 1)?;
        assert_eq!(pool.create_effect(EffectType::Sine), Err(PoolError::PoolExhausted));
        assert_eq!(pool.free_count(), 0);
        assert_eq!(pool.state(2)?, SlotState::Playing);
        Ok(())
    }

    #[test]
    fn test_index_bounds() {
        let mut pool = Pool::new();
        assert_eq!(pool.state(0), Err(PoolError::InvalidIndex(0)));
        assert_eq!(pool.state(5), Err(PoolError::InvalidIndex(5)));
        assert_eq!(pool.block_free(5), Err(PoolError::InvalidIndex(5)));
        assert!(pool.slot(0).is_none());
    }

    #[test]
    fn test_update_free_slot_rejected() {
        let mut pool = Pool::new();
        let report = SetConstantForceReport {
            effect_block_index: 1,
            magnitude: 100,
        };
        assert_eq!(pool.set_constant_force(report), Err(PoolError::InvalidIndex(1)));
        assert_eq!(
            pool.set_effect(SetEffectReport::new(1, EffectType::Constant)),
            Err(PoolError::InvalidIndex(1))
        );
    }

    #[test]
    fn test_parameter_kind_enforced() -> Result<(), PoolError> {
        let mut pool = Pool::new();
        let index = allocate(&mut pool, EffectType::Spring)?;
        let result = pool.set_periodic(SetPeriodicReport {
            effect_block_index: index,
            ..Default::default()
        });
        assert_eq!(
            result,
            Err(PoolError::ParameterMismatch {
                index,
                effect_type: EffectType::Spring.as_u8(),
                parameter: "periodic",
            })
        );
        let envelope = SetEnvelopeReport {
            effect_block_index: index,
            ..Default::default()
        };
        assert!(pool.set_envelope(envelope).is_err());
        Ok(())
    }

    #[test]
    fn test_condition_axes() -> Result<(), PoolError> {
        let mut pool = Pool::new();
        let index = allocate(&mut pool, EffectType::Damper)?;
        for axis in [0u8, 1] {
            pool.set_condition(SetConditionReport {
                effect_block_index: index,
                parameter_block_offset: axis,
                positive_coefficient: 10 + u16::from(axis),
                ..Default::default()
            })?;
        }
        let slot = pool.slot(index).ok_or(PoolError::InvalidIndex(index))?;
        let coefficients: Vec<_> = slot
            .parameters()
            .iter()
            .filter_map(|p| p.as_condition().map(|c| c.positive_coefficient))
            .collect();
        assert_eq!(coefficients, vec![10, 11]);

        let bad = SetConditionReport {
            effect_block_index: index,
            parameter_block_offset: 0x02,
            ..Default::default()
        };
        assert_eq!(pool.set_condition(bad), Err(PoolError::InvalidAxis(2)));
        Ok(())
    }

    #[test]
    fn test_set_effect_type_change_clears_parameters() -> Result<(), PoolError> {
        let mut pool = Pool::new();
        let index = allocate(&mut pool, EffectType::Constant)?;
        pool.set_constant_force(SetConstantForceReport {
            effect_block_index: index,
            magnitude: -50,
        })?;
        pool.set_effect(SetEffectReport::new(index, EffectType::Sine))?;
        let slot = pool.slot(index).ok_or(PoolError::InvalidIndex(index))?;
        assert!(slot.parameters().iter().all(|p| !p.is_set()));
        assert_eq!(slot.effect_type(), Some(EffectType::Sine));
        Ok(())
    }

    #[test]
    fn test_custom_force_storage() -> Result<(), PidError> {
        let mut pool = Pool::new();
        let index = allocate(&mut pool, EffectType::Custom)?;
        let mut data = [0i8; CUSTOM_FORCE_CHUNK_LEN];
        data[0] = 7;
        pool.set_custom_force_data(SetCustomForceDataReport {
            effect_block_index: index,
            data_offset: 12,
            data,
        })?;
        pool.set_custom_force(SetCustomForceReport {
            effect_block_index: index,
            sample_count: 24,
            sample_period: 5,
        })?;

        let slot = pool.slot(index).ok_or(PoolError::InvalidIndex(index))?;
        let custom = slot
            .parameter(0)
            .and_then(EffectParameter::as_custom)
            .ok_or(PoolError::InvalidIndex(index))?;
        assert_eq!(custom.active_samples().len(), 24);
        assert_eq!(custom.active_samples().get(12), Some(&7));
        assert_eq!(custom.sample_period, 5);

        let overflow = pool.set_custom_force_data(SetCustomForceDataReport {
            effect_block_index: index,
            data_offset: 40,
            data,
        });
        assert!(matches!(
            overflow,
            Err(PidError::Report(ReportError::InvalidField { field: "dataOffset", .. }))
        ));
        Ok(())
    }

    #[test]
    fn test_start_stop_transitions() -> Result<(), PoolError> {
        let mut pool = Pool::new();
        assert_eq!(
            pool.start(1, 1),
            Err(PoolError::transition(1, "FREE", "start"))
        );
        let index = allocate(&mut pool, EffectType::Triangle)?;
        assert_eq!(
            pool.stop(index),
            Err(PoolError::transition(index, "ALLOCATED", "stop"))
        );
        pool.effect_operation(index, EffectOperation::Start, 1)?;
        assert_eq!(pool.state(index)?, SlotState::Playing);
        pool.effect_operation(index, EffectOperation::Stop, 0)?;
        assert_eq!(pool.state(index)?, SlotState::Allocated);
        Ok(())
    }

    #[test]
    fn test_free_playing_slot() -> Result<(), PoolError> {
        let mut pool = Pool::new();
        let index = allocate(&mut pool, EffectType::Friction)?;
        pool.start(index, 1)?;
        pool.block_free(index)?;
        assert_eq!(pool.state(index)?, SlotState::Free);
        pool.block_free(index)?;
        Ok(())
    }

    #[test]
    fn test_block_free_zero_clears_all() -> Result<(), PoolError> {
        let mut pool = Pool::new();
        for _ in 0..3 {
            allocate(&mut pool, EffectType::Sine)?;
        }
        pool.start(1, 1)?;
        pool.block_free(0)?;
        assert_eq!(pool.free_count(), 4);
        assert_eq!(pool.ram_pool_available(), pool.ram_pool_size());
        Ok(())
    }

    #[test]
    fn test_ram_pool_accounting() -> Result<(), PoolError> {
        let mut pool = Pool::new();
        let slot_size = u16::try_from(Pool::slot_size()).unwrap_or(u16::MAX);
        assert_eq!(pool.ram_pool_size(), slot_size.saturating_mul(4));
        allocate(&mut pool, EffectType::Sine)?;
        assert_eq!(pool.ram_pool_available(), slot_size.saturating_mul(3));
        Ok(())
    }

    #[test]
    fn test_tick_loops_then_stops() -> Result<(), PoolError> {
        let mut pool = Pool::new();
        let index = allocate(&mut pool, EffectType::Square)?;
        let mut block = SetEffectReport::new(index, EffectType::Square);
        block.duration = 10;
        pool.set_effect(block)?;
        pool.start(index, 2)?;

        assert_eq!(pool.tick(11).restarted, 1);
        assert_eq!(pool.state(index)?, SlotState::Playing);
        assert_eq!(pool.slot(index).map(|s| s.start_time()), Some(10));
        assert_eq!(pool.tick(20).stopped, 0);
        assert_eq!(pool.tick(21).stopped, 1);
        assert_eq!(pool.state(index)?, SlotState::Allocated);
        Ok(())
    }

    #[test]
    fn test_infinite_duration_never_expires() -> Result<(), PoolError> {
        let mut pool = Pool::new();
        let index = allocate(&mut pool, EffectType::Spring)?;
        pool.start(index, 1)?;
        let summary = pool.tick(u32::MAX);
        assert_eq!(summary, TickSummary::default());
        assert_eq!(pool.state(index)?, SlotState::Playing);
        Ok(())
    }
}
