//! Host → device Output reports.
//!
//! Each type mirrors one fixed wire layout. Field order and widths follow the
//! device's HID report descriptor exactly; do not reorder.

use pidff_errors::ReportError;

use crate::codec::{PidReport, ReportReader, ReportWriter, encode_fixed};
use crate::constants::CUSTOM_FORCE_CHUNK_LEN;
use crate::effect_type::EffectType;
use crate::flags::{AxisEnable, DeviceControl};
use crate::ids::output as ids;

pub const SET_EFFECT_LEN: usize = 16;
pub const SET_ENVELOPE_LEN: usize = 10;
pub const SET_CONDITION_LEN: usize = 15;
pub const SET_PERIODIC_LEN: usize = 10;
pub const SET_CONSTANT_FORCE_LEN: usize = 4;
pub const SET_RAMP_FORCE_LEN: usize = 6;
pub const SET_CUSTOM_FORCE_DATA_LEN: usize = 4 + CUSTOM_FORCE_CHUNK_LEN;
pub const SET_DOWNLOAD_FORCE_SAMPLE_LEN: usize = 3;
pub const EFFECT_OPERATION_LEN: usize = 4;
pub const BLOCK_FREE_LEN: usize = 2;
pub const DEVICE_CONTROL_LEN: usize = 2;
pub const DEVICE_GAIN_LEN: usize = 2;
pub const SET_CUSTOM_FORCE_LEN: usize = 5;

fn read_effect_type(report_id: u8, reader: &mut ReportReader<'_>) -> Result<EffectType, ReportError> {
    let raw = reader.read_u8()?;
    EffectType::from_u8(raw).ok_or_else(|| ReportError::invalid_field(report_id, "effectType", raw))
}

/// Set Effect (Output, id 1): the common header of an effect block.
///
/// # Report layout
/// ```text
/// Byte 0:      report id (0x01)
/// Byte 1:      effectBlockIndex (1..40)
/// Byte 2:      effectType (1..12)
/// Bytes 3-4:   duration ms (0..32767, 0x7FFF = infinite)
/// Bytes 5-6:   triggerRepeatInterval ms
/// Bytes 7-8:   samplePeriod ms
/// Byte 9:      gain (0..255)
/// Byte 10:     triggerButton (0..8)
/// Byte 11:     enableAxis (bit0 X, bit1 Y, bit2 DirectionEnable)
/// Byte 12:     directionX
/// Byte 13:     directionY
/// Bytes 14-15: startDelay ms
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetEffectReport {
    pub effect_block_index: u8,
    pub effect_type: EffectType,
    pub duration: u16,
    pub trigger_repeat_interval: u16,
    pub sample_period: u16,
    pub gain: u8,
    pub trigger_button: u8,
    pub enable_axis: AxisEnable,
    pub direction_x: u8,
    pub direction_y: u8,
    pub start_delay: u16,
}

impl SetEffectReport {
    /// A header for `effect_type` with full gain, infinite duration and both axes enabled.
    pub fn new(effect_block_index: u8, effect_type: EffectType) -> Self {
        Self {
            effect_block_index,
            effect_type,
            duration: crate::constants::USB_DURATION_INFINITE,
            trigger_repeat_interval: 0,
            sample_period: 0,
            gain: crate::constants::USB_MAX_GAIN,
            trigger_button: 0,
            enable_axis: AxisEnable::X | AxisEnable::Y,
            direction_x: 0,
            direction_y: 0,
            start_delay: 0,
        }
    }

    pub fn is_infinite(&self) -> bool {
        self.duration == crate::constants::USB_DURATION_INFINITE
    }

    pub fn to_bytes(&self) -> [u8; SET_EFFECT_LEN] {
        encode_fixed(self)
    }
}

impl PidReport for SetEffectReport {
    const REPORT_ID: u8 = ids::SET_EFFECT;
    const LEN: usize = SET_EFFECT_LEN;

    fn read_payload(reader: &mut ReportReader<'_>) -> Result<Self, ReportError> {
        Ok(Self {
            effect_block_index: reader.read_u8()?,
            effect_type: read_effect_type(Self::REPORT_ID, reader)?,
            duration: reader.read_u16_le()?,
            trigger_repeat_interval: reader.read_u16_le()?,
            sample_period: reader.read_u16_le()?,
            gain: reader.read_u8()?,
            trigger_button: reader.read_u8()?,
            enable_axis: AxisEnable::from_bits_retain(reader.read_u8()?),
            direction_x: reader.read_u8()?,
            direction_y: reader.read_u8()?,
            start_delay: reader.read_u16_le()?,
        })
    }

    fn write_payload(&self, writer: &mut ReportWriter<'_>) {
        writer
            .write_u8(self.effect_block_index)
            .write_u8(self.effect_type.as_u8())
            .write_u16_le(self.duration)
            .write_u16_le(self.trigger_repeat_interval)
            .write_u16_le(self.sample_period)
            .write_u8(self.gain)
            .write_u8(self.trigger_button)
            .write_u8(self.enable_axis.bits())
            .write_u8(self.direction_x)
            .write_u8(self.direction_y)
            .write_u16_le(self.start_delay);
    }
}

/// Set Envelope (Output, id 2).
///
/// Levels are 0..255; times are milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SetEnvelopeReport {
    pub effect_block_index: u8,
    pub attack_level: u16,
    pub fade_level: u16,
    pub attack_time: u16,
    pub fade_time: u16,
}

impl SetEnvelopeReport {
    pub fn to_bytes(&self) -> [u8; SET_ENVELOPE_LEN] {
        encode_fixed(self)
    }
}

impl PidReport for SetEnvelopeReport {
    const REPORT_ID: u8 = ids::SET_ENVELOPE;
    const LEN: usize = SET_ENVELOPE_LEN;

    fn read_payload(reader: &mut ReportReader<'_>) -> Result<Self, ReportError> {
        Ok(Self {
            effect_block_index: reader.read_u8()?,
            attack_level: reader.read_u16_le()?,
            fade_level: reader.read_u16_le()?,
            attack_time: reader.read_u16_le()?,
            fade_time: reader.read_u16_le()?,
        })
    }

    fn write_payload(&self, writer: &mut ReportWriter<'_>) {
        writer
            .write_u8(self.effect_block_index)
            .write_u16_le(self.attack_level)
            .write_u16_le(self.fade_level)
            .write_u16_le(self.attack_time)
            .write_u16_le(self.fade_time);
    }
}

/// Set Condition (Output, id 3): spring/damper/inertia/friction parameters
/// for one axis.
///
/// `parameter_block_offset` packs three fields: bits 0..3 select the axis
/// (0 = first, 1 = second), bits 4..5 and 6..7 carry the two instance
/// numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SetConditionReport {
    pub effect_block_index: u8,
    pub parameter_block_offset: u8,
    pub cp_offset: i16,
    pub positive_coefficient: u16,
    pub negative_coefficient: u16,
    pub positive_saturation: u16,
    pub negative_saturation: u16,
    pub dead_band: u16,
}

impl SetConditionReport {
    /// Axis selector (bits 0..3).
    pub fn offset(&self) -> u8 {
        self.parameter_block_offset & 0x0F
    }

    /// Bits 4..5.
    pub fn instance1(&self) -> u8 {
        (self.parameter_block_offset >> 4) & 0x03
    }

    /// Bits 6..7.
    pub fn instance2(&self) -> u8 {
        (self.parameter_block_offset >> 6) & 0x03
    }

    pub fn to_bytes(&self) -> [u8; SET_CONDITION_LEN] {
        encode_fixed(self)
    }
}

impl PidReport for SetConditionReport {
    const REPORT_ID: u8 = ids::SET_CONDITION;
    const LEN: usize = SET_CONDITION_LEN;

    fn read_payload(reader: &mut ReportReader<'_>) -> Result<Self, ReportError> {
        Ok(Self {
            effect_block_index: reader.read_u8()?,
            parameter_block_offset: reader.read_u8()?,
            cp_offset: reader.read_i16_le()?,
            positive_coefficient: reader.read_u16_le()?,
            negative_coefficient: reader.read_u16_le()?,
            positive_saturation: reader.read_u16_le()?,
            negative_saturation: reader.read_u16_le()?,
            dead_band: reader.read_u16_le()?,
        })
    }

    fn write_payload(&self, writer: &mut ReportWriter<'_>) {
        writer
            .write_u8(self.effect_block_index)
            .write_u8(self.parameter_block_offset)
            .write_i16_le(self.cp_offset)
            .write_u16_le(self.positive_coefficient)
            .write_u16_le(self.negative_coefficient)
            .write_u16_le(self.positive_saturation)
            .write_u16_le(self.negative_saturation)
            .write_u16_le(self.dead_band);
    }
}

/// Set Periodic (Output, id 4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SetPeriodicReport {
    pub effect_block_index: u8,
    pub magnitude: u16,
    pub offset: i16,
    /// 0..6283
    pub phase: u16,
    /// Milliseconds
    pub period: u16,
}

impl SetPeriodicReport {
    pub fn to_bytes(&self) -> [u8; SET_PERIODIC_LEN] {
        encode_fixed(self)
    }
}

impl PidReport for SetPeriodicReport {
    const REPORT_ID: u8 = ids::SET_PERIODIC;
    const LEN: usize = SET_PERIODIC_LEN;

    fn read_payload(reader: &mut ReportReader<'_>) -> Result<Self, ReportError> {
        Ok(Self {
            effect_block_index: reader.read_u8()?,
            magnitude: reader.read_u16_le()?,
            offset: reader.read_i16_le()?,
            phase: reader.read_u16_le()?,
            period: reader.read_u16_le()?,
        })
    }

    fn write_payload(&self, writer: &mut ReportWriter<'_>) {
        writer
            .write_u8(self.effect_block_index)
            .write_u16_le(self.magnitude)
            .write_i16_le(self.offset)
            .write_u16_le(self.phase)
            .write_u16_le(self.period);
    }
}

/// Set Constant Force (Output, id 5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SetConstantForceReport {
    pub effect_block_index: u8,
    pub magnitude: i16,
}

impl SetConstantForceReport {
    pub fn to_bytes(&self) -> [u8; SET_CONSTANT_FORCE_LEN] {
        encode_fixed(self)
    }
}

impl PidReport for SetConstantForceReport {
    const REPORT_ID: u8 = ids::SET_CONSTANT_FORCE;
    const LEN: usize = SET_CONSTANT_FORCE_LEN;

    fn read_payload(reader: &mut ReportReader<'_>) -> Result<Self, ReportError> {
        Ok(Self {
            effect_block_index: reader.read_u8()?,
            magnitude: reader.read_i16_le()?,
        })
    }

    fn write_payload(&self, writer: &mut ReportWriter<'_>) {
        writer
            .write_u8(self.effect_block_index)
            .write_i16_le(self.magnitude);
    }
}

/// Set Ramp Force (Output, id 6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SetRampForceReport {
    pub effect_block_index: u8,
    pub start_magnitude: i16,
    pub end_magnitude: i16,
}

impl SetRampForceReport {
    pub fn to_bytes(&self) -> [u8; SET_RAMP_FORCE_LEN] {
        encode_fixed(self)
    }
}

impl PidReport for SetRampForceReport {
    const REPORT_ID: u8 = ids::SET_RAMP_FORCE;
    const LEN: usize = SET_RAMP_FORCE_LEN;

    fn read_payload(reader: &mut ReportReader<'_>) -> Result<Self, ReportError> {
        Ok(Self {
            effect_block_index: reader.read_u8()?,
            start_magnitude: reader.read_i16_le()?,
            end_magnitude: reader.read_i16_le()?,
        })
    }

    fn write_payload(&self, writer: &mut ReportWriter<'_>) {
        writer
            .write_u8(self.effect_block_index)
            .write_i16_le(self.start_magnitude)
            .write_i16_le(self.end_magnitude);
    }
}

/// Set Custom Force Data (Output, id 7): one 12-sample chunk written at
/// `data_offset` in the effect's sample buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SetCustomForceDataReport {
    pub effect_block_index: u8,
    pub data_offset: u16,
    pub data: [i8; CUSTOM_FORCE_CHUNK_LEN],
}

impl SetCustomForceDataReport {
    pub fn to_bytes(&self) -> [u8; SET_CUSTOM_FORCE_DATA_LEN] {
        encode_fixed(self)
    }
}

impl PidReport for SetCustomForceDataReport {
    const REPORT_ID: u8 = ids::SET_CUSTOM_FORCE_DATA;
    const LEN: usize = SET_CUSTOM_FORCE_DATA_LEN;

    fn read_payload(reader: &mut ReportReader<'_>) -> Result<Self, ReportError> {
        Ok(Self {
            effect_block_index: reader.read_u8()?,
            data_offset: reader.read_u16_le()?,
            data: reader.read_i8_array()?,
        })
    }

    fn write_payload(&self, writer: &mut ReportWriter<'_>) {
        writer
            .write_u8(self.effect_block_index)
            .write_u16_le(self.data_offset)
            .write_i8_slice(&self.data);
    }
}

/// Set Download Force Sample (Output, id 8). Carries no effect block index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SetDownloadForceSampleReport {
    pub x: i8,
    pub y: i8,
}

impl SetDownloadForceSampleReport {
    pub fn to_bytes(&self) -> [u8; SET_DOWNLOAD_FORCE_SAMPLE_LEN] {
        encode_fixed(self)
    }
}

impl PidReport for SetDownloadForceSampleReport {
    const REPORT_ID: u8 = ids::SET_DOWNLOAD_FORCE_SAMPLE;
    const LEN: usize = SET_DOWNLOAD_FORCE_SAMPLE_LEN;

    fn read_payload(reader: &mut ReportReader<'_>) -> Result<Self, ReportError> {
        Ok(Self {
            x: reader.read_i8()?,
            y: reader.read_i8()?,
        })
    }

    fn write_payload(&self, writer: &mut ReportWriter<'_>) {
        writer.write_i8(self.x).write_i8(self.y);
    }
}

/// Effect Operation `operation` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EffectOperation {
    Start = 1,
    StartSolo = 2,
    Stop = 3,
}

impl EffectOperation {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(EffectOperation::Start),
            2 => Some(EffectOperation::StartSolo),
            3 => Some(EffectOperation::Stop),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Effect Operation (Output, id 10).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectOperationReport {
    pub effect_block_index: u8,
    pub operation: EffectOperation,
    pub loop_count: u8,
}

impl EffectOperationReport {
    pub fn to_bytes(&self) -> [u8; EFFECT_OPERATION_LEN] {
        encode_fixed(self)
    }
}

impl PidReport for EffectOperationReport {
    const REPORT_ID: u8 = ids::EFFECT_OPERATION;
    const LEN: usize = EFFECT_OPERATION_LEN;

    fn read_payload(reader: &mut ReportReader<'_>) -> Result<Self, ReportError> {
        let effect_block_index = reader.read_u8()?;
        let raw = reader.read_u8()?;
        let operation = EffectOperation::from_u8(raw)
            .ok_or_else(|| ReportError::invalid_field(Self::REPORT_ID, "operation", raw))?;
        Ok(Self {
            effect_block_index,
            operation,
            loop_count: reader.read_u8()?,
        })
    }

    fn write_payload(&self, writer: &mut ReportWriter<'_>) {
        writer
            .write_u8(self.effect_block_index)
            .write_u8(self.operation.as_u8())
            .write_u8(self.loop_count);
    }
}

/// Block Free (Output, id 11).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlockFreeReport {
    pub effect_block_index: u8,
}

impl BlockFreeReport {
    pub fn to_bytes(&self) -> [u8; BLOCK_FREE_LEN] {
        encode_fixed(self)
    }
}

impl PidReport for BlockFreeReport {
    const REPORT_ID: u8 = ids::BLOCK_FREE;
    const LEN: usize = BLOCK_FREE_LEN;

    fn read_payload(reader: &mut ReportReader<'_>) -> Result<Self, ReportError> {
        Ok(Self {
            effect_block_index: reader.read_u8()?,
        })
    }

    fn write_payload(&self, writer: &mut ReportWriter<'_>) {
        writer.write_u8(self.effect_block_index);
    }
}

/// Device Control (Output, id 12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeviceControlReport {
    pub control: DeviceControl,
}

impl DeviceControlReport {
    pub fn to_bytes(&self) -> [u8; DEVICE_CONTROL_LEN] {
        encode_fixed(self)
    }
}

impl PidReport for DeviceControlReport {
    const REPORT_ID: u8 = ids::DEVICE_CONTROL;
    const LEN: usize = DEVICE_CONTROL_LEN;

    fn read_payload(reader: &mut ReportReader<'_>) -> Result<Self, ReportError> {
        Ok(Self {
            control: DeviceControl::from_bits_retain(reader.read_u8()?),
        })
    }

    fn write_payload(&self, writer: &mut ReportWriter<'_>) {
        writer.write_u8(self.control.bits());
    }
}

/// Device Gain (Output, id 13).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeviceGainReport {
    pub gain: u8,
}

impl DeviceGainReport {
    pub fn to_bytes(&self) -> [u8; DEVICE_GAIN_LEN] {
        encode_fixed(self)
    }
}

impl PidReport for DeviceGainReport {
    const REPORT_ID: u8 = ids::DEVICE_GAIN;
    const LEN: usize = DEVICE_GAIN_LEN;

    fn read_payload(reader: &mut ReportReader<'_>) -> Result<Self, ReportError> {
        Ok(Self {
            gain: reader.read_u8()?,
        })
    }

    fn write_payload(&self, writer: &mut ReportWriter<'_>) {
        writer.write_u8(self.gain);
    }
}

/// Set Custom Force (Output, id 14).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SetCustomForceReport {
    pub effect_block_index: u8,
    pub sample_count: u8,
    pub sample_period: u16,
}

impl SetCustomForceReport {
    pub fn to_bytes(&self) -> [u8; SET_CUSTOM_FORCE_LEN] {
        encode_fixed(self)
    }
}

impl PidReport for SetCustomForceReport {
    const REPORT_ID: u8 = ids::SET_CUSTOM_FORCE;
    const LEN: usize = SET_CUSTOM_FORCE_LEN;

    fn read_payload(reader: &mut ReportReader<'_>) -> Result<Self, ReportError> {
        Ok(Self {
            effect_block_index: reader.read_u8()?,
            sample_count: reader.read_u8()?,
            sample_period: reader.read_u16_le()?,
        })
    }

    fn write_payload(&self, writer: &mut ReportWriter<'_>) {
        writer
            .write_u8(self.effect_block_index)
            .write_u8(self.sample_count)
            .write_u16_le(self.sample_period);
    }
}
