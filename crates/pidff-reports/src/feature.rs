//! Feature reports: Create New Effect (host → device) and the synchronous
//! PID Block Load / PID Pool replies (device → host).

use pidff_errors::{BlockLoadStatus, ReportError};

use crate::codec::{PidReport, ReportReader, ReportWriter, encode_fixed};
use crate::effect_type::EffectType;
use crate::flags::MemoryManagement;
use crate::ids::feature as ids;

pub const CREATE_NEW_EFFECT_LEN: usize = 4;
pub const BLOCK_LOAD_LEN: usize = 5;
pub const PID_POOL_LEN: usize = 5;

/// Create New Effect (Feature, id 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateNewEffectReport {
    pub effect_type: EffectType,
    /// 0..511
    pub byte_count: u16,
}

impl CreateNewEffectReport {
    pub fn to_bytes(&self) -> [u8; CREATE_NEW_EFFECT_LEN] {
        encode_fixed(self)
    }
}

impl PidReport for CreateNewEffectReport {
    const REPORT_ID: u8 = ids::CREATE_NEW_EFFECT;
    const LEN: usize = CREATE_NEW_EFFECT_LEN;

    fn read_payload(reader: &mut ReportReader<'_>) -> Result<Self, ReportError> {
        let raw = reader.read_u8()?;
        let effect_type = EffectType::from_u8(raw)
            .ok_or_else(|| ReportError::invalid_field(Self::REPORT_ID, "effectType", raw))?;
        Ok(Self {
            effect_type,
            byte_count: reader.read_u16_le()?,
        })
    }

    fn write_payload(&self, writer: &mut ReportWriter<'_>) {
        writer
            .write_u8(self.effect_type.as_u8())
            .write_u16_le(self.byte_count);
    }
}

/// PID Block Load (Feature, id 2): the answer to Create New Effect.
///
/// # Report layout
/// ```text
/// Byte 0:    report id (0x02)
/// Byte 1:    effectBlockIndex (0 when nothing was allocated)
/// Byte 2:    loadStatus (1 Success, 2 Full, 3 Error)
/// Bytes 3-4: ramPoolAvailable
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockLoadReport {
    pub effect_block_index: u8,
    pub load_status: BlockLoadStatus,
    pub ram_pool_available: u16,
}

impl BlockLoadReport {
    pub fn to_bytes(&self) -> [u8; BLOCK_LOAD_LEN] {
        encode_fixed(self)
    }
}

impl PidReport for BlockLoadReport {
    const REPORT_ID: u8 = ids::BLOCK_LOAD;
    const LEN: usize = BLOCK_LOAD_LEN;

    fn read_payload(reader: &mut ReportReader<'_>) -> Result<Self, ReportError> {
        let effect_block_index = reader.read_u8()?;
        let raw = reader.read_u8()?;
        let load_status = BlockLoadStatus::from_u8(raw)
            .ok_or_else(|| ReportError::invalid_field(Self::REPORT_ID, "loadStatus", raw))?;
        Ok(Self {
            effect_block_index,
            load_status,
            ram_pool_available: reader.read_u16_le()?,
        })
    }

    fn write_payload(&self, writer: &mut ReportWriter<'_>) {
        writer
            .write_u8(self.effect_block_index)
            .write_u8(self.load_status.as_u8())
            .write_u16_le(self.ram_pool_available);
    }
}

/// PID Pool (Feature, id 3): device capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PidPoolReport {
    pub ram_pool_size: u16,
    pub max_simultaneous_effects: u8,
    pub memory_management: MemoryManagement,
}

impl PidPoolReport {
    pub fn to_bytes(&self) -> [u8; PID_POOL_LEN] {
        encode_fixed(self)
    }
}

impl PidReport for PidPoolReport {
    const REPORT_ID: u8 = ids::POOL;
    const LEN: usize = PID_POOL_LEN;

    fn read_payload(reader: &mut ReportReader<'_>) -> Result<Self, ReportError> {
        Ok(Self {
            ram_pool_size: reader.read_u16_le()?,
            max_simultaneous_effects: reader.read_u8()?,
            memory_management: MemoryManagement::from_bits_retain(reader.read_u8()?),
        })
    }

    fn write_payload(&self, writer: &mut ReportWriter<'_>) {
        writer
            .write_u16_le(self.ram_pool_size)
            .write_u8(self.max_simultaneous_effects)
            .write_u8(self.memory_management.bits());
    }
}
