//! Report dispatch by id.
//!
//! Decoding selects the layout from byte 0 alone and then requires the exact
//! fixed size for that id. Payload length never selects a layout.

use pidff_errors::ReportError;

use crate::codec::PidReport;
use crate::feature::{BlockLoadReport, CreateNewEffectReport, PidPoolReport};
use crate::ids;
use crate::output::{
    BlockFreeReport, DeviceControlReport, DeviceGainReport, EffectOperationReport,
    SetConditionReport, SetConstantForceReport, SetCustomForceDataReport, SetCustomForceReport,
    SetDownloadForceSampleReport, SetEffectReport, SetEnvelopeReport, SetPeriodicReport,
    SetRampForceReport,
};

/// Any host → device Output report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputReport {
    SetEffect(SetEffectReport),
    SetEnvelope(SetEnvelopeReport),
    SetCondition(SetConditionReport),
    SetPeriodic(SetPeriodicReport),
    SetConstantForce(SetConstantForceReport),
    SetRampForce(SetRampForceReport),
    SetCustomForceData(SetCustomForceDataReport),
    SetDownloadForceSample(SetDownloadForceSampleReport),
    EffectOperation(EffectOperationReport),
    BlockFree(BlockFreeReport),
    DeviceControl(DeviceControlReport),
    DeviceGain(DeviceGainReport),
    SetCustomForce(SetCustomForceReport),
}

impl OutputReport {
    pub fn decode(bytes: &[u8]) -> Result<Self, ReportError> {
        let report_id = bytes.first().copied().ok_or(ReportError::Empty)?;
        let report = match report_id {
            ids::output::SET_EFFECT => Self::SetEffect(SetEffectReport::decode(bytes)?),
            ids::output::SET_ENVELOPE => Self::SetEnvelope(SetEnvelopeReport::decode(bytes)?),
            ids::output::SET_CONDITION => Self::SetCondition(SetConditionReport::decode(bytes)?),
            ids::output::SET_PERIODIC => Self::SetPeriodic(SetPeriodicReport::decode(bytes)?),
            ids::output::SET_CONSTANT_FORCE => {
                Self::SetConstantForce(SetConstantForceReport::decode(bytes)?)
            }
            ids::output::SET_RAMP_FORCE => Self::SetRampForce(SetRampForceReport::decode(bytes)?),
            ids::output::SET_CUSTOM_FORCE_DATA => {
                Self::SetCustomForceData(SetCustomForceDataReport::decode(bytes)?)
            }
            ids::output::SET_DOWNLOAD_FORCE_SAMPLE => {
                Self::SetDownloadForceSample(SetDownloadForceSampleReport::decode(bytes)?)
            }
            ids::output::EFFECT_OPERATION => {
                Self::EffectOperation(EffectOperationReport::decode(bytes)?)
            }
            ids::output::BLOCK_FREE => Self::BlockFree(BlockFreeReport::decode(bytes)?),
            ids::output::DEVICE_CONTROL => Self::DeviceControl(DeviceControlReport::decode(bytes)?),
            ids::output::DEVICE_GAIN => Self::DeviceGain(DeviceGainReport::decode(bytes)?),
            ids::output::SET_CUSTOM_FORCE => {
                Self::SetCustomForce(SetCustomForceReport::decode(bytes)?)
            }
            other => return Err(ReportError::UnknownReportId(other)),
        };
        Ok(report)
    }

    pub fn report_id(&self) -> u8 {
        match self {
            Self::SetEffect(_) => SetEffectReport::REPORT_ID,
            Self::SetEnvelope(_) => SetEnvelopeReport::REPORT_ID,
            Self::SetCondition(_) => SetConditionReport::REPORT_ID,
            Self::SetPeriodic(_) => SetPeriodicReport::REPORT_ID,
            Self::SetConstantForce(_) => SetConstantForceReport::REPORT_ID,
            Self::SetRampForce(_) => SetRampForceReport::REPORT_ID,
            Self::SetCustomForceData(_) => SetCustomForceDataReport::REPORT_ID,
            Self::SetDownloadForceSample(_) => SetDownloadForceSampleReport::REPORT_ID,
            Self::EffectOperation(_) => EffectOperationReport::REPORT_ID,
            Self::BlockFree(_) => BlockFreeReport::REPORT_ID,
            Self::DeviceControl(_) => DeviceControlReport::REPORT_ID,
            Self::DeviceGain(_) => DeviceGainReport::REPORT_ID,
            Self::SetCustomForce(_) => SetCustomForceReport::REPORT_ID,
        }
    }

    /// Encode into `out`, returning the number of bytes written.
    pub fn encode_into(&self, out: &mut [u8]) -> Result<usize, ReportError> {
        match self {
            Self::SetEffect(r) => r.encode_into(out),
            Self::SetEnvelope(r) => r.encode_into(out),
            Self::SetCondition(r) => r.encode_into(out),
            Self::SetPeriodic(r) => r.encode_into(out),
            Self::SetConstantForce(r) => r.encode_into(out),
            Self::SetRampForce(r) => r.encode_into(out),
            Self::SetCustomForceData(r) => r.encode_into(out),
            Self::SetDownloadForceSample(r) => r.encode_into(out),
            Self::EffectOperation(r) => r.encode_into(out),
            Self::BlockFree(r) => r.encode_into(out),
            Self::DeviceControl(r) => r.encode_into(out),
            Self::DeviceGain(r) => r.encode_into(out),
            Self::SetCustomForce(r) => r.encode_into(out),
        }
    }

    /// The effect block index the report addresses, if it carries one.
    pub fn effect_block_index(&self) -> Option<u8> {
        match self {
            Self::SetEffect(r) => Some(r.effect_block_index),
            Self::SetEnvelope(r) => Some(r.effect_block_index),
            Self::SetCondition(r) => Some(r.effect_block_index),
            Self::SetPeriodic(r) => Some(r.effect_block_index),
            Self::SetConstantForce(r) => Some(r.effect_block_index),
            Self::SetRampForce(r) => Some(r.effect_block_index),
            Self::SetCustomForceData(r) => Some(r.effect_block_index),
            Self::EffectOperation(r) => Some(r.effect_block_index),
            Self::BlockFree(r) => Some(r.effect_block_index),
            Self::SetCustomForce(r) => Some(r.effect_block_index),
            Self::SetDownloadForceSample(_) | Self::DeviceControl(_) | Self::DeviceGain(_) => None,
        }
    }
}

/// Any Feature report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureReport {
    CreateNewEffect(CreateNewEffectReport),
    BlockLoad(BlockLoadReport),
    PidPool(PidPoolReport),
}

impl FeatureReport {
    pub fn decode(bytes: &[u8]) -> Result<Self, ReportError> {
        let report_id = bytes.first().copied().ok_or(ReportError::Empty)?;
        let report = match report_id {
            ids::feature::CREATE_NEW_EFFECT => {
                Self::CreateNewEffect(CreateNewEffectReport::decode(bytes)?)
            }
            ids::feature::BLOCK_LOAD => Self::BlockLoad(BlockLoadReport::decode(bytes)?),
            ids::feature::POOL => Self::PidPool(PidPoolReport::decode(bytes)?),
            other => return Err(ReportError::UnknownReportId(other)),
        };
        Ok(report)
    }

    pub fn report_id(&self) -> u8 {
        match self {
            Self::CreateNewEffect(_) => CreateNewEffectReport::REPORT_ID,
            Self::BlockLoad(_) => BlockLoadReport::REPORT_ID,
            Self::PidPool(_) => PidPoolReport::REPORT_ID,
        }
    }

    pub fn encode_into(&self, out: &mut [u8]) -> Result<usize, ReportError> {
        match self {
            Self::CreateNewEffect(r) => r.encode_into(out),
            Self::BlockLoad(r) => r.encode_into(out),
            Self::PidPool(r) => r.encode_into(out),
        }
    }
}
