//! Device → host Input reports.

use pidff_errors::ReportError;

use crate::codec::{PidReport, ReportReader, ReportWriter, encode_fixed};
use crate::flags::PidStatusFlags;
use crate::ids::input as ids;

pub const PID_STATUS_LEN: usize = 3;
pub const WHEEL_INPUT_LEN: usize = 13;

/// Number of 16-bit axes in the joystick Input report.
pub const WHEEL_INPUT_AXES: usize = 6;

const PLAYING_BIT: u8 = 0x80;
const INDEX_MASK: u8 = 0x7F;

/// PID Status (Input, id 2).
///
/// The second byte packs a playing flag (bit 7) with an effect block index
/// (bits 0..6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PidStatusReport {
    pub status: PidStatusFlags,
    pub effect_block_index: u8,
    pub playing: bool,
}

impl PidStatusReport {
    /// Pack the playing flag and index into the wire byte.
    pub fn effect_state_byte(&self) -> u8 {
        let flag = if self.playing { PLAYING_BIT } else { 0 };
        flag | (self.effect_block_index & INDEX_MASK)
    }

    pub fn to_bytes(&self) -> [u8; PID_STATUS_LEN] {
        encode_fixed(self)
    }
}

impl PidReport for PidStatusReport {
    const REPORT_ID: u8 = ids::PID_STATUS;
    const LEN: usize = PID_STATUS_LEN;

    fn read_payload(reader: &mut ReportReader<'_>) -> Result<Self, ReportError> {
        let status = PidStatusFlags::from_bits_retain(reader.read_u8()?);
        let packed = reader.read_u8()?;
        Ok(Self {
            status,
            effect_block_index: packed & INDEX_MASK,
            playing: packed & PLAYING_BIT != 0,
        })
    }

    fn write_payload(&self, writer: &mut ReportWriter<'_>) {
        writer
            .write_u8(self.status.bits())
            .write_u8(self.effect_state_byte());
    }
}

/// Joystick Input report: a button byte followed by six signed axes.
///
/// Carries no report id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WheelInputReport {
    pub buttons: u8,
    /// X, Y, Z, Rx, Ry, Rz
    pub axes: [i16; WHEEL_INPUT_AXES],
}

impl WheelInputReport {
    pub fn decode(bytes: &[u8]) -> Result<Self, ReportError> {
        if bytes.len() != WHEEL_INPUT_LEN {
            return Err(ReportError::length(0, WHEEL_INPUT_LEN, bytes.len()));
        }
        let mut reader = ReportReader::from_start(bytes);
        let buttons = reader.read_u8()?;
        let mut axes = [0i16; WHEEL_INPUT_AXES];
        for axis in axes.iter_mut() {
            *axis = reader.read_i16_le()?;
        }
        Ok(Self { buttons, axes })
    }

    pub fn to_bytes(&self) -> [u8; WHEEL_INPUT_LEN] {
        let mut out = [0u8; WHEEL_INPUT_LEN];
        let mut writer = ReportWriter::new(&mut out);
        writer.write_u8(self.buttons);
        for axis in self.axes {
            writer.write_i16_le(axis);
        }
        out
    }
}
