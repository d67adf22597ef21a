//! Fixed-layout report reading and writing.
//!
//! Multi-byte fields are little-endian. Readers and writers never allocate;
//! a report's byte count is checked against its fixed size before any field
//! is read.

use pidff_errors::ReportError;

/// Cursor over a received report buffer.
#[derive(Debug)]
pub struct ReportReader<'a> {
    bytes: &'a [u8],
    position: usize,
    report_id: u8,
}

impl<'a> ReportReader<'a> {
    /// Start reading at byte 1, immediately after the report id.
    pub fn after_id(report_id: u8, bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            position: 1,
            report_id,
        }
    }

    /// Start reading at byte 0 (reports without an id byte).
    pub fn from_start(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            position: 0,
            report_id: 0,
        }
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len().saturating_sub(self.position)
    }

    pub fn read_u8(&mut self) -> Result<u8, ReportError> {
        let value = self.bytes.get(self.position).copied().ok_or_else(|| {
            ReportError::length(
                self.report_id,
                self.position.saturating_add(1),
                self.bytes.len(),
            )
        })?;
        self.position = self.position.saturating_add(1);
        Ok(value)
    }

    pub fn read_i8(&mut self) -> Result<i8, ReportError> {
        Ok(i8::from_le_bytes([self.read_u8()?]))
    }

    pub fn read_u16_le(&mut self) -> Result<u16, ReportError> {
        let lo = self.read_u8()?;
        let hi = self.read_u8()?;
        Ok(u16::from_le_bytes([lo, hi]))
    }

    pub fn read_i16_le(&mut self) -> Result<i16, ReportError> {
        let lo = self.read_u8()?;
        let hi = self.read_u8()?;
        Ok(i16::from_le_bytes([lo, hi]))
    }

    pub fn read_i8_array<const N: usize>(&mut self) -> Result<[i8; N], ReportError> {
        let mut out = [0i8; N];
        for slot in out.iter_mut() {
            *slot = self.read_i8()?;
        }
        Ok(out)
    }
}

/// Cursor writing into a caller-provided buffer.
///
/// Writes past the end of the buffer are dropped; callers size the buffer
/// from the report's fixed length before writing.
#[derive(Debug)]
pub struct ReportWriter<'a> {
    buffer: &'a mut [u8],
    position: usize,
}

impl<'a> ReportWriter<'a> {
    pub fn new(buffer: &'a mut [u8]) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }

    pub fn write_u8(&mut self, value: u8) -> &mut Self {
        if let Some(slot) = self.buffer.get_mut(self.position) {
            *slot = value;
        }
        self.position = self.position.saturating_add(1);
        self
    }

    pub fn write_i8(&mut self, value: i8) -> &mut Self {
        let [byte] = value.to_le_bytes();
        self.write_u8(byte)
    }

    pub fn write_u16_le(&mut self, value: u16) -> &mut Self {
        let [lo, hi] = value.to_le_bytes();
        self.write_u8(lo).write_u8(hi)
    }

    pub fn write_i16_le(&mut self, value: i16) -> &mut Self {
        let [lo, hi] = value.to_le_bytes();
        self.write_u8(lo).write_u8(hi)
    }

    pub fn write_i8_slice(&mut self, values: &[i8]) -> &mut Self {
        for value in values {
            self.write_i8(*value);
        }
        self
    }

    /// Bytes written so far, including any that were dropped.
    pub fn len(&self) -> usize {
        self.position
    }

    pub fn is_empty(&self) -> bool {
        self.position == 0
    }
}

/// A report with a leading id byte and a fixed total size.
pub trait PidReport: Sized {
    /// Report id (byte 0).
    const REPORT_ID: u8;
    /// Total size in bytes, including the id.
    const LEN: usize;

    /// Read the fields that follow the id byte.
    fn read_payload(reader: &mut ReportReader<'_>) -> Result<Self, ReportError>;

    /// Write the fields that follow the id byte.
    fn write_payload(&self, writer: &mut ReportWriter<'_>);

    /// Decode a complete report, validating id and exact size.
    fn decode(bytes: &[u8]) -> Result<Self, ReportError> {
        let report_id = bytes.first().copied().ok_or(ReportError::Empty)?;
        if report_id != Self::REPORT_ID {
            return Err(ReportError::UnknownReportId(report_id));
        }
        if bytes.len() != Self::LEN {
            return Err(ReportError::length(report_id, Self::LEN, bytes.len()));
        }
        let mut reader = ReportReader::after_id(report_id, bytes);
        Self::read_payload(&mut reader)
    }

    /// Encode into `out`, returning the number of bytes written.
    fn encode_into(&self, out: &mut [u8]) -> Result<usize, ReportError> {
        let available = out.len();
        let dst = out
            .get_mut(..Self::LEN)
            .ok_or_else(|| ReportError::length(Self::REPORT_ID, Self::LEN, available))?;
        let mut writer = ReportWriter::new(dst);
        writer.write_u8(Self::REPORT_ID);
        self.write_payload(&mut writer);
        Ok(Self::LEN)
    }
}

/// Encode a report into an array sized to its fixed length.
pub(crate) fn encode_fixed<R: PidReport, const N: usize>(report: &R) -> [u8; N] {
    debug_assert_eq!(N, R::LEN);
    let mut out = [0u8; N];
    let mut writer = ReportWriter::new(&mut out);
    writer.write_u8(R::REPORT_ID);
    report.write_payload(&mut writer);
    out
}
