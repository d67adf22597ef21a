//! Scalar conversions between wire units and physical units.

use crate::constants::{PHYSICAL_GAIN_MAX, USB_MAX_GAIN, USB_NORMALIZE_RAD};

/// Swap the two bytes of a 16-bit value.
///
/// Converts between the device's little-endian report order and a
/// big-endian host buffer.
///
/// ```
/// use pidff_reports::to_lt_end_16;
///
/// assert_eq!(to_lt_end_16(0x1234), 0x3412);
/// assert_eq!(to_lt_end_16(to_lt_end_16(0xBEEF)), 0xBEEF);
/// ```
pub const fn to_lt_end_16(x: u16) -> u16 {
    x.swap_bytes()
}

/// Map a 0..255 wire gain onto the 0..10000 physical scale.
pub fn gain_to_physical(gain: u8) -> u16 {
    let scaled = u32::from(gain) * u32::from(PHYSICAL_GAIN_MAX) / u32::from(USB_MAX_GAIN);
    u16::try_from(scaled).unwrap_or(PHYSICAL_GAIN_MAX)
}

/// Convert a 0..6283 phase/angle value to radians.
pub fn angle_to_radians(angle: u16) -> f32 {
    f32::from(angle) / USB_NORMALIZE_RAD
}

/// Convert a one-byte polar direction (0..255 ↔ 0..360°) to radians.
pub fn direction_to_radians(direction: u8) -> f32 {
    f32::from(direction) / f32::from(u8::MAX) * std::f32::consts::TAU
}
