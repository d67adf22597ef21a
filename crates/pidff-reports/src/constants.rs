//! Device limits and wire-domain constants.

/// Maximum number of effects held in device memory at once.
pub const MAX_EFFECTS: usize = 40;

/// Number of force feedback axes.
pub const NUM_AXES: usize = 2;

/// `duration` value meaning "play until stopped".
pub const USB_DURATION_INFINITE: u16 = 0x7FFF;

/// Largest magnitude, coefficient or level on the 0..255 scale.
pub const USB_MAX_MAGNITUDE: u16 = 255;

/// Largest per-effect or device gain.
pub const USB_MAX_GAIN: u8 = 255;

/// Largest phase / angle value (2π scaled by [`USB_NORMALIZE_RAD`]).
pub const USB_MAX_PHASE: u16 = 6283;

/// π scaled by [`USB_NORMALIZE_RAD`].
pub const USB_PI: u16 = 3141;

/// Divisor converting wire angles to radians.
pub const USB_NORMALIZE_RAD: f32 = 1000.0;

/// Physical gain at wire gain 255.
pub const PHYSICAL_GAIN_MAX: u16 = 10_000;

/// Largest duration, repeat interval, sample period or dead band.
pub const USB_MAX_TIME_MS: u16 = 32_767;

/// Largest Create New Effect `byteCount`.
pub const MAX_BYTE_COUNT: u16 = 511;

/// `enableAxis` bit: X axis.
pub const X_AXIS_ENABLE: u8 = 0x01;
/// `enableAxis` bit: Y axis.
pub const Y_AXIS_ENABLE: u8 = 0x02;
/// `enableAxis` bit: direction is polar.
pub const DIRECTION_ENABLE: u8 = 0x04;

pub const INERTIA_FORCE: u8 = 0xFF;
pub const FRICTION_FORCE: u8 = 0xFF;
pub const INERTIA_DEADBAND: u8 = 0x30;
pub const FRICTION_DEADBAND: u8 = 0x30;

/// Parameter block offset of the first axis.
pub const TYPE_SPECIFIC_BLOCK_OFFSET_1: u8 = 0;
/// Parameter block offset of the second axis.
pub const TYPE_SPECIFIC_BLOCK_OFFSET_2: u8 = 1;

/// Sample bytes carried by one Set Custom Force Data report.
pub const CUSTOM_FORCE_CHUNK_LEN: usize = 12;

/// Custom force sample bytes stored per effect slot.
pub const CUSTOM_FORCE_CAPACITY: usize = 4 * CUSTOM_FORCE_CHUNK_LEN;

/// Largest fixed report size (Set Effect / Set Custom Force Data).
pub const MAX_REPORT_LEN: usize = 16;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angle_constants_agree() {
        assert_eq!(u32::from(USB_PI) * 2 + 1, u32::from(USB_MAX_PHASE));
        assert!((f32::from(USB_MAX_PHASE) / USB_NORMALIZE_RAD - std::f32::consts::TAU).abs() < 0.001);
    }

    #[test]
    fn test_axis_bits_disjoint() {
        assert_eq!(X_AXIS_ENABLE & Y_AXIS_ENABLE, 0);
        assert_eq!((X_AXIS_ENABLE | Y_AXIS_ENABLE) & DIRECTION_ENABLE, 0);
    }

    #[test]
    fn test_capacity_fits_status_index() {
        assert!(MAX_EFFECTS <= 0x7F);
        assert_eq!(CUSTOM_FORCE_CAPACITY % CUSTOM_FORCE_CHUNK_LEN, 0);
    }
}
