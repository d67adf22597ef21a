//! Effect type enumeration (Set Effect / Create New Effect `effectType`).

use serde::{Deserialize, Serialize};

/// The twelve effect types the device descriptor advertises, in wire order.
///
/// # Examples
///
/// ```
/// use pidff_reports::EffectType;
///
/// let spring = EffectType::from_u8(8);
/// assert_eq!(spring, Some(EffectType::Spring));
/// assert!(EffectType::Spring.is_condition());
/// assert_eq!(EffectType::from_u8(0), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum EffectType {
    Constant = 0x01,
    Ramp = 0x02,
    Square = 0x03,
    Sine = 0x04,
    Triangle = 0x05,
    SawtoothDown = 0x06,
    SawtoothUp = 0x07,
    Spring = 0x08,
    Damper = 0x09,
    Inertia = 0x0A,
    Friction = 0x0B,
    Custom = 0x0C,
}

/// Which type-specific parameter block an effect type consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterKind {
    Constant,
    Ramp,
    Periodic,
    Condition,
    Custom,
}

impl ParameterKind {
    pub fn name(self) -> &'static str {
        match self {
            ParameterKind::Constant => "constant force",
            ParameterKind::Ramp => "ramp force",
            ParameterKind::Periodic => "periodic",
            ParameterKind::Condition => "condition",
            ParameterKind::Custom => "custom force",
        }
    }
}

impl EffectType {
    /// All effect types in wire order.
    pub const ALL: [EffectType; 12] = [
        EffectType::Constant,
        EffectType::Ramp,
        EffectType::Square,
        EffectType::Sine,
        EffectType::Triangle,
        EffectType::SawtoothDown,
        EffectType::SawtoothUp,
        EffectType::Spring,
        EffectType::Damper,
        EffectType::Inertia,
        EffectType::Friction,
        EffectType::Custom,
    ];

    /// Decode a raw `effectType` byte.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x01 => Some(EffectType::Constant),
            0x02 => Some(EffectType::Ramp),
            0x03 => Some(EffectType::Square),
            0x04 => Some(EffectType::Sine),
            0x05 => Some(EffectType::Triangle),
            0x06 => Some(EffectType::SawtoothDown),
            0x07 => Some(EffectType::SawtoothUp),
            0x08 => Some(EffectType::Spring),
            0x09 => Some(EffectType::Damper),
            0x0A => Some(EffectType::Inertia),
            0x0B => Some(EffectType::Friction),
            0x0C => Some(EffectType::Custom),
            _ => None,
        }
    }

    /// Raw wire value.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// HID PID usage id of the effect type (usage page 0x0F).
    pub fn usage_id(self) -> u8 {
        match self {
            EffectType::Constant => 0x26,
            EffectType::Ramp => 0x27,
            EffectType::Square => 0x30,
            EffectType::Sine => 0x31,
            EffectType::Triangle => 0x32,
            EffectType::SawtoothDown => 0x33,
            EffectType::SawtoothUp => 0x34,
            EffectType::Spring => 0x40,
            EffectType::Damper => 0x41,
            EffectType::Inertia => 0x42,
            EffectType::Friction => 0x43,
            EffectType::Custom => 0x28,
        }
    }

    /// Spring, damper, inertia and friction.
    pub fn is_condition(self) -> bool {
        matches!(
            self,
            EffectType::Spring | EffectType::Damper | EffectType::Inertia | EffectType::Friction
        )
    }

    /// Square, sine, triangle and both sawtooths.
    pub fn is_periodic(self) -> bool {
        matches!(
            self,
            EffectType::Square
                | EffectType::Sine
                | EffectType::Triangle
                | EffectType::SawtoothDown
                | EffectType::SawtoothUp
        )
    }

    /// Whether a Set Envelope report applies to this type.
    pub fn accepts_envelope(self) -> bool {
        !self.is_condition()
    }

    /// The type-specific parameter block this type consumes.
    pub fn parameter_kind(self) -> ParameterKind {
        match self {
            EffectType::Constant => ParameterKind::Constant,
            EffectType::Ramp => ParameterKind::Ramp,
            EffectType::Custom => ParameterKind::Custom,
            t if t.is_condition() => ParameterKind::Condition,
            _ => ParameterKind::Periodic,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            EffectType::Constant => "constant",
            EffectType::Ramp => "ramp",
            EffectType::Square => "square",
            EffectType::Sine => "sine",
            EffectType::Triangle => "triangle",
            EffectType::SawtoothDown => "sawtooth-down",
            EffectType::SawtoothUp => "sawtooth-up",
            EffectType::Spring => "spring",
            EffectType::Damper => "damper",
            EffectType::Inertia => "inertia",
            EffectType::Friction => "friction",
            EffectType::Custom => "custom",
        }
    }
}

impl TryFrom<u8> for EffectType {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        EffectType::from_u8(value).ok_or(value)
    }
}
