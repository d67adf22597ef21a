//! Bit-field bytes carried by PID reports.
//!
//! Unknown bits are retained so that decode followed by encode reproduces
//! the received byte.

use serde::{Deserialize, Serialize};

bitflags::bitflags! {
    /// Set Effect `enableAxis`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct AxisEnable: u8 {
        const X = crate::constants::X_AXIS_ENABLE;
        const Y = crate::constants::Y_AXIS_ENABLE;
        const DIRECTION = crate::constants::DIRECTION_ENABLE;
    }
}

bitflags::bitflags! {
    /// Device Control `control`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DeviceControl: u8 {
        const ENABLE_ACTUATORS = 0x01;
        const DISABLE_ACTUATORS = 0x02;
        const STOP_ALL_EFFECTS = 0x04;
        const RESET = 0x08;
        const PAUSE = 0x10;
        const CONTINUE = 0x20;
    }
}

bitflags::bitflags! {
    /// PID Status `status`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PidStatusFlags: u8 {
        const DEVICE_PAUSED = 0x01;
        const ACTUATORS_ENABLED = 0x02;
        const SAFETY_SWITCH = 0x04;
        const ACTUATOR_OVERRIDE = 0x08;
        const ACTUATOR_POWER = 0x10;
    }
}

bitflags::bitflags! {
    /// PID Pool `memoryManagement`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct MemoryManagement: u8 {
        const DEVICE_MANAGED_POOL = 0x01;
        const SHARED_PARAMETER_BLOCKS = 0x02;
    }
}
