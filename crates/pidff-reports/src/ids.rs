//! Report ids. Output, Feature and Input reports have separate id spaces.

/// Host → device Output report ids.
pub mod output {
    pub const SET_EFFECT: u8 = 1;
    pub const SET_ENVELOPE: u8 = 2;
    pub const SET_CONDITION: u8 = 3;
    pub const SET_PERIODIC: u8 = 4;
    pub const SET_CONSTANT_FORCE: u8 = 5;
    pub const SET_RAMP_FORCE: u8 = 6;
    pub const SET_CUSTOM_FORCE_DATA: u8 = 7;
    pub const SET_DOWNLOAD_FORCE_SAMPLE: u8 = 8;
    pub const EFFECT_OPERATION: u8 = 10;
    pub const BLOCK_FREE: u8 = 11;
    pub const DEVICE_CONTROL: u8 = 12;
    pub const DEVICE_GAIN: u8 = 13;
    pub const SET_CUSTOM_FORCE: u8 = 14;
}

/// Feature report ids.
pub mod feature {
    pub const CREATE_NEW_EFFECT: u8 = 1;
    pub const BLOCK_LOAD: u8 = 2;
    pub const POOL: u8 = 3;
}

/// Device → host Input report ids.
pub mod input {
    pub const PID_STATUS: u8 = 2;
}
