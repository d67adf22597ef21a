//! Device configuration.
//!
//! Boot-time state of the device-level flags reported in PID Status and PID
//! Pool. Loaded from JSON; missing fields take their defaults.

use pidff_errors::{PidError, PidResult, ValidationError};
use pidff_reports::{MemoryManagement, PidStatusFlags, USB_MAX_GAIN};
use serde::{Deserialize, Serialize};

/// Device configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Device gain at power-up and after a Device Control Reset (0..255).
    pub initial_device_gain: u8,

    /// Whether actuators start enabled.
    pub actuators_enabled_at_boot: bool,

    /// Reported in PID Status.
    pub safety_switch: bool,

    /// Reported in PID Status.
    pub actuator_override: bool,

    /// Reported in PID Status.
    pub actuator_power: bool,

    /// Reported in PID Pool. Must include `DEVICE_MANAGED_POOL`.
    pub memory_management: MemoryManagement,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            initial_device_gain: USB_MAX_GAIN,
            actuators_enabled_at_boot: true,
            safety_switch: false,
            actuator_override: false,
            actuator_power: true,
            memory_management: MemoryManagement::DEVICE_MANAGED_POOL,
        }
    }
}

impl DeviceConfig {
    /// Parse and validate a JSON configuration.
    ///
    /// # Errors
    ///
    /// `Config` when the text is not valid JSON for this type, `Validation`
    /// when a value is unsupported.
    pub fn from_json(json: &str) -> PidResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| PidError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialise to pretty JSON.
    ///
    /// # Errors
    ///
    /// `Config` if serialisation fails.
    pub fn to_json(&self) -> PidResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| PidError::config(e.to_string()))
    }

    /// Check the configuration against what the device model supports.
    ///
    /// # Errors
    ///
    /// Returns the first unsupported value found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let unknown = self.memory_management.bits() & !MemoryManagement::all().bits();
        if unknown != 0 {
            return Err(ValidationError::invalid(
                "memory_management",
                format!("unknown bits 0x{unknown:02X}"),
            ));
        }
        if !self
            .memory_management
            .contains(MemoryManagement::DEVICE_MANAGED_POOL)
        {
            return Err(ValidationError::invalid(
                "memory_management",
                "effect memory is always managed by the device",
            ));
        }
        if self
            .memory_management
            .contains(MemoryManagement::SHARED_PARAMETER_BLOCKS)
        {
            return Err(ValidationError::invalid(
                "memory_management",
                "parameter blocks are stored per effect slot",
            ));
        }
        Ok(())
    }

    /// Static status bits contributed by configuration.
    pub(crate) fn status_flags(&self) -> PidStatusFlags {
        let mut flags = PidStatusFlags::empty();
        flags.set(PidStatusFlags::SAFETY_SWITCH, self.safety_switch);
        flags.set(PidStatusFlags::ACTUATOR_OVERRIDE, self.actuator_override);
        flags.set(PidStatusFlags::ACTUATOR_POWER, self.actuator_power);
        flags
    }
}
