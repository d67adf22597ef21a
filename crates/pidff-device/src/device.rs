//! The PID device: routes host reports into the effect pool and owns the
//! device-wide flags.

use std::sync::atomic::{AtomicBool, Ordering};

use pidff_effect_pool::{EffectPool, TickSummary};
use pidff_errors::{BlockLoadStatus, PidResult, ReportError};
use pidff_reports::{
    BlockLoadReport, CreateNewEffectReport, DeviceControl, FeatureReport, MAX_BYTE_COUNT,
    MAX_EFFECTS, NUM_AXES, OutputReport, PidPoolReport, PidStatusFlags, PidStatusReport,
    SetDownloadForceSampleReport, WheelInputReport, gain_to_physical,
};
use pidff_telemetry::TelemetrySnapshot;
use tracing::{debug, info, trace, warn};

use crate::config::DeviceConfig;

/// Device model behind the USB transport.
///
/// The transport hands every Output report to [`handle_output`](Self::handle_output)
/// and every Set Feature to [`handle_set_feature`](Self::handle_set_feature);
/// Get Feature and Input requests read the corresponding `*_report` method.
/// The periodic tick context calls [`tick`](Self::tick).
#[derive(Debug)]
pub struct PidDevice<const N: usize = MAX_EFFECTS> {
    config: DeviceConfig,
    pool: EffectPool<N>,
    device_gain: u8,
    actuators_enabled: bool,
    paused: AtomicBool,
    download_sample: SetDownloadForceSampleReport,
    last_block_load: BlockLoadReport,
    last_effect_index: u8,
}

impl<const N: usize> PidDevice<N> {
    /// Create a device from a validated configuration.
    ///
    /// # Errors
    ///
    /// `Validation` if the configuration is unsupported.
    pub fn new(config: DeviceConfig) -> PidResult<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: DeviceConfig) -> Self {
        let pool = EffectPool::new();
        let last_block_load = BlockLoadReport {
            effect_block_index: 0,
            load_status: BlockLoadStatus::Success,
            ram_pool_available: pool.ram_pool_available(),
        };
        debug!(
            "PID device: {} effect slots, gain={}",
            N, config.initial_device_gain
        );
        Self {
            device_gain: config.initial_device_gain,
            actuators_enabled: config.actuators_enabled_at_boot,
            config,
            pool,
            paused: AtomicBool::new(false),
            download_sample: SetDownloadForceSampleReport::default(),
            last_block_load,
            last_effect_index: 0,
        }
    }

    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    pub fn pool(&self) -> &EffectPool<N> {
        &self.pool
    }

    pub fn device_gain(&self) -> u8 {
        self.device_gain
    }

    /// Device gain on the 0..10000 physical scale.
    pub fn physical_gain(&self) -> u16 {
        gain_to_physical(self.device_gain)
    }

    pub fn actuators_enabled(&self) -> bool {
        self.actuators_enabled
    }

    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Acquire)
    }

    /// The paused flag, for a force engine running in another context.
    pub fn paused_flag(&self) -> &AtomicBool {
        &self.paused
    }

    /// Latest Set Download Force Sample.
    pub fn download_sample(&self) -> SetDownloadForceSampleReport {
        self.download_sample
    }

    /// Decode and apply one Output report.
    ///
    /// # Errors
    ///
    /// `Report` for malformed bytes (nothing is changed), `Pool` when the
    /// pool rejects the request. Both are recoverable.
    pub fn handle_output(&mut self, bytes: &[u8]) -> PidResult<()> {
        let report = match OutputReport::decode(bytes) {
            Ok(report) => report,
            Err(e) => {
                warn!("Dropped malformed output report ({} bytes): {}", bytes.len(), e);
                return Err(e.into());
            }
        };
        trace!("Output report 0x{:02X}", report.report_id());
        self.apply_output(report)
    }

    /// Apply an already decoded Output report.
    ///
    /// # Errors
    ///
    /// As for [`handle_output`](Self::handle_output).
    pub fn apply_output(&mut self, report: OutputReport) -> PidResult<()> {
        match report {
            OutputReport::SetEffect(r) => self.pool.set_effect(r)?,
            OutputReport::SetEnvelope(r) => self.pool.set_envelope(r)?,
            OutputReport::SetCondition(r) => self.pool.set_condition(r)?,
            OutputReport::SetPeriodic(r) => self.pool.set_periodic(r)?,
            OutputReport::SetConstantForce(r) => self.pool.set_constant_force(r)?,
            OutputReport::SetRampForce(r) => self.pool.set_ramp_force(r)?,
            OutputReport::SetCustomForceData(r) => self.pool.set_custom_force_data(r)?,
            OutputReport::SetCustomForce(r) => self.pool.set_custom_force(r)?,
            OutputReport::SetDownloadForceSample(r) => self.download_sample = r,
            OutputReport::EffectOperation(r) => {
                self.pool
                    .effect_operation(r.effect_block_index, r.operation, r.loop_count)?;
                self.last_effect_index = r.effect_block_index;
            }
            OutputReport::BlockFree(r) => {
                self.pool.block_free(r.effect_block_index)?;
                if r.effect_block_index == 0 || r.effect_block_index == self.last_effect_index {
                    self.last_effect_index = 0;
                }
            }
            OutputReport::DeviceControl(r) => self.device_control(r.control),
            OutputReport::DeviceGain(r) => {
                debug!("Device gain {}", r.gain);
                self.device_gain = r.gain;
            }
        }
        Ok(())
    }

    /// Handle a Set Feature request; only Create New Effect is writable.
    ///
    /// The returned Block Load is also kept for the following Get Feature.
    ///
    /// # Errors
    ///
    /// `Report` for malformed bytes or a read-only feature id. The stored
    /// Block Load then reports `Error`.
    pub fn handle_set_feature(&mut self, bytes: &[u8]) -> PidResult<BlockLoadReport> {
        let create = match FeatureReport::decode(bytes) {
            Ok(FeatureReport::CreateNewEffect(create)) => create,
            Ok(other) => {
                warn!("Set Feature on read-only report 0x{:02X}", other.report_id());
                self.record_block_load(0, BlockLoadStatus::Error);
                return Err(ReportError::UnknownReportId(other.report_id()).into());
            }
            Err(e) => {
                warn!("Dropped malformed feature report ({} bytes): {}", bytes.len(), e);
                self.record_block_load(0, BlockLoadStatus::Error);
                return Err(e.into());
            }
        };
        Ok(self.create_new_effect(create))
    }

    /// Allocate a slot for a Create New Effect request.
    pub fn create_new_effect(&mut self, request: CreateNewEffectReport) -> BlockLoadReport {
        if request.byte_count > MAX_BYTE_COUNT {
            warn!("Create New Effect byte count {} too large", request.byte_count);
            return self.record_block_load(0, BlockLoadStatus::Error);
        }
        match self.pool.create_effect(request.effect_type) {
            Ok(index) => self.record_block_load(index, BlockLoadStatus::Success),
            Err(e) => self.record_block_load(0, e.block_load_status()),
        }
    }

    fn record_block_load(&mut self, index: u8, status: BlockLoadStatus) -> BlockLoadReport {
        let report = BlockLoadReport {
            effect_block_index: index,
            load_status: status,
            ram_pool_available: self.pool.ram_pool_available(),
        };
        self.last_block_load = report;
        report
    }

    fn device_control(&mut self, control: DeviceControl) {
        if control.contains(DeviceControl::ENABLE_ACTUATORS) {
            self.actuators_enabled = true;
        }
        if control.contains(DeviceControl::DISABLE_ACTUATORS) {
            self.actuators_enabled = false;
        }
        if control.contains(DeviceControl::STOP_ALL_EFFECTS) {
            self.pool.stop_all();
        }
        if control.contains(DeviceControl::RESET) {
            info!("Device reset");
            self.pool.reset();
            self.device_gain = self.config.initial_device_gain;
            self.last_effect_index = 0;
            self.paused.store(false, Ordering::Release);
        }
        if control.contains(DeviceControl::PAUSE) {
            info!("Device paused");
            self.paused.store(true, Ordering::Release);
        }
        if control.contains(DeviceControl::CONTINUE) {
            info!("Device continued");
            self.paused.store(false, Ordering::Release);
        }
    }

    /// Advance effect playback time.
    pub fn tick(&mut self, now_ms: u32) -> TickSummary {
        self.pool.tick(now_ms)
    }

    /// Reply to the most recent Create New Effect.
    pub fn block_load_report(&self) -> BlockLoadReport {
        self.last_block_load
    }

    /// Device capability, computed from the live pool.
    pub fn pool_report(&self) -> PidPoolReport {
        PidPoolReport {
            ram_pool_size: self.pool.ram_pool_size(),
            max_simultaneous_effects: u8::try_from(N).unwrap_or(u8::MAX),
            memory_management: self.config.memory_management,
        }
    }

    /// PID Status for the effect most recently operated on.
    pub fn status_report(&self) -> PidStatusReport {
        let mut status = self.config.status_flags();
        status.set(PidStatusFlags::DEVICE_PAUSED, self.is_paused());
        status.set(PidStatusFlags::ACTUATORS_ENABLED, self.actuators_enabled);
        let playing = self
            .pool
            .slot(self.last_effect_index)
            .is_some_and(|slot| slot.is_playing());
        PidStatusReport {
            status,
            effect_block_index: self.last_effect_index,
            playing,
        }
    }
}

impl<const N: usize> Default for PidDevice<N> {
    fn default() -> Self {
        Self::from_valid_config(DeviceConfig::default())
    }
}

/// Joystick Input report for the current axis positions.
///
/// The two telemetry axes fill X and Y, saturated to 16 bits; the remaining
/// axes read zero.
pub fn wheel_input_report(buttons: u8, telemetry: &TelemetrySnapshot) -> WheelInputReport {
    let mut axes = [0i16; pidff_reports::WHEEL_INPUT_AXES];
    for (out, &position) in axes.iter_mut().zip(telemetry.position.iter()).take(NUM_AXES) {
        *out = saturate_i16(position);
    }
    WheelInputReport { buttons, axes }
}

fn saturate_i16(value: i32) -> i16 {
    i16::try_from(value).unwrap_or(if value < 0 { i16::MIN } else { i16::MAX })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_input_saturates() {
        let snapshot = TelemetrySnapshot {
            position: [100_000, -7],
            ..TelemetrySnapshot::default()
        };
        let report = wheel_input_report(0x02, &snapshot);
        assert_eq!(report.axes, [i16::MAX, -7, 0, 0, 0, 0]);
        assert_eq!(report.buttons, 0x02);
    }

    #[test]
    fn test_default_device_state() {
        let device: PidDevice = PidDevice::default();
        assert_eq!(device.device_gain(), 255);
        assert_eq!(device.physical_gain(), 10_000);
        assert!(device.actuators_enabled());
        assert!(!device.is_paused());
        assert_eq!(device.pool_report().max_simultaneous_effects, 40);
    }
}
