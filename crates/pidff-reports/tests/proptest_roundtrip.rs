//! Property tests for the report wire model.
//!
//! Every layout must survive decode(encode(r)) unchanged, and dispatch must
//! depend on the id byte alone.

use pidff_reports::{
    AxisEnable, BlockFreeReport, BlockLoadReport, BlockLoadStatus, CreateNewEffectReport,
    DeviceControl, DeviceControlReport, DeviceGainReport, EffectOperation, EffectOperationReport,
    EffectType, FeatureReport, MAX_REPORT_LEN, MemoryManagement, OutputReport, PidPoolReport,
    PidReport, PidStatusFlags, PidStatusReport, ReportError, SetConditionReport,
    SetConstantForceReport, SetCustomForceDataReport, SetCustomForceReport,
    SetDownloadForceSampleReport, SetEffectReport, SetEnvelopeReport, SetPeriodicReport,
    SetRampForceReport, WheelInputReport,
};
use proptest::prelude::*;

fn effect_type() -> impl Strategy<Value = EffectType> {
    prop::sample::select(EffectType::ALL.to_vec())
}

fn operation() -> impl Strategy<Value = EffectOperation> {
    prop::sample::select(vec![
        EffectOperation::Start,
        EffectOperation::StartSolo,
        EffectOperation::Stop,
    ])
}

fn load_status() -> impl Strategy<Value = BlockLoadStatus> {
    prop::sample::select(vec![
        BlockLoadStatus::Success,
        BlockLoadStatus::Full,
        BlockLoadStatus::Error,
    ])
}

fn set_effect() -> impl Strategy<Value = SetEffectReport> {
    (
        (any::<u8>(), effect_type(), any::<u16>(), any::<u16>(), any::<u16>()),
        (any::<u8>(), any::<u8>(), any::<u8>(), any::<u8>(), any::<u8>(), any::<u16>()),
    )
        .prop_map(
            |(
                (effect_block_index, effect_type, duration, trigger_repeat_interval, sample_period),
                (gain, trigger_button, axis, direction_x, direction_y, start_delay),
            )| SetEffectReport {
                effect_block_index,
                effect_type,
                duration,
                trigger_repeat_interval,
                sample_period,
                gain,
                trigger_button,
                enable_axis: AxisEnable::from_bits_retain(axis),
                direction_x,
                direction_y,
                start_delay,
            },
        )
}

fn output_report() -> impl Strategy<Value = OutputReport> {
    prop_oneof![
        set_effect().prop_map(OutputReport::SetEffect),
        (any::<u8>(), any::<u16>(), any::<u16>(), any::<u16>(), any::<u16>()).prop_map(
            |(effect_block_index, attack_level, fade_level, attack_time, fade_time)| {
                OutputReport::SetEnvelope(SetEnvelopeReport {
                    effect_block_index,
                    attack_level,
                    fade_level,
                    attack_time,
                    fade_time,
                })
            }
        ),
        (
            any::<u8>(),
            any::<u8>(),
            any::<i16>(),
            any::<[u16; 5]>()
        )
            .prop_map(|(effect_block_index, parameter_block_offset, cp_offset, c)| {
                OutputReport::SetCondition(SetConditionReport {
                    effect_block_index,
                    parameter_block_offset,
                    cp_offset,
                    positive_coefficient: c[0],
                    negative_coefficient: c[1],
                    positive_saturation: c[2],
                    negative_saturation: c[3],
                    dead_band: c[4],
                })
            }),
        (any::<u8>(), any::<u16>(), any::<i16>(), any::<u16>(), any::<u16>()).prop_map(
            |(effect_block_index, magnitude, offset, phase, period)| {
                OutputReport::SetPeriodic(SetPeriodicReport {
                    effect_block_index,
                    magnitude,
                    offset,
                    phase,
                    period,
                })
            }
        ),
        (any::<u8>(), any::<i16>()).prop_map(|(effect_block_index, magnitude)| {
            OutputReport::SetConstantForce(SetConstantForceReport {
                effect_block_index,
                magnitude,
            })
        }),
        (any::<u8>(), any::<i16>(), any::<i16>()).prop_map(
            |(effect_block_index, start_magnitude, end_magnitude)| {
                OutputReport::SetRampForce(SetRampForceReport {
                    effect_block_index,
                    start_magnitude,
                    end_magnitude,
                })
            }
        ),
        (any::<u8>(), any::<u16>(), any::<[i8; 12]>()).prop_map(
            |(effect_block_index, data_offset, data)| {
                OutputReport::SetCustomForceData(SetCustomForceDataReport {
                    effect_block_index,
                    data_offset,
                    data,
                })
            }
        ),
        (any::<i8>(), any::<i8>()).prop_map(|(x, y)| {
            OutputReport::SetDownloadForceSample(SetDownloadForceSampleReport { x, y })
        }),
        (any::<u8>(), operation(), any::<u8>()).prop_map(
            |(effect_block_index, operation, loop_count)| {
                OutputReport::EffectOperation(EffectOperationReport {
                    effect_block_index,
                    operation,
                    loop_count,
                })
            }
        ),
        any::<u8>().prop_map(|effect_block_index| {
            OutputReport::BlockFree(BlockFreeReport { effect_block_index })
        }),
        any::<u8>().prop_map(|bits| OutputReport::DeviceControl(DeviceControlReport {
            control: DeviceControl::from_bits_retain(bits),
        })),
        any::<u8>().prop_map(|gain| OutputReport::DeviceGain(DeviceGainReport { gain })),
        (any::<u8>(), any::<u8>(), any::<u16>()).prop_map(
            |(effect_block_index, sample_count, sample_period)| {
                OutputReport::SetCustomForce(SetCustomForceReport {
                    effect_block_index,
                    sample_count,
                    sample_period,
                })
            }
        ),
    ]
}

fn feature_report() -> impl Strategy<Value = FeatureReport> {
    prop_oneof![
        (effect_type(), 0u16..=511).prop_map(|(effect_type, byte_count)| {
            FeatureReport::CreateNewEffect(CreateNewEffectReport {
                effect_type,
                byte_count,
            })
        }),
        (any::<u8>(), load_status(), any::<u16>()).prop_map(
            |(effect_block_index, load_status, ram_pool_available)| {
                FeatureReport::BlockLoad(BlockLoadReport {
                    effect_block_index,
                    load_status,
                    ram_pool_available,
                })
            }
        ),
        (any::<u16>(), any::<u8>(), any::<u8>()).prop_map(|(ram_pool_size, max, bits)| {
            FeatureReport::PidPool(PidPoolReport {
                ram_pool_size,
                max_simultaneous_effects: max,
                memory_management: MemoryManagement::from_bits_retain(bits),
            })
        }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_output_roundtrip(report in output_report()) {
        let mut buf = [0u8; MAX_REPORT_LEN];
        let len = report.encode_into(&mut buf)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        let bytes = buf.get(..len).ok_or_else(|| TestCaseError::fail("short buffer"))?;
        prop_assert_eq!(bytes.first().copied(), Some(report.report_id()));
        let decoded = OutputReport::decode(bytes)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(decoded, report);
    }

    #[test]
    fn prop_feature_roundtrip(report in feature_report()) {
        let mut buf = [0u8; MAX_REPORT_LEN];
        let len = report.encode_into(&mut buf)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        let bytes = buf.get(..len).ok_or_else(|| TestCaseError::fail("short buffer"))?;
        let decoded = FeatureReport::decode(bytes)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(decoded, report);
    }

    #[test]
    fn prop_status_roundtrip(bits in any::<u8>(), index in 0u8..=0x7F, playing in any::<bool>()) {
        let report = PidStatusReport {
            status: PidStatusFlags::from_bits_retain(bits),
            effect_block_index: index,
            playing,
        };
        let decoded = PidStatusReport::decode(&report.to_bytes())
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(decoded, report);
    }

    #[test]
    fn prop_wheel_input_roundtrip(buttons in any::<u8>(), axes in any::<[i16; 6]>()) {
        let report = WheelInputReport { buttons, axes };
        let decoded = WheelInputReport::decode(&report.to_bytes())
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(decoded, report);
    }

    /// A buffer of the wrong size is rejected for its id, never reinterpreted.
    #[test]
    fn prop_wrong_size_rejected(report in output_report(), extra in 1usize..4, truncate in any::<bool>()) {
        let mut buf = [0u8; MAX_REPORT_LEN + 4];
        let len = report.encode_into(&mut buf)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        let bad_len = if truncate { len.saturating_sub(extra).max(1) } else { len + extra };
        prop_assume!(bad_len != len);
        let bytes = buf.get(..bad_len).ok_or_else(|| TestCaseError::fail("short buffer"))?;
        let result = OutputReport::decode(bytes);
        let is_length_error = matches!(
            result,
            Err(ReportError::LengthMismatch { report_id, expected, actual })
                if report_id == report.report_id() && expected == len && actual == bad_len
        );
        prop_assert!(is_length_error, "unexpected result {:?}", result);
    }

    #[test]
    fn prop_arbitrary_bytes_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..24)) {
        let _output = OutputReport::decode(&bytes);
        let _feature = FeatureReport::decode(&bytes);
        let _status = PidStatusReport::decode(&bytes);
    }
}

/// Low, middle and high value of every field.
#[derive(Debug, Clone, Copy)]
enum Level {
    Min,
    Mid,
    Max,
}

impl Level {
    const ALL: [Level; 3] = [Level::Min, Level::Mid, Level::Max];

    fn u8(self) -> u8 {
        match self {
            Level::Min => 0,
            Level::Mid => 0x80,
            Level::Max => u8::MAX,
        }
    }

    fn u16(self) -> u16 {
        match self {
            Level::Min => 0,
            Level::Mid => 0x8000,
            Level::Max => u16::MAX,
        }
    }

    fn i16(self) -> i16 {
        match self {
            Level::Min => i16::MIN,
            Level::Mid => 0,
            Level::Max => i16::MAX,
        }
    }

    fn i8(self) -> i8 {
        match self {
            Level::Min => i8::MIN,
            Level::Mid => 0,
            Level::Max => i8::MAX,
        }
    }

    fn effect_type(self) -> EffectType {
        match self {
            Level::Min => EffectType::Constant,
            Level::Mid => EffectType::Spring,
            Level::Max => EffectType::Custom,
        }
    }

    fn operation(self) -> EffectOperation {
        match self {
            Level::Min => EffectOperation::Start,
            Level::Mid => EffectOperation::StartSolo,
            Level::Max => EffectOperation::Stop,
        }
    }

    fn load_status(self) -> BlockLoadStatus {
        match self {
            Level::Min => BlockLoadStatus::Success,
            Level::Mid => BlockLoadStatus::Full,
            Level::Max => BlockLoadStatus::Error,
        }
    }
}

fn output_boundaries(level: Level) -> [OutputReport; 13] {
    let (b, w, s) = (level.u8(), level.u16(), level.i16());
    [
        OutputReport::SetEffect(SetEffectReport {
            effect_block_index: b,
            effect_type: level.effect_type(),
            duration: w,
            trigger_repeat_interval: w,
            sample_period: w,
            gain: b,
            trigger_button: b,
            enable_axis: AxisEnable::from_bits_retain(b),
            direction_x: b,
            direction_y: b,
            start_delay: w,
        }),
        OutputReport::SetEnvelope(SetEnvelopeReport {
            effect_block_index: b,
            attack_level: w,
            fade_level: w,
            attack_time: w,
            fade_time: w,
        }),
        OutputReport::SetCondition(SetConditionReport {
            effect_block_index: b,
            parameter_block_offset: b,
            cp_offset: s,
            positive_coefficient: w,
            negative_coefficient: w,
            positive_saturation: w,
            negative_saturation: w,
            dead_band: w,
        }),
        OutputReport::SetPeriodic(SetPeriodicReport {
            effect_block_index: b,
            magnitude: w,
            offset: s,
            phase: w,
            period: w,
        }),
        OutputReport::SetConstantForce(SetConstantForceReport {
            effect_block_index: b,
            magnitude: s,
        }),
        OutputReport::SetRampForce(SetRampForceReport {
            effect_block_index: b,
            start_magnitude: s,
            end_magnitude: s,
        }),
        OutputReport::SetCustomForceData(SetCustomForceDataReport {
            effect_block_index: b,
            data_offset: w,
            data: [level.i8(); 12],
        }),
        OutputReport::SetDownloadForceSample(SetDownloadForceSampleReport {
            x: level.i8(),
            y: level.i8(),
        }),
        OutputReport::EffectOperation(EffectOperationReport {
            effect_block_index: b,
            operation: level.operation(),
            loop_count: b,
        }),
        OutputReport::BlockFree(BlockFreeReport {
            effect_block_index: b,
        }),
        OutputReport::DeviceControl(DeviceControlReport {
            control: DeviceControl::from_bits_retain(b),
        }),
        OutputReport::DeviceGain(DeviceGainReport { gain: b }),
        OutputReport::SetCustomForce(SetCustomForceReport {
            effect_block_index: b,
            sample_count: b,
            sample_period: w,
        }),
    ]
}

fn feature_boundaries(level: Level) -> [FeatureReport; 3] {
    let (b, w) = (level.u8(), level.u16());
    [
        FeatureReport::CreateNewEffect(CreateNewEffectReport {
            effect_type: level.effect_type(),
            byte_count: w,
        }),
        FeatureReport::BlockLoad(BlockLoadReport {
            effect_block_index: b,
            load_status: level.load_status(),
            ram_pool_available: w,
        }),
        FeatureReport::PidPool(PidPoolReport {
            ram_pool_size: w,
            max_simultaneous_effects: b,
            memory_management: MemoryManagement::from_bits_retain(b),
        }),
    ]
}

#[test]
fn test_output_boundaries_roundtrip() -> Result<(), ReportError> {
    let mut buf = [0u8; MAX_REPORT_LEN];
    for level in Level::ALL {
        for report in output_boundaries(level) {
            let len = report.encode_into(&mut buf)?;
            let bytes = buf.get(..len).ok_or(ReportError::Empty)?;
            assert_eq!(OutputReport::decode(bytes)?, report, "{level:?}");
        }
    }
    Ok(())
}

#[test]
fn test_feature_boundaries_roundtrip() -> Result<(), ReportError> {
    let mut buf = [0u8; MAX_REPORT_LEN];
    for level in Level::ALL {
        for report in feature_boundaries(level) {
            let len = report.encode_into(&mut buf)?;
            let bytes = buf.get(..len).ok_or(ReportError::Empty)?;
            assert_eq!(FeatureReport::decode(bytes)?, report, "{level:?}");
        }
    }
    Ok(())
}

#[test]
fn test_input_boundaries_roundtrip() -> Result<(), ReportError> {
    for (level, index) in Level::ALL.into_iter().zip([0u8, 0x40, 0x7F]) {
        let status = PidStatusReport {
            status: PidStatusFlags::from_bits_retain(level.u8()),
            effect_block_index: index,
            playing: index != 0,
        };
        assert_eq!(PidStatusReport::decode(&status.to_bytes())?, status);

        let input = WheelInputReport {
            buttons: level.u8(),
            axes: [level.i16(); 6],
        };
        assert_eq!(WheelInputReport::decode(&input.to_bytes())?, input);
    }
    Ok(())
}

#[test]
fn test_duration_boundaries_roundtrip() -> Result<(), ReportError> {
    for duration in [0u16, 1, 0x3FFF, 0x7FFE, 0x7FFF, u16::MAX] {
        let report = SetEffectReport {
            duration,
            ..SetEffectReport::new(40, EffectType::Custom)
        };
        assert_eq!(SetEffectReport::decode(&report.to_bytes())?, report);
    }
    Ok(())
}
