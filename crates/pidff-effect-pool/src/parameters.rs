//! Type-specific effect parameters.
//!
//! Each axis of a slot holds at most one parameter block, tagged by kind so
//! that a block can only be read back as the kind that was written.

use pidff_reports::{
    CUSTOM_FORCE_CAPACITY, CUSTOM_FORCE_CHUNK_LEN, ParameterKind, SetConditionReport,
    SetConstantForceReport, SetPeriodicReport, SetRampForceReport,
};

/// Custom force sample storage for one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomForce {
    pub sample_count: u8,
    /// Milliseconds between samples
    pub sample_period: u16,
    pub samples: [i8; CUSTOM_FORCE_CAPACITY],
}

impl Default for CustomForce {
    fn default() -> Self {
        Self {
            sample_count: 0,
            sample_period: 0,
            samples: [0; CUSTOM_FORCE_CAPACITY],
        }
    }
}

impl CustomForce {
    /// Copy one chunk into the buffer at `offset`.
    ///
    /// Returns `false` and leaves the buffer untouched when the chunk would
    /// not fit.
    pub fn write_chunk(&mut self, offset: usize, chunk: &[i8; CUSTOM_FORCE_CHUNK_LEN]) -> bool {
        let Some(end) = offset.checked_add(CUSTOM_FORCE_CHUNK_LEN) else {
            return false;
        };
        match self.samples.get_mut(offset..end) {
            Some(dst) => {
                dst.copy_from_slice(chunk);
                true
            }
            None => false,
        }
    }

    /// Samples covered by `sample_count`, clamped to the buffer.
    pub fn active_samples(&self) -> &[i8] {
        let count = usize::from(self.sample_count).min(CUSTOM_FORCE_CAPACITY);
        self.samples.get(..count).unwrap_or(&[])
    }
}

/// One axis' parameter block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EffectParameter {
    #[default]
    Unset,
    Condition(SetConditionReport),
    Periodic(SetPeriodicReport),
    Ramp(SetRampForceReport),
    Constant(SetConstantForceReport),
    Custom(CustomForce),
}

impl EffectParameter {
    pub fn kind(&self) -> Option<ParameterKind> {
        match self {
            Self::Unset => None,
            Self::Condition(_) => Some(ParameterKind::Condition),
            Self::Periodic(_) => Some(ParameterKind::Periodic),
            Self::Ramp(_) => Some(ParameterKind::Ramp),
            Self::Constant(_) => Some(ParameterKind::Constant),
            Self::Custom(_) => Some(ParameterKind::Custom),
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, Self::Unset)
    }

    pub fn as_condition(&self) -> Option<&SetConditionReport> {
        match self {
            Self::Condition(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_periodic(&self) -> Option<&SetPeriodicReport> {
        match self {
            Self::Periodic(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_ramp(&self) -> Option<&SetRampForceReport> {
        match self {
            Self::Ramp(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_constant(&self) -> Option<&SetConstantForceReport> {
        match self {
            Self::Constant(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_custom(&self) -> Option<&CustomForce> {
        match self {
            Self::Custom(c) => Some(c),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_bounds() {
        let mut custom = CustomForce::default();
        let chunk = [1i8; CUSTOM_FORCE_CHUNK_LEN];
        assert!(custom.write_chunk(0, &chunk));
        assert!(custom.write_chunk(CUSTOM_FORCE_CAPACITY - CUSTOM_FORCE_CHUNK_LEN, &chunk));
        assert!(!custom.write_chunk(CUSTOM_FORCE_CAPACITY - CUSTOM_FORCE_CHUNK_LEN + 1, &chunk));
        assert!(!custom.write_chunk(usize::MAX, &chunk));
    }

    #[test]
    fn test_active_samples_clamped() {
        let custom = CustomForce {
            sample_count: 200,
            ..CustomForce::default()
        };
        assert_eq!(custom.active_samples().len(), CUSTOM_FORCE_CAPACITY);
    }

    #[test]
    fn test_accessors_match_kind() {
        let param = EffectParameter::Constant(SetConstantForceReport {
            effect_block_index: 1,
            magnitude: -10,
        });
        assert_eq!(param.kind(), Some(ParameterKind::Constant));
        assert!(param.as_condition().is_none());
        assert_eq!(param.as_constant().map(|c| c.magnitude), Some(-10));
        assert!(!EffectParameter::Unset.is_set());
    }
}
