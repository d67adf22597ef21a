//! Effect slot pool errors and their mapping onto PID Block Load status.

use crate::common::ErrorSeverity;

/// PID Block Load `loadStatus` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BlockLoadStatus {
    /// Effect block allocated
    Success = 1,
    /// Pool exhausted
    Full = 2,
    /// Invalid request
    Error = 3,
}

impl BlockLoadStatus {
    /// Decode a raw `loadStatus` byte.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(BlockLoadStatus::Success),
            2 => Some(BlockLoadStatus::Full),
            3 => Some(BlockLoadStatus::Error),
            _ => None,
        }
    }

    /// Raw wire value.
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Effect slot addressing and lifecycle errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// Effect block index is 0, beyond capacity, or names a FREE slot.
    #[error("Invalid effect block index {0}")]
    InvalidIndex(u8),

    /// No FREE slot left for a new effect.
    #[error("Effect pool exhausted")]
    PoolExhausted,

    /// The requested action is not a legal transition from the slot's state.
    #[error("Effect block {index}: cannot {action} while {from}")]
    InvalidTransition {
        /// Effect block index (1-based)
        index: u8,
        /// State name the slot was in
        from: &'static str,
        /// Attempted action
        action: &'static str,
    },

    /// A type-specific parameter block does not fit the slot's effect type.
    #[error("Effect block {index}: {parameter} parameters do not apply to effect type {effect_type}")]
    ParameterMismatch {
        /// Effect block index (1-based)
        index: u8,
        /// Raw effect type of the slot
        effect_type: u8,
        /// Parameter block kind
        parameter: &'static str,
    },

    /// Type-specific parameter block offset names no axis.
    #[error("Invalid parameter block axis {0}")]
    InvalidAxis(u8),
}

impl PoolError {
    /// Get the error severity.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PoolError::InvalidTransition { .. } => ErrorSeverity::Info,
            PoolError::PoolExhausted => ErrorSeverity::Warning,
            PoolError::InvalidIndex(_)
            | PoolError::ParameterMismatch { .. }
            | PoolError::InvalidAxis(_) => ErrorSeverity::Error,
        }
    }

    /// The Block Load status a host sees for this failure.
    pub fn block_load_status(&self) -> BlockLoadStatus {
        match self {
            PoolError::PoolExhausted => BlockLoadStatus::Full,
            _ => BlockLoadStatus::Error,
        }
    }

    /// Create an invalid transition error.
    pub fn transition(index: u8, from: &'static str, action: &'static str) -> Self {
        PoolError::InvalidTransition {
            index,
            from,
            action,
        }
    }
}
