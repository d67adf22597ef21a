//! Metric kinds and the per-update output record.

use pidff_reports::NUM_AXES;
use serde::{Deserialize, Serialize};

/// The three quantities derived from the position stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Position,
    Speed,
    Acceleration,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Position, Metric::Speed, Metric::Acceleration];

    pub(crate) fn slot(self) -> usize {
        match self {
            Metric::Position => 0,
            Metric::Speed => 1,
            Metric::Acceleration => 2,
        }
    }
}

/// Raw and filtered metrics after one position update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub position: [i32; NUM_AXES],
    pub speed: [i32; NUM_AXES],
    pub acceleration: [i32; NUM_AXES],
    pub filtered_position: [i32; NUM_AXES],
    pub filtered_speed: [i32; NUM_AXES],
    pub filtered_acceleration: [i32; NUM_AXES],
}

impl TelemetrySnapshot {
    pub fn raw(&self, metric: Metric) -> [i32; NUM_AXES] {
        match metric {
            Metric::Position => self.position,
            Metric::Speed => self.speed,
            Metric::Acceleration => self.acceleration,
        }
    }

    pub fn filtered(&self, metric: Metric) -> [i32; NUM_AXES] {
        match metric {
            Metric::Position => self.filtered_position,
            Metric::Speed => self.filtered_speed,
            Metric::Acceleration => self.filtered_acceleration,
        }
    }
}
