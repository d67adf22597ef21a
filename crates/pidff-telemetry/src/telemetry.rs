//! Position differencing for all axes.

use std::fmt;

use pidff_reports::NUM_AXES;

use crate::filter::MetricFilter;
use crate::metric::{Metric, TelemetrySnapshot};

type BoxedFilter = Box<dyn MetricFilter + Send>;

/// Turns absolute axis positions into speed and acceleration.
///
/// Speed is the first difference of position and acceleration the second,
/// both in wrapping 32-bit arithmetic. Each metric may carry a filter; a
/// metric without one keeps its previous filtered value (initially zero).
///
/// # Example
///
/// ```
/// use pidff_telemetry::AxisTelemetry;
///
/// let mut axes = AxisTelemetry::new();
/// axes.update_position([0, 0]);
/// let snapshot = axes.update_position([10, -5]);
/// assert_eq!(snapshot.speed, [10, -5]);
/// assert_eq!(snapshot.acceleration, [10, -5]);
///
/// let snapshot = axes.update_position([10, -5]);
/// assert_eq!(snapshot.speed, [0, 0]);
/// assert_eq!(snapshot.acceleration, [-10, 5]);
/// ```
pub struct AxisTelemetry {
    current: TelemetrySnapshot,
    filters: [Option<BoxedFilter>; 3],
}

impl AxisTelemetry {
    /// Differentiator with no filters.
    pub fn new() -> Self {
        Self {
            current: TelemetrySnapshot::default(),
            filters: [None, None, None],
        }
    }

    pub fn builder() -> AxisTelemetryBuilder {
        AxisTelemetryBuilder::default()
    }

    /// Feed one sample per axis and return the updated metrics.
    pub fn update_position(&mut self, new_position: [i32; NUM_AXES]) -> TelemetrySnapshot {
        let state = &mut self.current;
        for (axis, &position) in new_position.iter().enumerate() {
            let (Some(last_position), Some(last_speed), Some(last_acceleration)) = (
                state.position.get_mut(axis),
                state.speed.get_mut(axis),
                state.acceleration.get_mut(axis),
            ) else {
                continue;
            };

            let speed = position.wrapping_sub(*last_position);
            let acceleration = speed.wrapping_sub(*last_speed);
            *last_position = position;
            *last_speed = speed;
            *last_acceleration = acceleration;

            for (metric, raw) in [
                (Metric::Position, position),
                (Metric::Speed, speed),
                (Metric::Acceleration, acceleration),
            ] {
                let Some(Some(filter)) = self.filters.get_mut(metric.slot()) else {
                    continue;
                };
                let filtered = filter.apply(raw, axis);
                let target = match metric {
                    Metric::Position => state.filtered_position.get_mut(axis),
                    Metric::Speed => state.filtered_speed.get_mut(axis),
                    Metric::Acceleration => state.filtered_acceleration.get_mut(axis),
                };
                if let Some(target) = target {
                    *target = filtered;
                }
            }
        }
        self.current
    }

    pub fn snapshot(&self) -> TelemetrySnapshot {
        self.current
    }

    pub fn position(&self) -> [i32; NUM_AXES] {
        self.current.position
    }

    pub fn speed(&self) -> [i32; NUM_AXES] {
        self.current.speed
    }

    pub fn acceleration(&self) -> [i32; NUM_AXES] {
        self.current.acceleration
    }

    pub fn filtered(&self, metric: Metric) -> [i32; NUM_AXES] {
        self.current.filtered(metric)
    }

    pub fn has_filter(&self, metric: Metric) -> bool {
        matches!(self.filters.get(metric.slot()), Some(Some(_)))
    }

    /// Forget all history, including filter state.
    pub fn reset(&mut self) {
        self.current = TelemetrySnapshot::default();
        for filter in self.filters.iter_mut().flatten() {
            filter.reset();
        }
    }
}

impl Default for AxisTelemetry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AxisTelemetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AxisTelemetry")
            .field("current", &self.current)
            .field("position_filter", &self.has_filter(Metric::Position))
            .field("speed_filter", &self.has_filter(Metric::Speed))
            .field("acceleration_filter", &self.has_filter(Metric::Acceleration))
            .finish()
    }
}

/// Assigns optional filters per metric before building an [`AxisTelemetry`].
#[derive(Default)]
pub struct AxisTelemetryBuilder {
    filters: [Option<BoxedFilter>; 3],
}

impl AxisTelemetryBuilder {
    pub fn filter(mut self, metric: Metric, filter: impl MetricFilter + Send + 'static) -> Self {
        if let Some(slot) = self.filters.get_mut(metric.slot()) {
            *slot = Some(Box::new(filter));
        }
        self
    }

    pub fn position_filter(self, filter: impl MetricFilter + Send + 'static) -> Self {
        self.filter(Metric::Position, filter)
    }

    pub fn speed_filter(self, filter: impl MetricFilter + Send + 'static) -> Self {
        self.filter(Metric::Speed, filter)
    }

    pub fn acceleration_filter(self, filter: impl MetricFilter + Send + 'static) -> Self {
        self.filter(Metric::Acceleration, filter)
    }

    pub fn build(self) -> AxisTelemetry {
        AxisTelemetry {
            current: TelemetrySnapshot::default(),
            filters: self.filters,
        }
    }
}

impl fmt::Debug for AxisTelemetryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let assigned: Vec<Metric> = Metric::ALL
            .into_iter()
            .filter(|m| matches!(self.filters.get(m.slot()), Some(Some(_))))
            .collect();
        f.debug_struct("AxisTelemetryBuilder")
            .field("filters", &assigned)
            .finish()
    }
}
