//! Per-axis smoothing filters for telemetry metrics.
//!
//! A filter sees every raw value of one metric together with its axis index
//! and returns the value to publish. Filters observe the derivative chain;
//! their output is never fed back into differencing.

use pidff_reports::NUM_AXES;

/// A smoothing function applied to one metric.
pub trait MetricFilter {
    /// Filter `raw` for `axis` (0-based).
    fn apply(&mut self, raw: i32, axis: usize) -> i32;

    /// Drop accumulated history.
    fn reset(&mut self) {}
}

impl<F> MetricFilter for F
where
    F: FnMut(i32, usize) -> i32,
{
    fn apply(&mut self, raw: i32, axis: usize) -> i32 {
        self(raw, axis)
    }
}

/// Smoothing coefficient for level 0 (none) through 8 (heaviest).
fn smoothing_alpha(level: u8) -> f32 {
    match level {
        0 => 1.0,
        1 => 0.5,
        2 => 0.3,
        3 => 0.2,
        4 => 0.1,
        5 => 0.05,
        6 => 0.03,
        7 => 0.02,
        _ => 0.01,
    }
}

/// Exponential moving average, independent per axis.
///
/// # Example
///
/// ```
/// use pidff_telemetry::{ExponentialSmoothing, MetricFilter};
///
/// let mut ema = ExponentialSmoothing::new(1);
/// assert_eq!(ema.apply(100, 0), 50);
/// assert_eq!(ema.apply(100, 0), 75);
/// assert_eq!(ema.apply(100, 1), 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialSmoothing {
    level: u8,
    alpha: f32,
    prev_output: [f32; NUM_AXES],
}

impl ExponentialSmoothing {
    /// Levels above 8 behave as 8.
    pub fn new(level: u8) -> Self {
        let level = level.min(8);
        Self {
            level,
            alpha: smoothing_alpha(level),
            prev_output: [0.0; NUM_AXES],
        }
    }

    pub fn bypass() -> Self {
        Self::new(0)
    }

    pub fn light() -> Self {
        Self::new(2)
    }

    pub fn medium() -> Self {
        Self::new(4)
    }

    pub fn heavy() -> Self {
        Self::new(6)
    }

    pub fn level(&self) -> u8 {
        self.level
    }
}

impl Default for ExponentialSmoothing {
    fn default() -> Self {
        Self::medium()
    }
}

impl MetricFilter for ExponentialSmoothing {
    fn apply(&mut self, raw: i32, axis: usize) -> i32 {
        let Some(prev) = self.prev_output.get_mut(axis) else {
            return raw;
        };
        let filtered = *prev + self.alpha * (raw as f32 - *prev);
        *prev = filtered;
        filtered.round() as i32
    }

    fn reset(&mut self) {
        self.prev_output = [0.0; NUM_AXES];
    }
}

/// Boxcar average over the last `W` samples of each axis.
///
/// Until `W` samples have arrived the average covers only those seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovingAverage<const W: usize> {
    window: [[i32; W]; NUM_AXES],
    next: [usize; NUM_AXES],
    filled: [usize; NUM_AXES],
}

impl<const W: usize> MovingAverage<W> {
    const WINDOW_CHECK: () = assert!(W >= 1, "moving average window must be non-empty");

    pub fn new() -> Self {
        let () = Self::WINDOW_CHECK;
        Self {
            window: [[0; W]; NUM_AXES],
            next: [0; NUM_AXES],
            filled: [0; NUM_AXES],
        }
    }
}

impl<const W: usize> Default for MovingAverage<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize> MetricFilter for MovingAverage<W> {
    fn apply(&mut self, raw: i32, axis: usize) -> i32 {
        let (Some(window), Some(next), Some(filled)) = (
            self.window.get_mut(axis),
            self.next.get_mut(axis),
            self.filled.get_mut(axis),
        ) else {
            return raw;
        };

        if let Some(slot) = window.get_mut(*next) {
            *slot = raw;
        }
        *next = (*next + 1) % W;
        *filled = (*filled + 1).min(W);

        let sum: i64 = window.iter().take(*filled).map(|&v| i64::from(v)).sum();
        let count = i64::try_from(*filled).unwrap_or(1).max(1);
        i32::try_from(sum / count).unwrap_or(raw)
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_filter() {
        let mut double = |raw: i32, _axis: usize| raw * 2;
        assert_eq!(MetricFilter::apply(&mut double, 21, 0), 42);
    }

    #[test]
    fn test_ema_bypass_passes_through() {
        let mut ema = ExponentialSmoothing::bypass();
        assert_eq!(ema.apply(-1234, 0), -1234);
        assert_eq!(ema.apply(77, 1), 77);
    }

    #[test]
    fn test_ema_converges() {
        let mut ema = ExponentialSmoothing::medium();
        let mut out = 0;
        for _ in 0..200 {
            out = ema.apply(1000, 0);
        }
        assert!((out - 1000).abs() <= 1);
    }

    #[test]
    fn test_ema_level_clamped() {
        assert_eq!(ExponentialSmoothing::new(42).level(), 8);
    }

    #[test]
    fn test_ema_reset() {
        let mut ema = ExponentialSmoothing::new(1);
        ema.apply(100, 0);
        ema.reset();
        assert_eq!(ema.apply(100, 0), 50);
    }

    #[test]
    fn test_ema_unknown_axis_passthrough() {
        let mut ema = ExponentialSmoothing::new(4);
        assert_eq!(ema.apply(9, NUM_AXES), 9);
    }

    #[test]
    fn test_moving_average_window() {
        let mut avg = MovingAverage::<3>::new();
        assert_eq!(avg.apply(3, 0), 3);
        assert_eq!(avg.apply(6, 0), 4);
        assert_eq!(avg.apply(9, 0), 6);
        assert_eq!(avg.apply(12, 0), 9);
        assert_eq!(avg.apply(100, 1), 100);
    }

    #[test]
    fn test_moving_average_reset() {
        let mut avg = MovingAverage::<2>::new();
        avg.apply(10, 0);
        avg.reset();
        assert_eq!(avg.apply(4, 0), 4);
    }
}
