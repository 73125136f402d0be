//! Scoring module - line-clear points and the time-based speed ramp
//!
//! Scoring is flat: every cleared row is worth the same, however many rows a
//! single lock clears. Speed depends only on elapsed wall-clock time, never on
//! score or lines.

/// Points for a lock that cleared `lines` rows
pub fn line_clear_points(lines: usize, points_per_line: u32) -> u32 {
    (lines as u32).saturating_mul(points_per_line)
}

/// Shrinks the fall interval by a fixed step every ramp period
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeedRamp {
    fall_interval_ms: u32,
    elapsed_ms: u32,
    period_ms: u32,
    decrement_ms: u32,
    floor_ms: u32,
}

impl SpeedRamp {
    pub fn new(initial_ms: u32, period_ms: u32, decrement_ms: u32, floor_ms: u32) -> Self {
        Self {
            fall_interval_ms: initial_ms.max(floor_ms),
            elapsed_ms: 0,
            period_ms,
            decrement_ms,
            floor_ms,
        }
    }

    /// Current time between gravity steps
    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    /// Time accumulated towards the next ramp step
    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    /// Accumulate `elapsed_ms`.
    ///
    /// Once the accumulator exceeds the period it resets to zero and the fall
    /// interval drops by one decrement, clamped at the floor. At most one step
    /// is taken per call. Returns true if the interval changed.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        if self.elapsed_ms <= self.period_ms {
            return false;
        }
        self.elapsed_ms = 0;

        let next = self
            .fall_interval_ms
            .saturating_sub(self.decrement_ms)
            .max(self.floor_ms);
        let changed = next != self.fall_interval_ms;
        self.fall_interval_ms = next;
        changed
    }
}
