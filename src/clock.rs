use std::time::Duration;

/// Time since a caller-chosen epoch; only differences matter to the engine.
pub type Timestamp = Duration;

/// Returns true when at least `interval` has elapsed since the last move.
///
/// A game that has not moved yet is always due. A `now` earlier than the last
/// move is never due.
#[must_use]
pub fn due_to_advance(now: Timestamp, last_move_at: Option<Timestamp>, interval: Duration) -> bool {
    match last_move_at {
        None => true,
        Some(last) => now
            .checked_sub(last)
            .is_some_and(|elapsed| elapsed >= interval),
    }
}

/// Tick interval law: `max(min, base - score / divisor)`.
///
/// With the default curve every point shaves 2 ms off a 200 ms base, floored
/// at 50 ms.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SpeedCurve {
    pub base_interval: Duration,
    pub min_interval: Duration,
    /// Score needed to shave a full second off the interval.
    pub speed_divisor: u32,
}

impl SpeedCurve {
    #[must_use]
    pub fn interval_for_score(self, score: u32) -> Duration {
        let penalty_ms = u64::from(score) * 1000 / u64::from(self.speed_divisor.max(1));
        self.base_interval
            .saturating_sub(Duration::from_millis(penalty_ms))
            .max(self.min_interval)
    }

    /// Speed relative to the base interval: 1.0 at score zero.
    #[must_use]
    pub fn speed_factor(self, score: u32) -> f64 {
        let interval = self.interval_for_score(score);
        if interval.is_zero() {
            return 1.0;
        }
        self.base_interval.as_secs_f64() / interval.as_secs_f64()
    }
}

impl Default for SpeedCurve {
    fn default() -> Self {
        Self {
            base_interval: Duration::from_millis(crate::config::DEFAULT_BASE_INTERVAL_MS),
            min_interval: Duration::from_millis(crate::config::DEFAULT_MIN_INTERVAL_MS),
            speed_divisor: crate::config::DEFAULT_SPEED_DIVISOR,
        }
    }
}
