use std::time::Duration;

/// Scheduler time unit: whole milliseconds
pub type Millis = u64;

/// Tick period used when none is configured
pub const DEFAULT_TICK_PERIOD: Millis = 25;

/// Armed periodic tick registration - fires every `period` ms of host time
///
/// An animator holds at most one of these; dropping it is the cancellation.
#[derive(Debug, Clone, Copy)]
pub struct Ticker {
    period: Millis,
    accumulator: Duration,
}

impl Ticker {
    /// Arm a ticker with the given period (must be non-zero)
    pub fn new(period: Millis) -> Self {
        debug_assert!(period > 0, "tick period must be non-zero");
        Self {
            period,
            accumulator: Duration::ZERO,
        }
    }

    pub fn period(&self) -> Millis {
        self.period
    }

    /// Feed host time, returns how many whole periods are now due
    pub fn accumulate(&mut self, delta: Duration) -> u64 {
        self.accumulator += delta;

        let period_ns = u128::from(self.period) * 1_000_000;
        let acc_ns = self.accumulator.as_nanos();
        let due = acc_ns / period_ns;

        self.accumulator = Duration::from_nanos((acc_ns % period_ns) as u64);
        due as u64
    }

    /// Fraction of the next period already accumulated [0, 1)
    pub fn alpha(&self) -> f32 {
        self.accumulator.as_secs_f32() / Duration::from_millis(self.period).as_secs_f32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticker_fires_once_per_period() {
        let mut ticker = Ticker::new(25);

        // Short of a full period
        assert_eq!(ticker.accumulate(Duration::from_millis(10)), 0);

        // Crosses the threshold
        assert_eq!(ticker.accumulate(Duration::from_millis(20)), 1);

        // 5ms carried over
        assert_eq!(ticker.accumulate(Duration::from_millis(19)), 0);
        assert_eq!(ticker.accumulate(Duration::from_millis(1)), 1);
    }

    #[test]
    fn ticker_reports_multiple_due_ticks_after_stall() {
        let mut ticker = Ticker::new(25);

        assert_eq!(ticker.accumulate(Duration::from_millis(110)), 4);
        assert!((ticker.alpha() - 0.4).abs() < 1e-4);
    }

    #[test]
    fn ticker_alpha_starts_at_zero() {
        let ticker = Ticker::new(DEFAULT_TICK_PERIOD);
        assert_eq!(ticker.alpha(), 0.0);
        assert_eq!(ticker.period(), 25);
    }
}
