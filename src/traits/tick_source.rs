use std::time::Duration;

/// Periodic time source feeding an animator
///
/// Each call blocks (or pretends to) until roughly one more period has passed
/// and returns the host time that elapsed since the previous call.
pub trait TickSource {
    /// Wait for the next period, returns the measured delta
    fn next_delta(&mut self) -> Duration;

    /// Get source name for debugging
    fn name(&self) -> &str {
        "TickSource"
    }
}
