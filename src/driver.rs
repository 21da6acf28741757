//! Host-side tick sources and the run loop that drives an animator with them

use std::thread;
use std::time::{Duration, Instant};

use crate::core::{Animator, Millis, TickOutcome};
use crate::errors::Result;
use crate::traits::TickSource;

/// Sleeps one period per call and reports the real elapsed time
///
/// Time spent between calls (rendering, callbacks) counts towards the delta.
#[derive(Debug)]
pub struct RealtimeSource {
    last_call: Instant,
    period: Duration,
}

impl RealtimeSource {
    pub fn new(period: Millis) -> Self {
        Self {
            last_call: Instant::now(),
            period: Duration::from_millis(period),
        }
    }

    /// Forget time elapsed so far, e.g. after the host was paused
    pub fn restart(&mut self) {
        self.last_call = Instant::now();
    }
}

impl TickSource for RealtimeSource {
    fn next_delta(&mut self) -> Duration {
        thread::sleep(self.period);
        let now = Instant::now();
        let delta = now.duration_since(self.last_call);
        self.last_call = now;
        delta
    }

    fn name(&self) -> &str {
        "realtime"
    }
}

/// Deterministic source, every call advances exactly one step
#[derive(Debug, Clone, Copy)]
pub struct SimulatedSource {
    step: Duration,
}

impl SimulatedSource {
    pub fn new(step: Millis) -> Self {
        Self {
            step: Duration::from_millis(step),
        }
    }
}

impl TickSource for SimulatedSource {
    fn next_delta(&mut self) -> Duration {
        self.step
    }

    fn name(&self) -> &str {
        "simulated"
    }
}

/// Summary of one `run`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    pub ticks: u64,
    pub scenes_completed: u64,
    pub passes_completed: u64,
    /// Playback ended on its own rather than hitting the tick budget
    pub finished: bool,
}

/// Drive a playing animator from `source` until it stops or `max_ticks` run
///
/// Element and handler failures abort the run and are returned as-is; the
/// animator is left mid-tick, still playing.
pub fn run<S, T>(animator: &mut Animator<S>, source: &mut T, max_ticks: Option<u64>) -> Result<RunReport>
where
    T: TickSource + ?Sized,
{
    let mut report = RunReport::default();
    log::info!(
        "running with {} source, period {}ms",
        source.name(),
        animator.tick_period()
    );

    while animator.is_playing() {
        if max_ticks.is_some_and(|max| report.ticks >= max) {
            log::debug!("tick budget exhausted after {} ticks", report.ticks);
            return Ok(report);
        }

        let due = animator.due_ticks(source.next_delta());
        for _ in 0..due {
            if !animator.is_playing() || max_ticks.is_some_and(|max| report.ticks >= max) {
                break;
            }

            let outcome = animator.tick().inspect_err(|err| {
                log::warn!("tick {} failed: {}", report.ticks + 1, err);
            })?;
            report.ticks += 1;

            match outcome {
                TickOutcome::Completed(_) => {
                    report.scenes_completed += 1;
                    if animator.current_scene().is_none() {
                        report.passes_completed += 1;
                    }
                }
                TickOutcome::Finished => report.finished = true,
                TickOutcome::Rendered(_) | TickOutcome::Idle => {}
            }
        }
    }

    Ok(report)
}
