//! Fixed-interval, bounded-count spawn scheduling.
//!
//! This module defines [`Spawner`], the state machine that emits a configured
//! number of agents at a fixed interval and signals exhaustion exactly once.
//! [`Spawner::tick`] implements the countdown itself; [`Spawner::poll`] couples
//! it to a caller-provided clock so tests and hosts can drive time explicitly.
use std::time::Duration;

use tracing::warn;

use crate::error::{Error, Result};

/// Lifecycle state of a [`Spawner`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpawnerState {
    /// Created, not started.
    Idle,
    /// Interval armed, emissions owed.
    Running,
    /// Countdown finished and the completion signal was reported. Terminal.
    Exhausted,
    /// Stopped externally before exhaustion; completion never fires. Terminal.
    Cancelled,
}

/// Outcome of a single spawner tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpawnTick {
    /// A spawn is owed: create agent number `index` (0-based).
    Emitted { index: u32 },
    /// The countdown is used up; reported exactly once, right after the last
    /// emission's interval.
    Completed,
    /// Defensive outcome of a tick on a non-running spawner.
    Inert,
}

/// Bounded-count emitter driven by interval crossings.
#[derive(Clone, Debug)]
pub struct Spawner {
    total: u32,
    remaining: u32,
    interval: Duration,
    state: SpawnerState,
    next_due: Option<Duration>,
}

impl Spawner {
    /// Creates a new spawner in the [`SpawnerState::Idle`] state, validating
    /// the interval.
    pub fn try_new(total: u32, interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(Error::InvalidConfig("spawn interval must be > 0".into()));
        }
        Ok(Self::build(total, interval))
    }

    /// Creates a new spawner in the [`SpawnerState::Idle`] state.
    pub fn new(total: u32, interval: Duration) -> Self {
        debug_assert!(!interval.is_zero(), "spawn interval must be > 0");
        Self::build(total, interval)
    }

    fn build(total: u32, interval: Duration) -> Self {
        Self {
            total,
            remaining: total,
            interval,
            state: SpawnerState::Idle,
            next_due: None,
        }
    }

    /// Total number of emissions this spawner was configured with.
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Emissions still owed.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Configured spawn interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SpawnerState {
        self.state
    }

    /// Timestamp of the next armed interval crossing, while running.
    pub fn next_due(&self) -> Option<Duration> {
        self.next_due
    }

    /// Starts the spawner: [`SpawnerState::Idle`] to [`SpawnerState::Running`],
    /// with the first crossing armed one full interval after `now`.
    ///
    /// Starting a non-idle spawner is a programming fault: it panics in
    /// development builds and is a warned no-op in release builds.
    pub fn start(&mut self, now: Duration) {
        if self.state != SpawnerState::Idle {
            debug_assert!(
                false,
                "start called on a spawner in the {:?} state",
                self.state
            );
            warn!("Start on a spawner in the {:?} state; ignoring.", self.state);
            return;
        }
        self.state = SpawnerState::Running;
        self.next_due = Some(now + self.interval);
    }

    /// Strict variant of [`Spawner::start`], failing instead of asserting.
    pub fn try_start(&mut self, now: Duration) -> Result<()> {
        if self.state != SpawnerState::Idle {
            return Err(Error::SpawnerMisuse(format!(
                "start called on a spawner in the {:?} state",
                self.state
            )));
        }
        self.state = SpawnerState::Running;
        self.next_due = Some(now + self.interval);
        Ok(())
    }

    /// Consumes one timer tick.
    ///
    /// While emissions are owed, each tick decrements the countdown and
    /// reports [`SpawnTick::Emitted`]. The tick that finds the countdown
    /// already at zero transitions to [`SpawnerState::Exhausted`], disarms the
    /// timer, and reports [`SpawnTick::Completed`]. Net effect: exactly
    /// `total` emissions, then exactly one completion, then nothing.
    ///
    /// Ticking a non-running spawner is a programming fault: it panics in
    /// development builds and reports [`SpawnTick::Inert`] in release builds.
    pub fn tick(&mut self) -> SpawnTick {
        if self.state != SpawnerState::Running {
            debug_assert!(
                false,
                "tick called on a spawner in the {:?} state",
                self.state
            );
            warn!("Tick on a spawner in the {:?} state; ignoring.", self.state);
            return SpawnTick::Inert;
        }

        if self.remaining > 0 {
            self.remaining -= 1;
            SpawnTick::Emitted {
                index: self.total - self.remaining - 1,
            }
        } else {
            self.state = SpawnerState::Exhausted;
            self.next_due = None;
            SpawnTick::Completed
        }
    }

    /// Consumes the next armed interval crossing at or before `now`, if any.
    ///
    /// Returns `None` while the spawner is caught up, not started, or stopped.
    /// A frame that spans several intervals owes several ticks; callers drain
    /// them by looping until `None`.
    pub fn poll(&mut self, now: Duration) -> Option<SpawnTick> {
        let due = self.next_due?;
        if now < due {
            return None;
        }

        let tick = self.tick();
        if let SpawnTick::Emitted { .. } = tick {
            // Keep the armed cadence rather than re-basing on `now`, so a
            // late frame does not shift every later crossing.
            self.next_due = Some(due + self.interval);
        }
        Some(tick)
    }

    /// Cancels spawning before exhaustion; the completion signal will never
    /// fire. Idempotent, and a no-op once a terminal state is reached.
    pub fn cancel(&mut self) {
        if let SpawnerState::Idle | SpawnerState::Running = self.state {
            self.state = SpawnerState::Cancelled;
            self.next_due = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn drain(spawner: &mut Spawner, now: Duration) -> Vec<SpawnTick> {
        let mut ticks = Vec::new();
        while let Some(tick) = spawner.poll(now) {
            ticks.push(tick);
        }
        ticks
    }

    #[test]
    fn emits_total_then_completes_once() {
        let mut spawner = Spawner::new(3, ms(500));
        spawner.start(ms(0));

        assert_eq!(spawner.poll(ms(500)), Some(SpawnTick::Emitted { index: 0 }));
        assert_eq!(spawner.poll(ms(1000)), Some(SpawnTick::Emitted { index: 1 }));
        assert_eq!(spawner.poll(ms(1500)), Some(SpawnTick::Emitted { index: 2 }));
        assert_eq!(spawner.poll(ms(2000)), Some(SpawnTick::Completed));
        assert_eq!(spawner.state(), SpawnerState::Exhausted);

        // Exhausted is terminal: later polls never report anything again.
        assert_eq!(spawner.poll(ms(2500)), None);
        assert_eq!(spawner.poll(ms(60_000)), None);
    }

    #[test]
    fn poll_before_due_reports_nothing() {
        let mut spawner = Spawner::new(2, ms(500));
        spawner.start(ms(0));

        assert_eq!(spawner.poll(ms(0)), None);
        assert_eq!(spawner.poll(ms(499)), None);
        assert_eq!(spawner.poll(ms(500)), Some(SpawnTick::Emitted { index: 0 }));
        assert_eq!(spawner.poll(ms(999)), None);
        assert_eq!(spawner.poll(ms(1000)), Some(SpawnTick::Emitted { index: 1 }));
    }

    #[test]
    fn long_frame_owes_every_crossed_interval() {
        let mut spawner = Spawner::new(3, ms(500));
        spawner.start(ms(0));

        let ticks = drain(&mut spawner, ms(1500));
        assert_eq!(
            ticks,
            vec![
                SpawnTick::Emitted { index: 0 },
                SpawnTick::Emitted { index: 1 },
                SpawnTick::Emitted { index: 2 },
            ]
        );

        // The completion crossing was not reached yet.
        assert_eq!(spawner.state(), SpawnerState::Running);
        assert_eq!(drain(&mut spawner, ms(2000)), vec![SpawnTick::Completed]);
    }

    #[test]
    fn cadence_stays_anchored_to_the_armed_schedule() {
        let mut spawner = Spawner::new(2, ms(500));
        spawner.start(ms(0));

        // A late first poll must not push the second crossing past 1000.
        assert_eq!(spawner.poll(ms(700)), Some(SpawnTick::Emitted { index: 0 }));
        assert_eq!(spawner.next_due(), Some(ms(1000)));
        assert_eq!(spawner.poll(ms(1000)), Some(SpawnTick::Emitted { index: 1 }));
    }

    #[test]
    fn zero_total_completes_on_the_first_crossing() {
        let mut spawner = Spawner::new(0, ms(500));
        spawner.start(ms(0));

        assert_eq!(spawner.poll(ms(500)), Some(SpawnTick::Completed));
        assert_eq!(spawner.state(), SpawnerState::Exhausted);
    }

    #[test]
    fn raw_ticks_follow_countdown_semantics() {
        let mut spawner = Spawner::new(3, ms(500));
        spawner.start(ms(0));

        assert_eq!(spawner.tick(), SpawnTick::Emitted { index: 0 });
        assert_eq!(spawner.tick(), SpawnTick::Emitted { index: 1 });
        assert_eq!(spawner.tick(), SpawnTick::Emitted { index: 2 });
        assert_eq!(spawner.remaining(), 0);
        assert_eq!(spawner.tick(), SpawnTick::Completed);
        assert_eq!(spawner.state(), SpawnerState::Exhausted);
        assert_eq!(spawner.next_due(), None);
    }

    #[test]
    fn poll_without_start_reports_nothing() {
        let mut spawner = Spawner::new(3, ms(500));
        assert_eq!(spawner.poll(ms(10_000)), None);
        assert_eq!(spawner.state(), SpawnerState::Idle);
    }

    #[test]
    fn try_start_rejects_non_idle_states() {
        let mut spawner = Spawner::new(1, ms(500));
        spawner.start(ms(0));

        let err = spawner.try_start(ms(0)).unwrap_err();
        assert!(matches!(err, Error::SpawnerMisuse(_)));

        spawner.cancel();
        assert!(spawner.try_start(ms(0)).is_err());
    }

    #[test]
    fn try_new_rejects_zero_interval() {
        let err = Spawner::try_new(3, Duration::ZERO).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn cancel_stops_spawning_without_completion() {
        let mut spawner = Spawner::new(3, ms(500));
        spawner.start(ms(0));
        assert_eq!(spawner.poll(ms(500)), Some(SpawnTick::Emitted { index: 0 }));

        spawner.cancel();
        assert_eq!(spawner.state(), SpawnerState::Cancelled);
        assert_eq!(spawner.poll(ms(5000)), None);
        assert_eq!(spawner.remaining(), 2);

        // Idempotent, and terminal states stay put.
        spawner.cancel();
        assert_eq!(spawner.state(), SpawnerState::Cancelled);
    }

    #[test]
    fn cancel_after_exhaustion_is_a_noop() {
        let mut spawner = Spawner::new(0, ms(500));
        spawner.start(ms(0));
        assert_eq!(spawner.poll(ms(500)), Some(SpawnTick::Completed));

        spawner.cancel();
        assert_eq!(spawner.state(), SpawnerState::Exhausted);
    }

    #[test]
    fn cancel_before_start_keeps_spawner_inert() {
        let mut spawner = Spawner::new(3, ms(500));
        spawner.cancel();

        assert_eq!(spawner.state(), SpawnerState::Cancelled);
        assert_eq!(spawner.poll(ms(1000)), None);
    }
}
