//! Level parameter record consumed at session start.
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// External level configuration: how many agents to spawn, how fast, and how
/// often.
///
/// Produced by whatever loads level files on the host side; field presence is
/// guaranteed by construction here, value validation by
/// [`LevelParameters::validate`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub struct LevelParameters {
    /// Total number of agents the spawner will emit.
    pub agent_count: u32,
    /// Number of agents that must reach the goal to win. Win/loss logic lives
    /// on the host; the value is only range-checked here.
    pub goal: u32,
    /// Spawn interval in milliseconds.
    pub interval_ms: u32,
    /// Agent speed in units per second.
    pub speed: u32,
}

impl LevelParameters {
    /// Creates a new [`LevelParameters`] record.
    pub fn new(agent_count: u32, goal: u32, interval_ms: u32, speed: u32) -> Self {
        Self {
            agent_count,
            goal,
            interval_ms,
            speed,
        }
    }

    /// Validates the record, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.interval_ms == 0 {
            return Err(Error::InvalidConfig("interval_ms must be > 0".into()));
        }
        if self.goal > self.agent_count {
            return Err(Error::InvalidConfig(format!(
                "goal ({}) must not exceed agent_count ({})",
                self.goal, self.agent_count
            )));
        }

        Ok(())
    }

    /// Spawn interval as a [`Duration`].
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms as u64)
    }
}
