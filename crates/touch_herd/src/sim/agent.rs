//! Agent state and per-tick steering integration.
use std::time::Duration;

use glam::Vec2;
use tracing::warn;

use crate::sim::DEFAULT_HEADING_BLEND;

/// A continuously-moving agent steered by the attraction field.
///
/// The heading is kept unit length across every update; position integration
/// uses the time elapsed since the previous tick, so agents move at their
/// configured speed regardless of frame rate. Collision with level geometry is
/// not handled: agents move through it unconstrained.
#[derive(Clone, Copy, Debug)]
pub struct Agent {
    position: Vec2,
    heading: Vec2,
    speed: f32,
    heading_blend: f32,
    last_tick: Option<Duration>,
}

impl Agent {
    /// Creates a new agent at `position` with the given speed in units per
    /// second, heading in the +X direction.
    pub fn new(position: Vec2, speed: f32) -> Self {
        Self {
            position,
            heading: Vec2::X,
            speed,
            heading_blend: DEFAULT_HEADING_BLEND,
            last_tick: None,
        }
    }

    /// Sets the initial heading. Values that cannot be normalized are ignored.
    pub fn with_heading(mut self, heading: Vec2) -> Self {
        if let Some(unit) = heading.try_normalize() {
            self.heading = unit;
        }
        self
    }

    /// Sets the attraction blend weight.
    pub fn with_heading_blend(mut self, heading_blend: f32) -> Self {
        self.heading_blend = heading_blend;
        self
    }

    /// Current position.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Current heading, always unit length.
    pub fn heading(&self) -> Vec2 {
        self.heading
    }

    /// Speed in units per second.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Attraction blend weight.
    pub fn heading_blend(&self) -> f32 {
        self.heading_blend
    }

    /// Timestamp of the last tick, unset until the agent has ticked once.
    pub fn last_tick(&self) -> Option<Duration> {
        self.last_tick
    }

    /// Advances the agent by one simulation tick.
    ///
    /// Blends `attraction` into the heading, then integrates position over the
    /// time elapsed since the previous tick. The very first tick is a warm-up:
    /// it only records `now` as the time baseline and moves nothing.
    ///
    /// Returns the updated position, or `None` for the warm-up tick.
    pub fn tick(&mut self, now: Duration, attraction: Vec2) -> Option<Vec2> {
        let blended = self.heading + self.heading_blend * attraction;
        match blended.try_normalize() {
            Some(unit) => self.heading = unit,
            None => {
                warn!("Blended heading is degenerate; keeping the previous heading.");
            }
        }

        let elapsed = match self.last_tick {
            Some(last) => now.saturating_sub(last),
            None => {
                self.last_tick = Some(now);
                return None;
            }
        };
        self.last_tick = Some(now);

        let distance = self.speed * elapsed.as_secs_f32();
        self.position += self.heading * distance;
        Some(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn first_tick_records_baseline_without_moving() {
        let start = Vec2::new(100.0, 300.0);
        let mut agent = Agent::new(start, 50.0);

        let moved = agent.tick(ms(1000), Vec2::ZERO);
        assert_eq!(moved, None);
        assert_eq!(agent.position(), start);
        assert_eq!(agent.last_tick(), Some(ms(1000)));
    }

    #[test]
    fn second_tick_advances_along_heading() {
        let mut agent = Agent::new(Vec2::ZERO, 50.0);
        agent.tick(ms(0), Vec2::ZERO);

        // 50 units/s over 1000 ms, heading +X.
        let moved = agent.tick(ms(1000), Vec2::ZERO);
        assert_eq!(moved, Some(Vec2::new(50.0, 0.0)));
        assert_eq!(agent.position(), Vec2::new(50.0, 0.0));
    }

    #[test]
    fn elapsed_time_scales_from_milliseconds_to_seconds() {
        let mut agent = Agent::new(Vec2::ZERO, 50.0);
        agent.tick(ms(0), Vec2::ZERO);
        agent.tick(ms(500), Vec2::ZERO);

        assert!((agent.position().x - 25.0).abs() < EPSILON);
        assert_eq!(agent.position().y, 0.0);
    }

    #[test]
    fn heading_stays_unit_length_after_blending() {
        let mut agent = Agent::new(Vec2::ZERO, 50.0);

        for (i, attraction) in [
            Vec2::new(0.0, 12.5),
            Vec2::new(-3.0, 1.0),
            Vec2::new(400.0, -80.0),
        ]
        .into_iter()
        .enumerate()
        {
            agent.tick(ms(i as u64 * 16), attraction);
            assert!((agent.heading().length() - 1.0).abs() < EPSILON);
        }
    }

    #[test]
    fn attraction_bends_heading_toward_pointer() {
        let mut agent = Agent::new(Vec2::ZERO, 50.0);

        agent.tick(ms(0), Vec2::new(0.0, 5.0));
        assert!(agent.heading().y > 0.0);
        assert!(agent.heading().x > 0.0);
    }

    #[test]
    fn degenerate_blend_keeps_previous_heading() {
        let mut agent = Agent::new(Vec2::ZERO, 50.0);

        // heading (1, 0) + 0.1 * (-10, 0) is exactly zero.
        agent.tick(ms(0), Vec2::new(-10.0, 0.0));
        assert_eq!(agent.heading(), Vec2::X);
    }

    #[test]
    fn with_heading_normalizes_and_ignores_degenerate_values() {
        let agent = Agent::new(Vec2::ZERO, 50.0).with_heading(Vec2::new(0.0, 2.0));
        assert_eq!(agent.heading(), Vec2::Y);

        let unchanged = Agent::new(Vec2::ZERO, 50.0).with_heading(Vec2::ZERO);
        assert_eq!(unchanged.heading(), Vec2::X);
    }

    #[test]
    fn zero_elapsed_tick_does_not_move() {
        let mut agent = Agent::new(Vec2::new(7.0, 7.0), 50.0);
        agent.tick(ms(100), Vec2::ZERO);

        let moved = agent.tick(ms(100), Vec2::ZERO);
        assert_eq!(moved, Some(Vec2::new(7.0, 7.0)));
    }
}
