//! Simulation pipeline: agents, spawn scheduling, observer events, and the per-step runner.
pub mod agent;
pub mod events;
pub mod runner;
pub mod spawner;

/// Weight of the attraction pull when blended into an agent heading.
pub const DEFAULT_HEADING_BLEND: f32 = 0.1;

/// Index of an agent in the simulation's agent list.
///
/// Agents are never despawned, so ids stay stable for the session lifetime.
pub type AgentId = usize;
