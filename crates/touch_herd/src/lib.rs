#![forbid(unsafe_code)]
//! touch_herd: pointer-attraction steering and timed spawning for touch-driven simulations.
//!
//! Modules:
//! - pointer: pointer identity, input events, and the active-pointer registry
//! - field: inverse-square attraction field evaluation over the registry
//! - level: the level parameter record and its validation
//! - sim: agents, the bounded spawner, observer events, and the session runner
//!
//! Hosts own the window, rendering, and real input plumbing; this crate owns
//! the per-step simulation. Feed pointer events in, call
//! [`sim::runner::Simulation::step`] once per frame with a monotonic clock,
//! and mirror the emitted events into whatever draws the agents.
pub mod error;
pub mod field;
pub mod level;
pub mod pointer;
pub mod sim;

/// Convenient re-exports for common types. Import with `use touch_herd::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::field::{AttractionField, DegeneracyPolicy, DEFAULT_ATTRACTION_STRENGTH};
    pub use crate::level::LevelParameters;
    pub use crate::pointer::{PointerEvent, PointerId, PointerRegistry};
    pub use crate::sim::agent::Agent;
    pub use crate::sim::events::{
        EventSink, FnSink, MultiSink, SimEvent, SimEventKind, VecSink,
    };
    pub use crate::sim::runner::{SimConfig, Simulation};
    pub use crate::sim::spawner::{SpawnTick, Spawner, SpawnerState};
    pub use crate::sim::{AgentId, DEFAULT_HEADING_BLEND};
}
