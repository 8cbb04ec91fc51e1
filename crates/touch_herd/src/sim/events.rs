//! Event types and sinks for observing simulation sessions.
//!
//! This module defines [`SimEvent`] and a set of sinks and adapters to emit,
//! collect, or forward events while stepping a
//! [`crate::sim::runner::Simulation`]. Spawn and movement events are the
//! rendering/placement feed: a host keeps its visuals in sync by listening to
//! [`SimEvent::AgentSpawned`] and [`SimEvent::AgentMoved`].
use std::time::Duration;

use glam::Vec2;

use crate::sim::AgentId;

/// Describes events emitted while stepping a simulation.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum SimEvent {
    /// Emitted when a session starts and the spawner is armed.
    SessionStarted {
        /// Total number of agents the session will spawn.
        agent_count: u32,
        /// Spawn interval.
        interval: Duration,
    },

    /// Emitted when the spawner creates a new agent.
    AgentSpawned {
        /// Id of the new agent.
        agent: AgentId,
        /// Spawn position.
        position: Vec2,
    },

    /// Emitted when an agent's position advances during a step.
    AgentMoved {
        /// Id of the agent that moved.
        agent: AgentId,
        /// Updated position.
        position: Vec2,
    },

    /// Emitted exactly once when the spawner's countdown is used up.
    SpawnerExhausted {
        /// Number of agents spawned over the session.
        spawned: u32,
    },

    /// Non-fatal warning generated during a step.
    Warning {
        /// Context string (e.g. the operation that was ignored).
        context: String,
        /// Human-readable message.
        message: String,
    },
}

/// Discriminant of a [`SimEvent`], used by sinks to filter cheaply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SimEventKind {
    SessionStarted,
    AgentSpawned,
    AgentMoved,
    SpawnerExhausted,
    Warning,
}

impl SimEvent {
    /// Kind of this event.
    pub fn kind(&self) -> SimEventKind {
        match self {
            SimEvent::SessionStarted { .. } => SimEventKind::SessionStarted,
            SimEvent::AgentSpawned { .. } => SimEventKind::AgentSpawned,
            SimEvent::AgentMoved { .. } => SimEventKind::AgentMoved,
            SimEvent::SpawnerExhausted { .. } => SimEventKind::SpawnerExhausted,
            SimEvent::Warning { .. } => SimEventKind::Warning,
        }
    }
}

/// A generic event sink that accepts [`SimEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: SimEvent);

    /// Whether this sink cares about events of `kind`. Emitters may skip
    /// building events the sink does not want; the default accepts everything.
    fn wants(&self, _kind: SimEventKind) -> bool {
        true
    }

    fn send_many<I>(&mut self, events: I)
    where
        Self: Sized,
        I: IntoIterator<Item = SimEvent>,
    {
        for e in events {
            self.send(e);
        }
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: SimEvent) {}

    #[inline]
    fn wants(&self, _kind: SimEventKind) -> bool {
        false
    }
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(SimEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(SimEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(SimEvent),
{
    #[inline]
    fn send(&mut self, event: SimEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects all events in a `Vec`.
#[derive(Default)]
pub struct VecSink {
    events: Vec<SimEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            events: Vec::with_capacity(cap),
        }
    }

    pub fn into_inner(self) -> Vec<SimEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[SimEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: SimEvent) {
        self.events.push(event);
    }
}

/// Fan-out sink that forwards each event to all contained sinks.
pub struct MultiSink<S: EventSink> {
    pub(crate) sinks: Vec<S>,
}

impl<S: EventSink> MultiSink<S> {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn with_sinks(sinks: Vec<S>) -> Self {
        Self { sinks }
    }

    pub fn push(&mut self, sink: S) {
        self.sinks.push(sink);
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }
}

impl<S: EventSink> Default for MultiSink<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EventSink> EventSink for MultiSink<S> {
    fn send(&mut self, event: SimEvent) {
        if self.sinks.is_empty() {
            return;
        }
        let last_idx = self.sinks.len() - 1;
        for i in 0..last_idx {
            self.sinks[i].send(event.clone());
        }
        self.sinks[last_idx].send(event);
    }

    fn wants(&self, kind: SimEventKind) -> bool {
        self.sinks.iter().any(|sink| sink.wants(kind))
    }
}
