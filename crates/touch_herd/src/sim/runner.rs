//! Session orchestration: input application, spawn scheduling, and per-step agent updates.
use std::collections::VecDeque;
use std::time::Duration;

use glam::Vec2;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::field::AttractionField;
use crate::level::LevelParameters;
use crate::pointer::{PointerEvent, PointerRegistry};
use crate::sim::agent::Agent;
use crate::sim::events::{EventSink, SimEvent, SimEventKind};
use crate::sim::spawner::{SpawnTick, Spawner, SpawnerState};
use crate::sim::{AgentId, DEFAULT_HEADING_BLEND};

/// Configuration for running a simulation session.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Level parameters: agent count, goal, spawn interval, agent speed.
    pub level: LevelParameters,
    /// Position at which new agents appear.
    pub spawn_position: Vec2,
    /// Heading assigned to new agents. Normalized at spawn.
    pub initial_heading: Vec2,
    /// Attraction field evaluated at each agent position per step.
    pub field: AttractionField,
    /// Weight of the attraction pull in the per-tick heading blend.
    pub heading_blend: f32,
}

impl SimConfig {
    /// Creates a new [`SimConfig`] for the given level parameters.
    pub fn new(level: LevelParameters) -> Self {
        Self {
            level,
            spawn_position: Vec2::ZERO,
            initial_heading: Vec2::X,
            field: AttractionField::default(),
            heading_blend: DEFAULT_HEADING_BLEND,
        }
    }

    /// Sets the spawn position.
    pub fn with_spawn_position(mut self, spawn_position: Vec2) -> Self {
        self.spawn_position = spawn_position;
        self
    }

    /// Sets the initial agent heading.
    pub fn with_initial_heading(mut self, initial_heading: Vec2) -> Self {
        self.initial_heading = initial_heading;
        self
    }

    /// Sets the attraction field.
    pub fn with_field(mut self, field: AttractionField) -> Self {
        self.field = field;
        self
    }

    /// Sets the heading blend weight.
    pub fn with_heading_blend(mut self, heading_blend: f32) -> Self {
        self.heading_blend = heading_blend;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        self.level.validate()?;
        self.field.validate()?;
        if !self.spawn_position.is_finite() {
            return Err(Error::InvalidConfig("spawn_position must be finite".into()));
        }
        if self.initial_heading.try_normalize().is_none() {
            return Err(Error::InvalidConfig(
                "initial_heading must be normalizable".into(),
            ));
        }
        if !self.heading_blend.is_finite() {
            return Err(Error::InvalidConfig("heading_blend must be finite".into()));
        }

        Ok(())
    }
}

/// A touch-steered simulation session.
///
/// Owns the pointer registry, the spawner, and the agent list, and advances
/// them with an explicit clock: every call to [`Simulation::step`] applies
/// queued pointer input, drains owed spawner intervals, then ticks every
/// agent, in that order. All times are durations since an epoch of the host's
/// choosing; they only need to be monotonic.
///
/// The session is single-threaded by design. A host that reads input on
/// another OS thread must hand events over with its own channel or lock before
/// calling [`Simulation::push_input`].
pub struct Simulation {
    config: SimConfig,
    registry: PointerRegistry,
    spawner: Spawner,
    agents: Vec<Agent>,
    pending_input: VecDeque<PointerEvent>,
}

impl Simulation {
    /// Creates a new simulation session, validating the configuration.
    pub fn try_new(config: SimConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Creates a new simulation session.
    ///
    /// An invalid configuration is a programming fault: it panics in
    /// development builds and is carried with a warning in release builds.
    pub fn new(config: SimConfig) -> Self {
        if let Err(e) = config.validate() {
            debug_assert!(false, "invalid simulation config: {e}");
            warn!("Invalid simulation config: {e}.");
        }
        Self::build(config)
    }

    fn build(config: SimConfig) -> Self {
        let spawner = Spawner::new(config.level.agent_count, config.level.interval());
        Self {
            config,
            registry: PointerRegistry::new(),
            spawner,
            agents: Vec::new(),
            pending_input: VecDeque::new(),
        }
    }

    /// Configuration applied to this session.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Agents spawned so far, indexed by [`AgentId`]. Agents are never
    /// removed, so the list only grows and ids stay stable.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// The active-pointer registry.
    pub fn registry(&self) -> &PointerRegistry {
        &self.registry
    }

    /// Mutable access to the registry, for hosts that apply input events
    /// directly between steps instead of queueing them.
    pub fn registry_mut(&mut self) -> &mut PointerRegistry {
        &mut self.registry
    }

    /// Current spawner lifecycle state.
    pub fn spawner_state(&self) -> SpawnerState {
        self.spawner.state()
    }

    /// Spawns still owed by the spawner.
    pub fn spawns_remaining(&self) -> u32 {
        self.spawner.remaining()
    }

    /// Queues a pointer event for application at the start of the next step.
    pub fn push_input(&mut self, event: PointerEvent) {
        self.pending_input.push_back(event);
    }

    /// Starts the session: arms the spawner one interval after `now`.
    pub fn start(&mut self, now: Duration) {
        self.start_with_events(now, &mut ());
    }

    /// Strict variant of [`Simulation::start`], failing on a session that was
    /// already started or cancelled.
    pub fn try_start(&mut self, now: Duration) -> Result<()> {
        self.spawner.try_start(now)?;
        info!(
            "Session started: spawning {} agents every {:?}.",
            self.config.level.agent_count,
            self.spawner.interval()
        );
        Ok(())
    }

    /// Starts the session and reports [`SimEvent::SessionStarted`] to `sink`.
    ///
    /// Starting twice is a programming fault: it panics in development builds;
    /// in release builds it is ignored and surfaced as a [`SimEvent::Warning`].
    pub fn start_with_events(&mut self, now: Duration, sink: &mut dyn EventSink) {
        let was_idle = self.spawner.state() == SpawnerState::Idle;
        self.spawner.start(now);
        if !was_idle {
            if sink.wants(SimEventKind::Warning) {
                sink.send(SimEvent::Warning {
                    context: "start".into(),
                    message: "session already started; start ignored".into(),
                });
            }
            return;
        }

        info!(
            "Session started: spawning {} agents every {:?}.",
            self.config.level.agent_count,
            self.spawner.interval()
        );
        if sink.wants(SimEventKind::SessionStarted) {
            sink.send(SimEvent::SessionStarted {
                agent_count: self.config.level.agent_count,
                interval: self.spawner.interval(),
            });
        }
    }

    /// Cancels spawning before exhaustion; already-spawned agents keep
    /// running, and the exhaustion signal will never fire. Idempotent.
    pub fn cancel_spawning(&mut self) {
        let was_active = matches!(
            self.spawner.state(),
            SpawnerState::Idle | SpawnerState::Running
        );
        self.spawner.cancel();
        if was_active {
            info!(
                "Spawning cancelled with {} of {} emissions remaining.",
                self.spawner.remaining(),
                self.spawner.total()
            );
        }
    }

    /// Advances the session to `now`.
    pub fn step(&mut self, now: Duration) {
        self.step_with_events(now, &mut ());
    }

    /// Advances the session to `now`, reporting events to `sink`.
    ///
    /// Order within one step: queued pointer events are applied first, so
    /// field evaluations never observe a half-applied input batch; then every
    /// spawner interval crossed at or before `now` is drained; then every
    /// agent ticks once. An agent spawned during this step ticks in the same
    /// pass, which is its warm-up: it establishes the time baseline and
    /// reports no movement until the next step.
    pub fn step_with_events(&mut self, now: Duration, sink: &mut dyn EventSink) {
        while let Some(event) = self.pending_input.pop_front() {
            self.registry.apply(event);
        }

        while let Some(tick) = self.spawner.poll(now) {
            match tick {
                SpawnTick::Emitted { .. } => {
                    let agent =
                        Agent::new(self.config.spawn_position, self.config.level.speed as f32)
                            .with_heading(self.config.initial_heading)
                            .with_heading_blend(self.config.heading_blend);
                    let id: AgentId = self.agents.len();
                    self.agents.push(agent);
                    if sink.wants(SimEventKind::AgentSpawned) {
                        sink.send(SimEvent::AgentSpawned {
                            agent: id,
                            position: agent.position(),
                        });
                    }
                }
                SpawnTick::Completed => {
                    info!("Spawner exhausted after {} emissions.", self.spawner.total());
                    if sink.wants(SimEventKind::SpawnerExhausted) {
                        sink.send(SimEvent::SpawnerExhausted {
                            spawned: self.spawner.total(),
                        });
                    }
                }
                SpawnTick::Inert => {}
            }
        }

        for (id, agent) in self.agents.iter_mut().enumerate() {
            let attraction = self.config.field.evaluate(agent.position(), &self.registry);
            if let Some(position) = agent.tick(now, attraction) {
                if sink.wants(SimEventKind::AgentMoved) {
                    sink.send(SimEvent::AgentMoved { agent: id, position });
                }
            }
        }
    }
}
