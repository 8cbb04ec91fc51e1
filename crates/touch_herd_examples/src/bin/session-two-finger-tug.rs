use std::time::Duration;

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use touch_herd::prelude::*;
use touch_herd_examples::{init_tracing, render_trails_to_png, RenderConfig, TrailStyle};

const STEP_MS: u64 = 16;
const SESSION_MS: u64 = 20_000;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Six agents tugged between two held fingers; slight jitter on each
    // finger so the trails fan out instead of collapsing onto one line.
    let level = LevelParameters::new(6, 6, 500, 60);
    let config = SimConfig::new(level)
        .with_spawn_position(Vec2::new(-300.0, 0.0))
        .with_field(
            AttractionField::default().with_policy(DegeneracyPolicy::Clamp { min_distance: 5.0 }),
        );

    let mut sim = Simulation::try_new(config)?;
    let mut rng = StdRng::seed_from_u64(7);

    let finger_a = Vec2::new(250.0, 180.0);
    let finger_b = Vec2::new(150.0, -220.0);
    sim.push_input(PointerEvent::Down {
        id: PointerId(0),
        position: finger_a,
    });
    sim.push_input(PointerEvent::Down {
        id: PointerId(1),
        position: finger_b,
    });

    let mut trails: Vec<Vec<Vec2>> = Vec::new();
    let mut sink = FnSink::new(|event: SimEvent| match event {
        SimEvent::AgentSpawned { position, .. } => trails.push(vec![position]),
        SimEvent::AgentMoved { agent, position } => trails[agent].push(position),
        _ => {}
    });

    sim.start_with_events(Duration::ZERO, &mut sink);
    for step in 1..=(SESSION_MS / STEP_MS) {
        let jitter_a = Vec2::new(rng.random_range(-4.0..=4.0), rng.random_range(-4.0..=4.0));
        let jitter_b = Vec2::new(rng.random_range(-4.0..=4.0), rng.random_range(-4.0..=4.0));
        sim.push_input(PointerEvent::Moved {
            id: PointerId(0),
            position: finger_a + jitter_a,
        });
        sim.push_input(PointerEvent::Moved {
            id: PointerId(1),
            position: finger_b + jitter_b,
        });
        sim.step_with_events(Duration::from_millis(step * STEP_MS), &mut sink);
    }
    drop(sink);

    let render_config = RenderConfig::new((1000, 1000), Vec2::new(800.0, 800.0));
    render_trails_to_png(
        &trails,
        &[finger_a, finger_b],
        TrailStyle::default(),
        &render_config,
        "session-two-finger-tug.png",
    )?;

    Ok(())
}
