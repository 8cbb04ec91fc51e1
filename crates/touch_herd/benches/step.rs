mod common;

use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use glam::Vec2;
use touch_herd::prelude::{LevelParameters, PointerId, SimConfig, Simulation};

const AGENT_COUNTS: [u32; 4] = [1, 16, 256, 1024];
const STEPS_PER_ITER: u64 = 32;
const FRAME: Duration = Duration::from_millis(16);

/// Builds a session with all agents already spawned and warmed up.
fn make_simulation(agent_count: u32) -> Simulation {
    let config = SimConfig::new(LevelParameters::new(agent_count, 0, 1, 120))
        .with_spawn_position(Vec2::new(100.0, 300.0));
    let mut sim = Simulation::try_new(config).expect("valid config");

    sim.registry_mut()
        .upsert(PointerId(0), Vec2::new(640.0, 360.0));
    sim.registry_mut()
        .upsert(PointerId(1), Vec2::new(-200.0, 500.0));

    sim.start(Duration::ZERO);
    // 1 ms interval: one long step drains every spawn, the next warms up.
    sim.step(Duration::from_millis(agent_count as u64 + 1));
    sim.step(Duration::from_millis(agent_count as u64 + 2));
    sim
}

fn step_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("sim/step");
    for &agent_count in &AGENT_COUNTS {
        group.throughput(common::pairs_throughput(
            agent_count as usize,
            STEPS_PER_ITER as usize,
        ));

        group.bench_with_input(
            BenchmarkId::new("two_pointers", agent_count),
            &agent_count,
            |b, &agent_count| {
                b.iter_batched(
                    || make_simulation(agent_count),
                    |mut sim| {
                        let base = Duration::from_millis(agent_count as u64 + 2);
                        for i in 1..=STEPS_PER_ITER {
                            sim.step(base + FRAME * i as u32);
                        }
                        black_box(sim.agents().len());
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = step_benches
}
criterion_main!(benches);
