use std::time::Duration;

use tracing::info;
use touch_herd::prelude::*;

const STEP_MS: u64 = 90;

fn main() -> anyhow::Result<()> {
    touch_herd_examples::init_tracing();

    // Drive a 4-emission spawner with a frame step that does not divide the
    // spawn interval, logging every crossing. The 270→540 frame spans two
    // intervals and drains both; the crossing after the last emission reports
    // completion, and the timeline stays silent from there on.
    let mut spawner = Spawner::try_new(4, Duration::from_millis(250))?;
    spawner.start(Duration::ZERO);
    info!("Spawner armed: 4 emissions every 250 ms, stepping at {STEP_MS} ms.");

    let mut now = Duration::ZERO;
    while spawner.state() == SpawnerState::Running {
        now += Duration::from_millis(STEP_MS);
        while let Some(tick) = spawner.poll(now) {
            match tick {
                SpawnTick::Emitted { index } => {
                    info!(
                        "t={:>4} ms: emitted agent {} ({} remaining).",
                        now.as_millis(),
                        index,
                        spawner.remaining()
                    );
                }
                SpawnTick::Completed => {
                    info!("t={:>4} ms: spawner exhausted.", now.as_millis());
                }
                SpawnTick::Inert => {}
            }
        }
    }

    Ok(())
}
