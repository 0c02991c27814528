//! Headless host: drives the simulation at a fixed frame rate without a renderer.

mod script;
mod settings;

use game_core::Simulation;
use settings::HostSettings;

const FRAME_DT: f32 = 1.0 / 60.0;

fn main() {
    tracing_subscriber::fmt::init();

    let settings = match HostSettings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Invalid host configuration: {}", e);
            std::process::exit(1);
        }
    };

    let mut sim = match Simulation::new(settings.config.clone(), settings.seed) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("Invalid game configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        variant = ?settings.config.variant,
        seed = settings.seed,
        ticks = settings.ticks,
        "Starting headless table pong"
    );

    let mut last = sim.render_state();
    for tick in 0..settings.ticks {
        let input = script::next_input(&last, sim.config(), tick);
        let state = sim.tick(FRAME_DT, &input);

        if state.events.left_scored || state.events.right_scored {
            tracing::info!(
                tick,
                left = state.left_score,
                right = state.right_score,
                "Score changed"
            );
        }

        if settings.snapshot_every > 0 && tick % settings.snapshot_every == 0 {
            match serde_json::to_string(&state) {
                Ok(json) => tracing::info!(snapshot = %json, "Render state"),
                Err(e) => tracing::warn!("Failed to encode render state: {}", e),
            }
        }

        last = state;
    }

    let score = sim.score();
    tracing::info!("Headless run ended");
    println!(
        "Final score after {} ticks ({:.1}s): {} - {}",
        sim.time().tick,
        sim.time().now,
        score.left,
        score.right
    );
}
