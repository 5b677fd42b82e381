//! Planet Strike headless runner
//!
//! Runs the simulation in demo mode with no renderer attached and logs what
//! happens. Usage: `planet-strike [tuning.json] [frames] [seed]`

use std::path::PathBuf;

use planet_strike::Tuning;
use planet_strike::sim::{GameEvent, GameState, ModelBounds, TickInput, tick};

const DEFAULT_FRAMES: u64 = 60 * 60;

fn main() {
    env_logger::init();
    log::info!("Planet Strike (headless) starting...");

    let mut args = std::env::args().skip(1);
    let tuning_path = args.next().filter(|a| a != "-").map(PathBuf::from);
    let frames = args
        .next()
        .and_then(|a| a.parse().ok())
        .unwrap_or(DEFAULT_FRAMES);
    let seed = args.next().and_then(|a| a.parse().ok()).unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    });

    let tuning = Tuning::load_or_default(tuning_path.as_deref());
    let mut state = GameState::with_config(seed, tuning, ModelBounds::default());

    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };

    let mut launches = 0u64;
    let mut explosions = 0u64;
    for _ in 0..frames {
        tick(&mut state, &input);
        for event in &state.events {
            match event {
                GameEvent::MissileLaunched { .. } => launches += 1,
                GameEvent::ExplosionSpawned { .. } => explosions += 1,
                GameEvent::FuelCellPickup { index } => {
                    log::info!(
                        "Fuel cell {index} picked up ({}/{})",
                        state.retrieved_fuel_cells,
                        state.num_fuel_cells()
                    );
                }
                _ => {}
            }
        }
    }

    log::info!(
        "Ran {frames} frames with seed {seed}: {launches} missiles launched, {explosions} explosions"
    );
    match serde_json::to_string_pretty(&state.hud()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize HUD: {e}"),
    }
}
