//! Per-frame simulation tick
//!
//! Advances the game state machine by exactly one frame.

use super::autopilot;
use super::entity::Collidable;
use super::explosion::update_explosions;
use super::state::{GameEvent, GamePhase, GameState, KeyState};
use super::targeting::{predict_aim_point, select_launch_turret};

/// Input for a single tick: this frame's keys and last frame's
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub keys: KeyState,
    pub prev_keys: KeyState,
    /// Demo mode - the autopilot flies the ship
    pub idle_mode: bool,
    /// Host frame counter. `None` lets the state count frames itself.
    pub frame: Option<u64>,
}

impl TickInput {
    /// Confirm went down this frame
    #[inline]
    pub fn confirm_pressed(&self) -> bool {
        self.keys.confirm && !self.prev_keys.confirm
    }
}

/// Advance the game state by one frame.
///
/// `time_ticks` follows `input.frame` when the host supplies one and never
/// moves backwards; otherwise it advances by one per call.
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();
    state.time_ticks = match input.frame {
        Some(frame) => frame.max(state.time_ticks),
        None => state.time_ticks + 1,
    };

    // Idle/demo mode - the autopilot plays the game
    let mut input = *input;
    if input.idle_mode {
        match state.phase {
            GamePhase::SplashPage => {
                input.keys.confirm = true;
                input.prev_keys.confirm = false;
            }
            GamePhase::Running => {
                let target = autopilot::nearest_cell(state.ship.position(), &state.fuel_cells);
                let confirm = input.keys.confirm;
                input.keys = autopilot::steer(&state.ship, &state.planet, target);
                input.keys.confirm = confirm;
            }
            GamePhase::Won | GamePhase::Lost => {}
        }
    }

    match state.phase {
        GamePhase::SplashPage => {
            if input.confirm_pressed() {
                state.reset();
                start_level(state);
            }
        }
        GamePhase::Running => run_frame(state, &input),
        GamePhase::Won | GamePhase::Lost => {
            update_explosions(&mut state.explosions, state.tuning.explosion_duration);
            state.dwell_ticks += 1;
            if state.dwell_ticks >= state.tuning.menu_dwell_frames {
                state.reset();
                start_level(state);
            }
        }
    }
}

fn start_level(state: &mut GameState) {
    state.phase = GamePhase::Running;
    state.events.push(GameEvent::LevelStarted { level: state.level });
    log::info!(
        "Level {} started: {} turrets, {} fuel cells",
        state.level,
        state.turrets.len(),
        state.fuel_cells.len()
    );
}

fn run_frame(state: &mut GameState, input: &TickInput) {
    state.step_counter += 1;

    // Ship movement; damage only when a crash begins
    let was_crashing = state.ship.is_crashing;
    state.ship.update(
        &input.keys,
        state.tuning.turn_speed,
        state.tuning.ship_velocity,
        &state.planet,
        &state.turrets,
    );
    if state.ship.is_crashing && !was_crashing {
        log::debug!("Ship crashed at {:?}", state.ship.position());
        state.player_health -= 1;
        state.events.push(GameEvent::ShipCrashed);
        state.spawn_explosion_at_ship();
    }

    // Fuel cell pickups
    for (index, cell) in state.fuel_cells.iter_mut().enumerate() {
        if cell.update(&state.ship) {
            state.retrieved_fuel_cells += 1;
            state.events.push(GameEvent::FuelCellPickup { index });
            log::debug!(
                "Fuel cell {index} retrieved ({}/{})",
                state.retrieved_fuel_cells,
                state.difficulty.num_fuel_cells
            );
        }
    }

    // Scheduled launch
    let interval = u64::from(state.difficulty.time_between_missiles.max(1));
    if state.step_counter % interval == 0 {
        launch_missile(state);
    }

    // Missiles in flight
    let report = state.missiles.update(
        &state.ship,
        state.difficulty.missile_velocity,
        state.tuning.missile_max_age,
    );
    for _ in 0..report.hits {
        log::debug!("Missile hit the ship");
        state.player_health -= 1;
        state.spawn_explosion_at_ship();
    }

    update_explosions(&mut state.explosions, state.tuning.explosion_duration);

    state.camera.update(state.ship.position(), state.ship.rotation);

    // Round end
    if state.player_health <= 0 {
        state.phase = GamePhase::Lost;
        state.dwell_ticks = 0;
        state.events.push(GameEvent::GameLost);
        log::info!("Game lost on level {}", state.level);
    } else if state.retrieved_fuel_cells >= state.num_fuel_cells() {
        state.events.push(GameEvent::LevelWon { level: state.level });
        log::info!("Level {} cleared", state.level);
        state.level += 1;
        state.difficulty.advance(&state.tuning.deltas);
        state.phase = GamePhase::Won;
        state.dwell_ticks = 0;
    }
}

/// Fire one missile from a turret near the ship, if any missile is ready
fn launch_missile(state: &mut GameState) {
    if state.missiles.ready_count() == 0 {
        log::trace!("Launch skipped: no missile ready");
        return;
    }
    let ship_position = state.ship.position();
    let Some(turret) = select_launch_turret(&mut state.rng, &state.turrets, ship_position) else {
        return;
    };

    let from = state.turrets[turret].position();
    let target = predict_aim_point(
        &mut state.rng,
        ship_position,
        state.ship.forward(),
        state.tuning.aim_lookahead,
        state.difficulty.missile_accuracy,
    );
    if state.missiles.launch(from, target).is_some() {
        state.events.push(GameEvent::MissileLaunched { turret });
        log::debug!("Missile launched from turret {turret}");
    }
}
