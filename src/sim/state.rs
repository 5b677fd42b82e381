//! Game state and core simulation types
//!
//! Everything the simulation mutates per frame lives in [`GameState`].

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::camera::Camera;
use super::entity::{Collidable, ModelBounds, Planet};
use super::explosion::Explosion;
use super::fuel_cell::FuelCell;
use super::missile::MissilePool;
use super::placement::{SurfacePlacement, Turret};
use super::ship::Ship;
use crate::consts::TURRET_SURFACE_OFFSET;
use crate::tuning::{Difficulty, Tuning};

/// Top-level game flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for confirm
    #[default]
    SplashPage,
    /// Active gameplay
    Running,
    /// Level cleared; dwelling before the next level
    Won,
    /// Out of health; dwelling before a restart
    Lost,
}

/// Decoded key state for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KeyState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub confirm: bool,
}

/// Discrete things that happened during a tick, for audio/particles/HUD
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Play the pickup sound
    FuelCellPickup { index: usize },
    /// Play the explosion sound
    ExplosionSound,
    /// Start a particle burst
    ExplosionSpawned { position: Vec3 },
    MissileLaunched { turret: usize },
    ShipCrashed,
    /// Level `level` was cleared
    LevelWon { level: u32 },
    GameLost,
    LevelStarted { level: u32 },
}

/// Values shown by the HUD and menus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HudSnapshot {
    pub phase: GamePhase,
    pub level: u32,
    pub health: i32,
    pub retrieved_fuel_cells: u32,
    pub num_fuel_cells: u32,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub tuning: Tuning,
    models: ModelBounds,

    pub phase: GamePhase,
    /// Frames spent in the current Won/Lost dwell
    pub dwell_ticks: u32,
    /// Frame counter; follows the host's frame number when one is supplied
    pub time_ticks: u64,
    /// Frames since the last reset; drives the launch cadence
    pub step_counter: u64,

    /// Current level (1-based)
    pub level: u32,
    pub difficulty: Difficulty,
    pub player_health: i32,
    pub retrieved_fuel_cells: u32,

    pub planet: Planet,
    pub ship: Ship,
    pub turrets: Vec<Turret>,
    pub fuel_cells: Vec<FuelCell>,
    pub missiles: MissilePool,
    pub explosions: Vec<Explosion>,
    pub camera: Camera,

    /// Events raised by the last tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// New game with default tuning and stand-in model extents
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, Tuning::default(), ModelBounds::default())
    }

    /// New game on the splash page with the first level already laid out
    pub fn with_config(seed: u64, tuning: Tuning, models: ModelBounds) -> Self {
        let planet = Planet::new(&models.planet);
        let ship = Ship::new(&models.ship, tuning.ship_radius_scale, tuning.ship_spawn);
        let missiles = MissilePool::new(
            tuning.missile_pool_size,
            &models.missile,
            tuning.missile_radius_scale,
        );
        let camera = Camera::new(&tuning, 4.0 / 3.0);

        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            difficulty: tuning.initial,
            player_health: tuning.starting_health,
            tuning,
            models,
            phase: GamePhase::SplashPage,
            dwell_ticks: 0,
            time_ticks: 0,
            step_counter: 0,
            level: 1,
            retrieved_fuel_cells: 0,
            planet,
            ship,
            turrets: Vec::new(),
            fuel_cells: Vec::new(),
            missiles,
            explosions: Vec::new(),
            camera,
            events: Vec::new(),
        };
        state.reset();
        log::info!("Game initialized with seed: {seed}");
        state
    }

    /// Start the current level over: fresh placement, full missile pool, no
    /// explosions, ship at spawn, full health. Difficulty is kept.
    pub fn reset(&mut self) {
        self.place_entities();
        self.missiles.reset();
        self.explosions.clear();
        self.ship.reset(self.tuning.ship_spawn);
        self.camera.snap_to(self.ship.position(), self.ship.rotation);
        self.step_counter = 0;
        self.dwell_ticks = 0;
        self.retrieved_fuel_cells = 0;
        self.player_health = self.tuning.starting_health;
    }

    fn place_entities(&mut self) {
        let turret_count = self.difficulty.num_turrets as usize;
        let cell_count = self.difficulty.num_fuel_cells as usize;

        self.turrets = (0..turret_count)
            .map(|_| {
                let placement =
                    SurfacePlacement::random(&mut self.rng, &self.planet, TURRET_SURFACE_OFFSET);
                Turret::new(&self.models.turret, self.tuning.turret_radius_scale, placement)
            })
            .collect();

        self.fuel_cells = (0..cell_count)
            .map(|_| {
                let placement = SurfacePlacement::random(
                    &mut self.rng,
                    &self.planet,
                    self.tuning.fuel_cell_hover,
                );
                FuelCell::new(&self.models.fuel_cell, self.tuning.fuel_cell_radius_scale, placement)
            })
            .collect();

        log::debug!(
            "Level {}: placed {} turrets, {} fuel cells",
            self.level,
            turret_count,
            cell_count
        );
    }

    /// Fuel cells needed to clear the current level
    #[inline]
    pub fn num_fuel_cells(&self) -> u32 {
        self.difficulty.num_fuel_cells
    }

    /// Add an explosion at the ship and raise its events
    pub(crate) fn spawn_explosion_at_ship(&mut self) {
        let position = self.ship.position();
        self.explosions.push(Explosion::new(position));
        self.events.push(GameEvent::ExplosionSpawned { position });
        self.events.push(GameEvent::ExplosionSound);
    }

    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot {
            phase: self.phase,
            level: self.level,
            health: self.player_health,
            retrieved_fuel_cells: self.retrieved_fuel_cells,
            num_fuel_cells: self.num_fuel_cells(),
        }
    }
}
