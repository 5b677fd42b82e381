//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock time
//! - Seeded RNG only, passed explicitly to whatever needs it
//! - Stable iteration order
//! - No rendering, audio or platform dependencies

pub mod autopilot;
pub mod bounds;
pub mod camera;
pub mod entity;
pub mod explosion;
pub mod fuel_cell;
pub mod missile;
pub mod placement;
pub mod ship;
pub mod state;
pub mod targeting;
pub mod tick;

pub use bounds::BoundingSphere;
pub use camera::Camera;
pub use entity::{Body, Collidable, ModelBounds, Planet};
pub use explosion::Explosion;
pub use fuel_cell::FuelCell;
pub use missile::{Missile, MissilePhase, MissilePool, PoolReport};
pub use placement::{SurfacePlacement, Turret};
pub use ship::Ship;
pub use state::{GameEvent, GamePhase, GameState, HudSnapshot, KeyState};
pub use targeting::{candidate_count, closest_turrets, predict_aim_point, select_launch_turret};
pub use tick::{TickInput, tick};
