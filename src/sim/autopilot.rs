//! Demo autopilot: flies toward the nearest fuel cell
//!
//! Produces the same four directional keys a player would press, so the
//! ship is driven through the normal input path.

use glam::Vec3;

use super::entity::{Collidable, Planet};
use super::fuel_cell::FuelCell;
use super::ship::Ship;
use super::state::KeyState;

/// Ignore steering errors smaller than this (local-space unit vector)
const DEADZONE: f32 = 0.05;
/// Extra clearance above the ship's own radius before pulling up
const CLEARANCE: f32 = 1.0;

/// Closest fuel cell that hasn't been collected yet
pub fn nearest_cell(position: Vec3, cells: &[FuelCell]) -> Option<Vec3> {
    cells
        .iter()
        .filter(|c| !c.retrieved)
        .map(|c| c.position())
        .min_by(|a, b| a.distance_squared(position).total_cmp(&b.distance_squared(position)))
}

/// Keys that turn the ship toward `target`, or away from the planet when too low
pub fn steer(ship: &Ship, planet: &Planet, target: Option<Vec3>) -> KeyState {
    let altitude = ship.position().distance(planet.position()) - planet.radius();
    let desired = if altitude < ship.bounds().radius + CLEARANCE {
        ship.position() - planet.position()
    } else if let Some(target) = target {
        target - ship.position()
    } else {
        return KeyState::default();
    };

    let local = ship.rotation.inverse() * desired.normalize_or_zero();
    // Target straight behind: pick a side to start turning around
    let behind = local.z > 0.0 && local.x.abs() <= DEADZONE;

    KeyState {
        left: local.x < -DEADZONE || behind,
        right: local.x > DEADZONE,
        up: local.y > DEADZONE,
        down: local.y < -DEADZONE,
        confirm: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::ModelBounds;
    use crate::sim::placement::SurfacePlacement;

    fn planet() -> Planet {
        Planet::new(&ModelBounds::default().planet)
    }

    fn ship_at(pos: Vec3) -> Ship {
        Ship::new(&ModelBounds::default().ship, 0.5, pos)
    }

    #[test]
    fn test_steers_left_toward_target() {
        let ship = ship_at(Vec3::new(0.0, 160.0, 0.0));
        let keys = steer(&ship, &planet(), Some(Vec3::new(-50.0, 160.0, -10.0)));
        assert!(keys.left && !keys.right);
        assert!(!keys.up && !keys.down);
    }

    #[test]
    fn test_dives_toward_low_target() {
        let ship = ship_at(Vec3::new(0.0, 160.0, 0.0));
        let keys = steer(&ship, &planet(), Some(Vec3::new(0.0, 104.0, -30.0)));
        assert!(keys.down && !keys.up);
    }

    #[test]
    fn test_pulls_up_near_surface() {
        let ship = ship_at(Vec3::new(0.0, 101.5, 0.0));
        let keys = steer(&ship, &planet(), Some(Vec3::new(0.0, 50.0, -30.0)));
        assert!(keys.up && !keys.down);
    }

    #[test]
    fn test_turns_around_for_target_behind() {
        let ship = ship_at(Vec3::new(0.0, 160.0, 0.0));
        let keys = steer(&ship, &planet(), Some(Vec3::new(0.0, 160.0, 50.0)));
        assert!(keys.left);
    }

    #[test]
    fn test_idle_without_target() {
        let ship = ship_at(Vec3::new(0.0, 160.0, 0.0));
        assert_eq!(steer(&ship, &planet(), None), KeyState::default());
    }

    #[test]
    fn test_nearest_cell_skips_retrieved() {
        let models = ModelBounds::default();
        let planet = planet();
        let mut cells: Vec<FuelCell> = [0.1f32, 1.0]
            .iter()
            .map(|&a| FuelCell::new(&models.fuel_cell, 1.0, SurfacePlacement::new(&planet, Vec3::Z, a, 4.0)))
            .collect();
        let from = Vec3::new(0.0, 160.0, 0.0);
        assert_eq!(nearest_cell(from, &cells), Some(cells[0].position()));
        cells[0].retrieved = true;
        assert_eq!(nearest_cell(from, &cells), Some(cells[1].position()));
        cells[1].retrieved = true;
        assert_eq!(nearest_cell(from, &cells), None);
    }
}
