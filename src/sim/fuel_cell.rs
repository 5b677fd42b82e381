//! Fuel cells: collectibles hovering just above the planet surface

use glam::Mat4;

use super::bounds::BoundingSphere;
use super::entity::{Body, Collidable};
use super::placement::SurfacePlacement;

/// A collectible fuel cell
#[derive(Debug, Clone, PartialEq)]
pub struct FuelCell {
    body: Body,
    pub orientation: Mat4,
    /// Collected this level; never reverts
    pub retrieved: bool,
    /// Ship overlapped the cell last frame
    prev_intersecting: bool,
}

impl FuelCell {
    pub fn new(parts: &[BoundingSphere], radius_scale: f32, placement: SurfacePlacement) -> Self {
        Self {
            body: Body::from_model(parts, radius_scale, placement.position),
            orientation: placement.orientation,
            retrieved: false,
            prev_intersecting: false,
        }
    }

    /// Check the ship against this cell. Returns `true` on the frame the cell
    /// is picked up, which only happens when overlap begins.
    pub fn update(&mut self, ship: &impl Collidable) -> bool {
        if self.retrieved {
            return false;
        }

        let intersecting = self.intersects(ship);
        let picked_up = intersecting && !self.prev_intersecting;
        if picked_up {
            self.retrieved = true;
        }
        self.prev_intersecting = intersecting;
        picked_up
    }
}

impl Collidable for FuelCell {
    fn body(&self) -> &Body {
        &self.body
    }
}
