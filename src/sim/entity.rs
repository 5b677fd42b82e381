//! Shared entity data
//!
//! Every placeable object carries a [`Body`]: a position plus a bounding
//! sphere derived once from its model and re-centered on every move.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::bounds::BoundingSphere;
use crate::consts::PLANET_CENTER;

/// Position and collision extent of an entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    position: Vec3,
    bounds: BoundingSphere,
}

impl Body {
    /// Build a body from a model's sub-mesh spheres.
    ///
    /// # Panics
    ///
    /// Panics if `parts` is empty or `radius_scale` is not positive.
    pub fn from_model(parts: &[BoundingSphere], radius_scale: f32, position: Vec3) -> Self {
        assert!(
            radius_scale > 0.0,
            "bounding radius scale must be positive, got {radius_scale}"
        );
        let bounds = BoundingSphere::from_parts(parts)
            .scaled(radius_scale)
            .recentered(position);
        Self { position, bounds }
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    pub fn bounds(&self) -> &BoundingSphere {
        &self.bounds
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.bounds.radius
    }

    /// Move the entity; the sphere follows
    #[inline]
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.bounds = self.bounds.recentered(position);
    }

    /// Sphere this body would have at `position`
    #[inline]
    pub fn bounds_at(&self, position: Vec3) -> BoundingSphere {
        self.bounds.recentered(position)
    }
}

/// Anything with a position and a bounding sphere
pub trait Collidable {
    fn body(&self) -> &Body;

    fn position(&self) -> Vec3 {
        self.body().position()
    }

    fn bounds(&self) -> &BoundingSphere {
        self.body().bounds()
    }

    fn intersects<C: Collidable + ?Sized>(&self, other: &C) -> bool
    where
        Self: Sized,
    {
        self.bounds().intersects(other.bounds())
    }
}

/// Sub-mesh bounding spheres for every model, supplied by the content loader
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelBounds {
    pub planet: Vec<BoundingSphere>,
    pub ship: Vec<BoundingSphere>,
    pub turret: Vec<BoundingSphere>,
    pub missile: Vec<BoundingSphere>,
    pub fuel_cell: Vec<BoundingSphere>,
}

impl Default for ModelBounds {
    /// Stand-in extents for running without loaded content
    fn default() -> Self {
        Self {
            planet: vec![BoundingSphere::new(Vec3::ZERO, 100.0)],
            ship: vec![
                BoundingSphere::new(Vec3::new(0.0, 0.0, -1.5), 2.5),
                BoundingSphere::new(Vec3::new(0.0, 0.0, 1.5), 2.5),
            ],
            turret: vec![BoundingSphere::new(Vec3::ZERO, 5.0)],
            missile: vec![BoundingSphere::new(Vec3::ZERO, 1.5)],
            fuel_cell: vec![BoundingSphere::new(Vec3::ZERO, 3.0)],
        }
    }
}

/// The planet: fixed at the origin, never moves
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Planet {
    body: Body,
}

impl Planet {
    pub fn new(parts: &[BoundingSphere]) -> Self {
        Self {
            body: Body::from_model(parts, 1.0, PLANET_CENTER),
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.body.radius()
    }
}

impl Collidable for Planet {
    fn body(&self) -> &Body {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_recenters_on_move() {
        let mut body = Body::from_model(&ModelBounds::default().ship, 0.5, Vec3::ZERO);
        let radius = body.radius();
        body.set_position(Vec3::new(10.0, -3.0, 7.0));
        assert_eq!(body.bounds().center, body.position());
        assert_eq!(body.radius(), radius);
    }

    #[test]
    fn test_body_scales_merged_radius() {
        let parts = [BoundingSphere::new(Vec3::ZERO, 4.0)];
        let body = Body::from_model(&parts, 0.25, Vec3::X);
        assert_eq!(body.radius(), 1.0);
        assert_eq!(body.bounds().center, Vec3::X);
    }

    #[test]
    #[should_panic(expected = "must be positive")]
    fn test_body_rejects_zero_scale() {
        Body::from_model(&ModelBounds::default().turret, 0.0, Vec3::ZERO);
    }

    #[test]
    fn test_planet_at_origin() {
        let planet = Planet::new(&ModelBounds::default().planet);
        assert_eq!(planet.position(), Vec3::ZERO);
        assert_eq!(planet.radius(), 100.0);
    }
}
