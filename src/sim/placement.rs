//! Surface placement and turrets
//!
//! Turrets and fuel cells are scattered over the planet by rotating the
//! local up vector around a random axis and pushing it out to the surface.

use glam::{Mat4, Vec3};
use rand::Rng;

use super::bounds::BoundingSphere;
use super::entity::{Body, Collidable, Planet};
use crate::consts::LOCAL_UP;
use crate::random_unit_axis;

/// Orientation and position of an object sitting on the planet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfacePlacement {
    /// Rotation aligning the model's up with the surface normal
    pub orientation: Mat4,
    pub position: Vec3,
}

impl SurfacePlacement {
    /// Place at the surface point reached by rotating up by `angle` around `axis`,
    /// raised `offset` above the surface
    pub fn new(planet: &Planet, axis: Vec3, angle: f32, offset: f32) -> Self {
        let orientation = Mat4::from_axis_angle(axis, angle);
        let up = orientation.transform_vector3(LOCAL_UP);
        let position = planet.position() + up * (planet.radius() + offset);
        Self { orientation, position }
    }

    /// Place at a uniformly random axis and angle
    pub fn random<R: Rng + ?Sized>(rng: &mut R, planet: &Planet, offset: f32) -> Self {
        let axis = random_unit_axis(rng);
        let angle = rng.random::<f32>() * std::f32::consts::TAU;
        Self::new(planet, axis, angle, offset)
    }

    /// Surface normal at the placement
    #[inline]
    pub fn up(&self) -> Vec3 {
        self.orientation.transform_vector3(LOCAL_UP)
    }
}

/// A stationary missile launcher on the planet surface
#[derive(Debug, Clone, PartialEq)]
pub struct Turret {
    body: Body,
    pub orientation: Mat4,
}

impl Turret {
    pub fn new(parts: &[BoundingSphere], radius_scale: f32, placement: SurfacePlacement) -> Self {
        Self {
            body: Body::from_model(parts, radius_scale, placement.position),
            orientation: placement.orientation,
        }
    }
}

impl Collidable for Turret {
    fn body(&self) -> &Body {
        &self.body
    }
}
