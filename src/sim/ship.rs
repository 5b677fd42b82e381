//! Player ship: input-driven rotation and collision-gated movement

use glam::{Quat, Vec3};

use super::bounds::BoundingSphere;
use super::entity::{Body, Collidable, Planet};
use super::placement::Turret;
use super::state::KeyState;
use crate::consts::LOCAL_FORWARD;

/// The player's ship
#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    body: Body,
    /// Accumulated orientation
    pub rotation: Quat,
    /// Last attempted move was blocked by a collision
    pub is_crashing: bool,
}

/// +1 for the positive key alone, -1 for the negative key alone, else 0
#[inline]
fn turn_axis(positive: bool, negative: bool) -> f32 {
    match (positive, negative) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    }
}

impl Ship {
    pub fn new(parts: &[BoundingSphere], radius_scale: f32, spawn: Vec3) -> Self {
        Self {
            body: Body::from_model(parts, radius_scale, spawn),
            rotation: Quat::IDENTITY,
            is_crashing: false,
        }
    }

    /// Put the ship back at `spawn` with the default heading
    pub fn reset(&mut self, spawn: Vec3) {
        self.body.set_position(spawn);
        self.rotation = Quat::IDENTITY;
        self.is_crashing = false;
    }

    /// Unit vector the ship is flying along
    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.rotation * LOCAL_FORWARD
    }

    /// Incremental rotation for this frame's keys: yaw then pitch
    pub fn turn_from_keys(keys: &KeyState, turn_speed: f32) -> Quat {
        let side = turn_axis(keys.left, keys.right) * turn_speed;
        let up = turn_axis(keys.up, keys.down) * turn_speed;
        Quat::from_rotation_y(side) * Quat::from_rotation_x(up)
    }

    /// Turn, then try to advance. The frame's turn is left-multiplied onto the
    /// accumulated orientation. The move is rejected (and the ship flagged as
    /// crashing) if the new sphere would touch the planet or any turret; the
    /// turn is always kept.
    pub fn update(
        &mut self,
        keys: &KeyState,
        turn_speed: f32,
        velocity: f32,
        planet: &Planet,
        turrets: &[Turret],
    ) {
        let turn = Self::turn_from_keys(keys, turn_speed);
        self.rotation = (turn * self.rotation).normalize();

        let candidate = self.body.position() + self.forward() * velocity;
        let sphere = self.body.bounds_at(candidate);

        let blocked = sphere.intersects(planet.bounds())
            || turrets.iter().any(|t| sphere.intersects(t.bounds()));

        if blocked {
            self.is_crashing = true;
        } else {
            self.body.set_position(candidate);
            self.is_crashing = false;
        }
    }
}

impl Collidable for Ship {
    fn body(&self) -> &Body {
        &self.body
    }
}
