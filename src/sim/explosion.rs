//! Transient explosions, aged out after a fixed number of frames

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// An explosion effect anchored where it started
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Explosion {
    pub position: Vec3,
    /// Frames since spawn
    pub age: u32,
}

impl Explosion {
    pub fn new(position: Vec3) -> Self {
        Self { position, age: 0 }
    }

    #[inline]
    pub fn is_finished(&self, duration: u32) -> bool {
        self.age >= duration
    }

    /// Fraction of the lifetime elapsed, for the particle renderer
    pub fn progress(&self, duration: u32) -> f32 {
        (self.age as f32 / duration.max(1) as f32).min(1.0)
    }
}

/// Age every explosion one frame, then drop the finished ones
pub fn update_explosions(explosions: &mut Vec<Explosion>, duration: u32) {
    for explosion in explosions.iter_mut() {
        explosion.age += 1;
    }
    explosions.retain(|e| !e.is_finished(duration));
}
