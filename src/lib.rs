//! Planet Strike - simulation core for an arcade space-combat game
//!
//! Core modules:
//! - `sim`: Deterministic per-frame simulation (entities, missiles, game state)
//! - `tuning`: Data-driven game balance
//! - `error`: Configuration errors

pub mod error;
pub mod sim;
pub mod tuning;

pub use error::TuningError;
pub use tuning::Tuning;

use glam::Vec3;

/// Fixed gameplay constants that are not exposed through [`Tuning`]
pub mod consts {
    use glam::Vec3;

    /// Local-space forward vector of the ship (right-handed, -Z forward)
    pub const LOCAL_FORWARD: Vec3 = Vec3::NEG_Z;
    /// Local-space up vector used for surface placement
    pub const LOCAL_UP: Vec3 = Vec3::Y;

    /// Planet sits at the world origin
    pub const PLANET_CENTER: Vec3 = Vec3::ZERO;

    /// Turrets sit directly on the surface
    pub const TURRET_SURFACE_OFFSET: f32 = 0.0;

    /// Candidate window divisor for closest-turret selection
    pub const TURRETS_PER_CANDIDATE: usize = 5;
    /// Candidate window above this collapses back to a single candidate
    pub const MAX_TURRET_CANDIDATES: usize = 10;
}

/// Random unit vector with each component drawn from [-1, 1).
///
/// Falls back to +Y for the (vanishingly rare) zero-length draw.
pub fn random_unit_axis<R: rand::Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let v = Vec3::new(
        rng.random::<f32>() * 2.0 - 1.0,
        rng.random::<f32>() * 2.0 - 1.0,
        rng.random::<f32>() * 2.0 - 1.0,
    );
    v.try_normalize().unwrap_or(Vec3::Y)
}

/// Signed offset in (-radius, radius): difference of two uniform draws
#[inline]
pub fn jitter<R: rand::Rng + ?Sized>(rng: &mut R, radius: f32) -> f32 {
    rng.random::<f32>() * radius - rng.random::<f32>() * radius
}
