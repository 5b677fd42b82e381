//! Turret targeting
//!
//! A launch turret is drawn at random from the few turrets closest to the
//! ship, so the nearest one is favoured without being predictable. The aim
//! point is a fixed distance ahead of the ship, blurred per axis.

use glam::Vec3;
use rand::Rng;

use super::entity::Collidable;
use super::placement::Turret;
use crate::consts::{MAX_TURRET_CANDIDATES, TURRETS_PER_CANDIDATE};
use crate::jitter;

/// How many nearby turrets compete for the next launch
pub fn candidate_count(num_turrets: usize) -> usize {
    let k = (num_turrets / TURRETS_PER_CANDIDATE).max(1);
    if k > MAX_TURRET_CANDIDATES { 1 } else { k }
}

/// Indices of the `k` turrets closest to `target`, farthest first.
///
/// Keeps a descending window of `k` slots; each turret replaces the first
/// slot it beats and the window is re-sorted, so the farthest survivor is
/// always the next to be evicted.
pub fn closest_turrets(turrets: &[Turret], target: Vec3, k: usize) -> Vec<usize> {
    let mut window: Vec<(f32, Option<usize>)> = vec![(f32::INFINITY, None); k];

    for (index, turret) in turrets.iter().enumerate() {
        let distance = turret.position().distance(target);
        if let Some(slot) = window.iter().position(|&(d, _)| distance < d) {
            window[slot] = (distance, Some(index));
        }
        window.sort_by(|a, b| b.0.total_cmp(&a.0));
    }

    window.into_iter().filter_map(|(_, index)| index).collect()
}

/// Pick the turret that fires next, uniformly among the closest candidates.
/// `None` only when there are no turrets.
pub fn select_launch_turret<R: Rng + ?Sized>(
    rng: &mut R,
    turrets: &[Turret],
    ship_position: Vec3,
) -> Option<usize> {
    let k = candidate_count(turrets.len());
    let candidates = closest_turrets(turrets, ship_position, k);
    match candidates.len() {
        0 => None,
        1 => Some(candidates[0]),
        n => Some(candidates[rng.random_range(0..n)]),
    }
}

/// Point `lookahead` ahead of the ship, each axis offset by up to `accuracy`
pub fn predict_aim_point<R: Rng + ?Sized>(
    rng: &mut R,
    ship_position: Vec3,
    ship_forward: Vec3,
    lookahead: f32,
    accuracy: f32,
) -> Vec3 {
    let ahead = ship_position + ship_forward * lookahead;
    ahead
        + Vec3::new(
            jitter(rng, accuracy),
            jitter(rng, accuracy),
            jitter(rng, accuracy),
        )
}
