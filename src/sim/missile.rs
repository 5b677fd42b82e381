//! Missiles and the missile pool
//!
//! Missiles are allocated once and recycled forever. Each one is either in
//! the ready queue (inert) or the fired list (in flight); moving between the
//! two is O(1) and never duplicates or drops a missile.

use std::collections::VecDeque;

use glam::Vec3;

use super::bounds::BoundingSphere;
use super::entity::{Body, Collidable};

/// Lifecycle of a single missile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissilePhase {
    /// Waiting in the ready queue
    #[default]
    Ready,
    /// In flight
    Firing,
    /// Hit the ship; waiting to be recycled
    Exploded,
    /// Ran out of age; waiting to be recycled
    Expired,
}

/// A ballistic missile
#[derive(Debug, Clone, PartialEq)]
pub struct Missile {
    body: Body,
    /// Fixed flight direction (unit), set at launch
    pub direction: Vec3,
    /// Frames since launch
    pub age: u32,
    pub phase: MissilePhase,
}

impl Missile {
    pub fn new(parts: &[BoundingSphere], radius_scale: f32) -> Self {
        Self {
            body: Body::from_model(parts, radius_scale, Vec3::ZERO),
            direction: Vec3::ZERO,
            age: 0,
            phase: MissilePhase::Ready,
        }
    }

    #[inline]
    pub fn is_firing(&self) -> bool {
        self.phase == MissilePhase::Firing
    }

    #[inline]
    pub fn is_exploded(&self) -> bool {
        self.phase == MissilePhase::Exploded
    }

    /// Start flying from `from` toward `target`. The heading is never re-aimed.
    pub fn launch(&mut self, from: Vec3, target: Vec3) {
        self.body.set_position(from);
        self.direction = (target - from).normalize_or_zero();
        self.age = 0;
        self.phase = MissilePhase::Firing;
    }

    /// Advance one frame while firing and report the resulting phase
    pub fn update(&mut self, ship: &impl Collidable, velocity: f32, max_age: u32) -> MissilePhase {
        if self.phase != MissilePhase::Firing {
            return self.phase;
        }

        if self.intersects(ship) {
            self.phase = MissilePhase::Exploded;
        } else if self.age >= max_age {
            self.phase = MissilePhase::Expired;
        } else {
            let next = self.body.position() + self.direction * velocity;
            self.body.set_position(next);
            self.age += 1;
        }
        self.phase
    }

    /// Return to a clean ready state
    pub fn recycle(&mut self) {
        self.age = 0;
        self.phase = MissilePhase::Ready;
    }
}

impl Collidable for Missile {
    fn body(&self) -> &Body {
        &self.body
    }
}

/// What happened to the fired missiles during one pool update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolReport {
    /// Missiles that hit the ship
    pub hits: u32,
    /// Missiles that aged out
    pub expired: u32,
}

/// Fixed-size missile store with ready/fired membership
#[derive(Debug, Clone)]
pub struct MissilePool {
    missiles: Vec<Missile>,
    ready: VecDeque<usize>,
    fired: Vec<usize>,
}

impl MissilePool {
    pub fn new(size: usize, parts: &[BoundingSphere], radius_scale: f32) -> Self {
        let template = Missile::new(parts, radius_scale);
        Self {
            missiles: vec![template; size],
            ready: (0..size).collect(),
            fired: Vec::with_capacity(size),
        }
    }

    pub fn capacity(&self) -> usize {
        self.missiles.len()
    }

    pub fn ready_count(&self) -> usize {
        self.ready.len()
    }

    pub fn fired_count(&self) -> usize {
        self.fired.len()
    }

    /// Missiles currently in flight
    pub fn fired(&self) -> impl Iterator<Item = &Missile> {
        self.fired.iter().map(|&i| &self.missiles[i])
    }

    /// Fire the head of the ready queue. `None` if no missile is ready.
    pub fn launch(&mut self, from: Vec3, target: Vec3) -> Option<&Missile> {
        let index = self.ready.pop_front()?;
        self.missiles[index].launch(from, target);
        self.fired.push(index);
        Some(&self.missiles[index])
    }

    /// Advance every fired missile and recycle those that exploded or expired
    pub fn update(&mut self, ship: &impl Collidable, velocity: f32, max_age: u32) -> PoolReport {
        let mut report = PoolReport::default();
        let mut slot = 0;
        while slot < self.fired.len() {
            let index = self.fired[slot];
            let missile = &mut self.missiles[index];
            match missile.update(ship, velocity, max_age) {
                MissilePhase::Exploded => report.hits += 1,
                MissilePhase::Expired => report.expired += 1,
                _ => {
                    slot += 1;
                    continue;
                }
            }
            missile.recycle();
            self.fired.swap_remove(slot);
            self.ready.push_back(index);
        }
        report
    }

    /// Return every missile to the ready queue
    pub fn reset(&mut self) {
        for missile in &mut self.missiles {
            missile.recycle();
        }
        self.fired.clear();
        self.ready = (0..self.missiles.len()).collect();
    }
}
