//! Bounding-sphere primitives
//!
//! Every collidable in the game is approximated by a single sphere built by
//! folding together the spheres of its sub-meshes.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A sphere in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingSphere {
    pub center: Vec3,
    pub radius: f32,
}

impl BoundingSphere {
    pub const fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Touching spheres count as intersecting
    #[inline]
    pub fn intersects(&self, other: &BoundingSphere) -> bool {
        let reach = self.radius + other.radius;
        self.center.distance_squared(other.center) <= reach * reach
    }

    /// Whether `other` lies entirely inside this sphere
    #[inline]
    pub fn contains(&self, other: &BoundingSphere) -> bool {
        self.center.distance(other.center) + other.radius <= self.radius
    }

    /// Smallest sphere containing both spheres
    pub fn merged(&self, other: &BoundingSphere) -> BoundingSphere {
        if self.contains(other) {
            return *self;
        }
        if other.contains(self) {
            return *other;
        }

        let offset = other.center - self.center;
        let distance = offset.length();

        let radius = (distance + self.radius + other.radius) * 0.5;
        // distance > 0 here: coincident centers are handled by the containment checks
        let center = self.center + offset * ((radius - self.radius) / distance);
        BoundingSphere { center, radius }
    }

    /// Fold sub-mesh spheres into one enclosing sphere, in order.
    ///
    /// # Panics
    ///
    /// Panics if `parts` is empty: a model without geometry has no extent.
    pub fn from_parts(parts: &[BoundingSphere]) -> BoundingSphere {
        let (first, rest) = parts
            .split_first()
            .expect("bounding sphere requires at least one sub-mesh sphere");
        rest.iter().fold(*first, |acc, part| acc.merged(part))
    }

    /// Same sphere moved to `center`
    #[inline]
    pub fn recentered(&self, center: Vec3) -> BoundingSphere {
        BoundingSphere { center, radius: self.radius }
    }

    /// Same sphere with its radius multiplied by `factor`
    #[inline]
    pub fn scaled(&self, factor: f32) -> BoundingSphere {
        BoundingSphere { center: self.center, radius: self.radius * factor }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sphere(x: f32, y: f32, z: f32, r: f32) -> BoundingSphere {
        BoundingSphere::new(Vec3::new(x, y, z), r)
    }

    #[test]
    fn test_intersects_touching_and_apart() {
        let a = sphere(0.0, 0.0, 0.0, 1.0);
        assert!(a.intersects(&sphere(2.0, 0.0, 0.0, 1.0)));
        assert!(!a.intersects(&sphere(2.1, 0.0, 0.0, 1.0)));
        assert!(a.intersects(&sphere(0.5, 0.0, 0.0, 0.1)));
    }

    #[test]
    fn test_merge_disjoint() {
        let merged = sphere(-2.0, 0.0, 0.0, 1.0).merged(&sphere(2.0, 0.0, 0.0, 1.0));
        assert!(merged.center.abs_diff_eq(Vec3::ZERO, 1e-5));
        assert!((merged.radius - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_merge_contained_returns_outer() {
        let outer = sphere(0.0, 0.0, 0.0, 5.0);
        let inner = sphere(1.0, 1.0, 0.0, 1.0);
        assert_eq!(outer.merged(&inner), outer);
        assert_eq!(inner.merged(&outer), outer);
    }

    #[test]
    fn test_from_parts_single() {
        let only = sphere(3.0, 4.0, 5.0, 2.0);
        assert_eq!(BoundingSphere::from_parts(&[only]), only);
    }

    #[test]
    #[should_panic(expected = "at least one sub-mesh")]
    fn test_from_parts_empty_panics() {
        BoundingSphere::from_parts(&[]);
    }

    #[test]
    fn test_recenter_keeps_radius() {
        let s = sphere(0.0, 0.0, 0.0, 2.5).recentered(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(s.center, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(s.radius, 2.5);
    }

    fn arb_sphere() -> impl Strategy<Value = BoundingSphere> {
        (-50.0f32..50.0, -50.0f32..50.0, -50.0f32..50.0, 0.1f32..20.0)
            .prop_map(|(x, y, z, r)| sphere(x, y, z, r))
    }

    proptest! {
        #[test]
        fn prop_merged_contains_every_part(parts in prop::collection::vec(arb_sphere(), 1..8)) {
            let merged = BoundingSphere::from_parts(&parts);
            for part in &parts {
                let slack = 1e-3 * (1.0 + merged.radius);
                prop_assert!(
                    merged.center.distance(part.center) + part.radius <= merged.radius + slack
                );
            }
        }

        #[test]
        fn prop_intersection_is_symmetric(a in arb_sphere(), b in arb_sphere()) {
            prop_assert_eq!(a.intersects(&b), b.intersects(&a));
        }
    }
}
