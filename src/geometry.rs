//! Geometry value types shared across the simulation
//!
//! Plain data over `glam::Vec2`. A `MovingPoint` is owned by exactly one
//! entity and mutated only inside that entity's per-tick update.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Position + velocity pair for an entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovingPoint {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl MovingPoint {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Top-left corner (screen coordinates: y grows downward)
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Strict overlap test: boxes that merely touch along an edge do not
    /// count as overlapping.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.pos.x < other.right()
            && self.right() > other.pos.x
            && self.pos.y < other.bottom()
            && self.bottom() > other.pos.y
    }

    /// Whether a point falls inside the box (inclusive edges)
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.pos.x
            && point.x <= self.right()
            && point.y >= self.pos.y
            && point.y <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_detects_intersection() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(30.0, 30.0));
        let b = Aabb::new(Vec2::new(20.0, 20.0), Vec2::new(30.0, 30.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn overlap_rejects_disjoint() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(30.0, 30.0));
        let b = Aabb::new(Vec2::new(100.0, 0.0), Vec2::new(30.0, 30.0));
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn edge_touch_is_not_overlap() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(30.0, 30.0));
        let b = Aabb::new(Vec2::new(30.0, 0.0), Vec2::new(30.0, 30.0));
        assert!(!a.overlaps(&b));

        let below = Aabb::new(Vec2::new(0.0, 30.0), Vec2::new(30.0, 30.0));
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn contains_point() {
        let a = Aabb::new(Vec2::new(10.0, 10.0), Vec2::new(20.0, 20.0));
        assert!(a.contains(Vec2::new(15.0, 15.0)));
        assert!(a.contains(Vec2::new(10.0, 10.0)));
        assert!(a.contains(Vec2::new(30.0, 30.0)));
        assert!(!a.contains(Vec2::new(31.0, 15.0)));
    }
}
