//! Collision detection for axis-aligned bodies
//!
//! Ball and paddles are both upright rectangles, so overlap is a plain
//! interval test on each axis. Touching edges count as a hit.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Bottom-left corner
    pub min: Vec2,
    /// Top-right corner
    pub max: Vec2,
}

impl Aabb {
    /// Build a box from its bottom-left corner and size
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn half_height(&self) -> f32 {
        (self.max.y - self.min.y) / 2.0
    }

    /// Check whether two boxes overlap (inclusive of shared edges)
    pub fn overlaps(&self, other: &Aabb) -> bool {
        !(self.max.x < other.min.x
            || self.min.x > other.max.x
            || self.max.y < other.min.y
            || self.min.y > other.max.y)
    }
}

/// Where along `target`'s height `hit` struck, normalised to roughly [-1, 1]
///
/// 0 is dead centre, +1 the top edge, -1 the bottom edge. Values beyond
/// that range are possible when the centres are further apart than half
/// the target's height.
pub fn hit_offset(target: &Aabb, hit: &Aabb) -> f32 {
    let half = target.half_height();
    if half <= 0.0 {
        return 0.0;
    }
    (hit.center().y - target.center().y) / half
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Aabb {
        Aabb::from_pos_size(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_overlap_and_miss() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&rect(5.0, 5.0, 10.0, 10.0)));
        assert!(!a.overlaps(&rect(11.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&rect(0.0, -20.0, 10.0, 10.0)));
    }

    #[test]
    fn test_touching_edges_overlap() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&rect(10.0, 0.0, 5.0, 5.0)));
        assert!(a.overlaps(&rect(-5.0, 10.0, 5.0, 5.0)));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = rect(0.0, 0.0, 25.0, 200.0);
        let b = rect(20.0, 150.0, 50.0, 50.0);
        assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    #[test]
    fn test_hit_offset() {
        let paddle = rect(37.5, 250.0, 25.0, 100.0);
        let center_hit = rect(40.0, 290.0, 10.0, 20.0);
        assert!(hit_offset(&paddle, &center_hit).abs() < 1e-6);

        let top_hit = rect(40.0, 340.0, 10.0, 20.0);
        assert!((hit_offset(&paddle, &top_hit) - 1.0).abs() < 1e-6);

        let low_hit = rect(40.0, 240.0, 10.0, 20.0);
        assert!((hit_offset(&paddle, &low_hit) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_hit_offset_flat_target() {
        let flat = rect(0.0, 0.0, 10.0, 0.0);
        assert_eq!(hit_offset(&flat, &rect(0.0, 5.0, 1.0, 1.0)), 0.0);
    }
}
