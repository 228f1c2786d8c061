//! Per-item affine transform and the geometry derived from it.
//!
//! An item's layout box spans `(0, 0)..(width, height)` in its own local
//! space. It is placed with `translate(x, y) rotate(rotation) scale(scale)`,
//! applied in that order, with rotation and scale pivoting on the box center.
//! The same mapping drives handle placement, hit-testing and the gesture
//! pivot, so all three agree with what the host renders.

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use serde::{Deserialize, Serialize};

use crate::view::Point;

/// Translate → rotate → scale, in that fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemTransform {
    /// World position of the item's local origin.
    pub x: f64,
    pub y: f64,
    /// Degrees, clockwise, never normalized.
    pub rotation: f64,
    pub scale: f64,
}

impl Default for ItemTransform {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0, rotation: 0.0, scale: 1.0 }
    }
}

impl ItemTransform {
    /// CSS `transform` value reproducing this transform.
    #[must_use]
    pub fn css(&self) -> String {
        format!(
            "translate({}px, {}px) rotate({}deg) scale({})",
            self.x, self.y, self.rotation, self.scale
        )
    }

    /// World-space center of a `width` × `height` box; the rotate/scale pivot.
    ///
    /// Rotation and scale pivot on the center, so it depends on position only.
    #[must_use]
    pub fn center(&self, width: f64, height: f64) -> Point {
        Point::new(self.x + width * 0.5, self.y + height * 0.5)
    }

    /// Map a point in the item's local box space to world space.
    #[must_use]
    pub fn local_to_world(&self, local: Point, width: f64, height: f64) -> Point {
        let center = self.center(width, height);
        let (sin, cos) = self.rotation.to_radians().sin_cos();
        let dx = (local.x - width * 0.5) * self.scale;
        let dy = (local.y - height * 0.5) * self.scale;
        Point::new(center.x + dx * cos - dy * sin, center.y + dx * sin + dy * cos)
    }

    /// Map a world point into the item's local box space.
    ///
    /// Returns `None` when the scale is zero, subnormal or non-finite.
    #[must_use]
    pub fn world_to_local(&self, world: Point, width: f64, height: f64) -> Option<Point> {
        if !self.scale.is_normal() {
            return None;
        }
        let center = self.center(width, height);
        let (sin, cos) = self.rotation.to_radians().sin_cos();
        let dx = world.x - center.x;
        let dy = world.y - center.y;
        let rx = dx * cos + dy * sin;
        let ry = -dx * sin + dy * cos;
        Some(Point::new(rx / self.scale + width * 0.5, ry / self.scale + height * 0.5))
    }
}

/// Floor each axis to the grid line at or before it.
///
/// Idempotent: a point already on the grid is returned unchanged.
#[must_use]
pub fn snap_to_grid(p: Point, spacing: f64) -> Point {
    if spacing <= 0.0 || !spacing.is_finite() {
        return p;
    }
    Point::new((p.x / spacing).floor() * spacing, (p.y / spacing).floor() * spacing)
}

/// Angle in radians of `pointer` as seen from `center`.
///
/// A pointer exactly on the center yields `0.0` (`atan2(0, 0)`).
#[must_use]
pub fn pointer_angle(center: Point, pointer: Point) -> f64 {
    (pointer.y - center.y).atan2(pointer.x - center.x)
}

/// Distance of `pointer` from `center`, floored at `min`.
#[must_use]
pub fn pointer_distance(center: Point, pointer: Point, min: f64) -> f64 {
    center.distance_to(pointer).max(min)
}
