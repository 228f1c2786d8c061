//! World ↔ screen mapping for the pannable, zoomable canvas.
//!
//! Screen space is CSS pixels relative to the canvas viewport. World space is
//! the unbounded coordinate system items live in. The two are related by a
//! uniform zoom followed by a pan offset:
//!
//! ```text
//! screen = world * zoom + pan
//! world  = (screen - pan) / zoom
//! ```

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use serde::{Deserialize, Serialize};

use crate::consts::{GRID_SPACING, ZOOM_MAX, ZOOM_MIN};

/// A point in either screen or world space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Clamp a requested zoom factor into `[ZOOM_MIN, ZOOM_MAX]`.
///
/// `NaN` maps to `ZOOM_MIN`; infinities map to the nearest limit.
#[must_use]
pub fn clamp_zoom(zoom: f64) -> f64 {
    if zoom.is_nan() {
        return ZOOM_MIN;
    }
    zoom.clamp(ZOOM_MIN, ZOOM_MAX)
}

/// View state: pan/zoom plus the grid display options.
///
/// `pan_x` / `pan_y` are the screen position of the world origin in CSS pixels.
/// `zoom` is a scale factor (1.0 = no zoom) and always lies in `[0.5, 2.0]`.
/// Rendering reads this as-is and redraws the grid whenever it changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct View {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
    pub grid_spacing: f64,
    pub snap_enabled: bool,
    pub grid_visible: bool,
}

impl Default for View {
    fn default() -> Self {
        Self {
            pan_x: 0.0,
            pan_y: 0.0,
            zoom: 1.0,
            grid_spacing: GRID_SPACING,
            snap_enabled: false,
            grid_visible: false,
        }
    }
}

impl View {
    /// Convert a screen-space point (CSS pixels) to world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.pan_x) / self.zoom,
            y: (screen.y - self.pan_y) / self.zoom,
        }
    }

    /// Convert a world-space point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point {
            x: world.x * self.zoom + self.pan_x,
            y: world.y * self.zoom + self.pan_y,
        }
    }

    /// Return a copy zoomed to `new_zoom` (clamped) such that the world point
    /// under `anchor` stays under `anchor`.
    ///
    /// `pan' = anchor - (new_zoom / old_zoom) * (anchor - pan)`, per axis.
    #[must_use]
    pub fn zoom_about_point(&self, anchor: Point, new_zoom: f64) -> View {
        let zoom = clamp_zoom(new_zoom);
        let ratio = zoom / self.zoom;
        View {
            pan_x: anchor.x - ratio * (anchor.x - self.pan_x),
            pan_y: anchor.y - ratio * (anchor.y - self.pan_y),
            zoom,
            ..*self
        }
    }

    /// Set the pan offset directly. Pan is unconstrained.
    pub fn pan_to(&mut self, pan_x: f64, pan_y: f64) {
        self.pan_x = pan_x;
        self.pan_y = pan_y;
    }

    /// CSS `transform` value for the content layer that holds every item.
    #[must_use]
    pub fn css_transform(&self) -> String {
        format!("translate({}px, {}px) scale({})", self.pan_x, self.pan_y, self.zoom)
    }
}
