//! Shared numeric and string constants for the editor core.

// ── View ────────────────────────────────────────────────────────

/// Smallest allowed zoom factor.
pub const ZOOM_MIN: f64 = 0.5;

/// Largest allowed zoom factor.
pub const ZOOM_MAX: f64 = 2.0;

/// Zoom increment applied by the zoom-in / zoom-out buttons.
pub const ZOOM_STEP: f64 = 0.1;

/// Zoom change per wheel pixel (`zoom * (1 - dy * factor)`).
pub const WHEEL_ZOOM_FACTOR: f64 = 0.001;

/// Distance between grid lines in world units.
pub const GRID_SPACING: f64 = 50.0;

// ── Items ───────────────────────────────────────────────────────

/// Reserved catalog identifier that places a text item instead of an image.
pub const CUSTOM_TEXT_ID: &str = "custom-text";

/// Content given to new text items.
pub const TEXT_PLACEHOLDER: &str = "Double-click to edit";

/// Layout width of an image asset before the host reports its real box.
pub const ASSET_WIDTH: f64 = 100.0;

/// Layout height of an image asset before the host reports its real box.
pub const ASSET_HEIGHT: f64 = 100.0;

/// Layout width of a text item before the host reports its real box.
pub const TEXT_WIDTH: f64 = 160.0;

/// Layout height of a text item before the host reports its real box.
pub const TEXT_HEIGHT: f64 = 24.0;

// ── Handles ─────────────────────────────────────────────────────

/// Screen-space hit slop in pixels for the rotate and scale handles.
pub const HANDLE_RADIUS_PX: f64 = 8.0;

/// Distance above the item's top edge to the rotate handle, in item units.
pub const ROTATE_HANDLE_OFFSET: f64 = 20.0;

/// Floor for the pointer-to-center distance of a scale gesture, in screen pixels.
pub const MIN_PIVOT_DISTANCE_PX: f64 = 1.0;
