//! Editor configuration, supplied by the host as JSON.
//!
//! Every field is optional; missing fields take the defaults below. Zoom
//! limits are fixed at `[ZOOM_MIN, ZOOM_MAX]` and cannot be configured.
//!
//! | Field | Default |
//! |-------|---------|
//! | `grid_spacing` | `50` |
//! | `zoom_step` | `0.1` |
//! | `wheel_zoom_factor` | `0.001` |
//! | `snap_enabled` | `false` |
//! | `grid_visible` | `false` |
//! | `text_placeholder` | `"Double-click to edit"` |
//! | `asset_size` | `{ "width": 100, "height": 100 }` |
//! | `text_size` | `{ "width": 160, "height": 24 }` |

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    ASSET_HEIGHT, ASSET_WIDTH, GRID_SPACING, TEXT_HEIGHT, TEXT_PLACEHOLDER, TEXT_WIDTH, WHEEL_ZOOM_FACTOR, ZOOM_STEP,
};

/// Error returned by [`EditorConfig::from_json`] and [`EditorConfig::validate`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse editor config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid editor config field `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Width and height of a default layout box.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoxSize {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    pub grid_spacing: f64,
    pub zoom_step: f64,
    pub wheel_zoom_factor: f64,
    pub snap_enabled: bool,
    pub grid_visible: bool,
    pub text_placeholder: String,
    pub asset_size: BoxSize,
    pub text_size: BoxSize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grid_spacing: GRID_SPACING,
            zoom_step: ZOOM_STEP,
            wheel_zoom_factor: WHEEL_ZOOM_FACTOR,
            snap_enabled: false,
            grid_visible: false,
            text_placeholder: TEXT_PLACEHOLDER.to_owned(),
            asset_size: BoxSize { width: ASSET_WIDTH, height: ASSET_HEIGHT },
            text_size: BoxSize { width: TEXT_WIDTH, height: TEXT_HEIGHT },
        }
    }
}

impl EditorConfig {
    /// Parse and validate a JSON config object.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields and
    /// [`ConfigError::Invalid`] for values that fail [`EditorConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every numeric setting is finite and positive.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("grid_spacing", self.grid_spacing)?;
        require_positive("zoom_step", self.zoom_step)?;
        require_positive("wheel_zoom_factor", self.wheel_zoom_factor)?;
        require_positive("asset_size.width", self.asset_size.width)?;
        require_positive("asset_size.height", self.asset_size.height)?;
        require_positive("text_size.width", self.text_size.width)?;
        require_positive("text_size.height", self.text_size.height)?;
        Ok(())
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid { field, reason: format!("expected a finite positive number, got {value}") })
    }
}
