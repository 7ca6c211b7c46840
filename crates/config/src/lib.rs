//! Shared configuration for Skinloader
//!
//! Window dimensions, 2D panel placement and editor defaults live here so the
//! app shell and the scene plugins agree on them. Editor defaults can be
//! overridden from the environment.

use painting::{DEFAULT_PIXEL_SCALE, display_size};
use serde::{Deserialize, Serialize};
use tracing::warn;

#[cfg(feature = "bevy")]
use bevy::prelude::Resource;

/// Default window width in pixels
pub const DEFAULT_WIDTH: u32 = 1280;

/// Default window height in pixels
pub const DEFAULT_HEIGHT: u32 = 720;

/// Largest accepted panel zoom
pub const MAX_PIXEL_SCALE: u32 = 16;

/// Vertical space between the 2D panel and the colour strip below it
pub const PANEL_GAP: f32 = 8.0;

/// File name offered by the export dialog
pub const DEFAULT_EXPORT_FILE_NAME: &str = "minecraft-skin.png";

/// Environment variable overriding [`EditorConfig::pixel_scale`]
pub const ENV_PIXEL_SCALE: &str = "SKINLOADER_PIXEL_SCALE";

/// Environment variable overriding [`EditorConfig::show_grid`]
pub const ENV_GRID: &str = "SKINLOADER_GRID";

/// Display configuration for window and rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "bevy", derive(Resource))]
pub struct DisplayConfig {
    /// Window width in logical pixels
    pub width: u32,
    /// Window height in logical pixels
    pub height: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// Editor defaults: 2D panel placement, grid and export naming
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "bevy", derive(Resource))]
pub struct EditorConfig {
    /// Screen pixels per buffer cell in the 2D panel
    pub pixel_scale: u32,
    /// Grid overlay enabled at start-up
    pub show_grid: bool,
    /// Top-left corner of the 2D panel in logical window pixels
    pub panel_origin: [f32; 2],
    /// Default file name for exports
    pub export_file_name: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            pixel_scale: DEFAULT_PIXEL_SCALE,
            show_grid: true,
            panel_origin: [16.0, 16.0],
            export_file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
        }
    }
}

impl EditorConfig {
    /// Defaults with `SKINLOADER_PIXEL_SCALE` and `SKINLOADER_GRID` applied
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_overrides(
            std::env::var(ENV_PIXEL_SCALE).ok().as_deref(),
            std::env::var(ENV_GRID).ok().as_deref(),
        );
        config
    }

    /// Apply raw override values. Unparseable values are ignored with a warning.
    pub fn apply_overrides(&mut self, pixel_scale: Option<&str>, grid: Option<&str>) {
        if let Some(raw) = pixel_scale {
            match raw.trim().parse::<u32>() {
                Ok(scale) if (1..=MAX_PIXEL_SCALE).contains(&scale) => self.pixel_scale = scale,
                _ => warn!("Ignoring {}={:?}, expected 1..={}", ENV_PIXEL_SCALE, raw, MAX_PIXEL_SCALE),
            }
        }

        if let Some(raw) = grid {
            match parse_flag(raw) {
                Some(enabled) => self.show_grid = enabled,
                None => warn!("Ignoring {}={:?}, expected on/off", ENV_GRID, raw),
            }
        }
    }

    /// Side length of the 2D panel in logical pixels. Always matches the
    /// display render the panel shows.
    pub fn panel_size(&self) -> f32 {
        display_size(self.pixel_scale) as f32
    }

    /// Top-left corner of the colour strip, just below the panel
    pub fn palette_origin(&self) -> [f32; 2] {
        let [left, top] = self.panel_origin;
        [left, top + self.panel_size() + PANEL_GAP]
    }

    /// Whether a logical window position lies on the 2D panel
    pub fn panel_contains(&self, x: f32, y: f32) -> bool {
        let [ox, oy] = self.panel_origin;
        let size = self.panel_size();
        x >= ox && y >= oy && x < ox + size && y < oy + size
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
