//! Game tuning
//!
//! Immutable physical and geometric constants, constructed once and shared
//! read-only for the life of the process. Hosts may ship a JSON tuning
//! file; anything missing or malformed falls back to the defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Physical and geometric tuning for a run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Pipe width in pixels
    pub pipe_width: f32,
    /// Minimum sampled top-pipe height
    pub min_pipe_height: f32,
    /// Maximum sampled top-pipe height
    pub max_pipe_height: f32,
    /// Vertical opening between the top and bottom pipe
    pub pipe_gap: f32,
    /// Horizontal scroll speed (pixels/sec)
    pub scroll_speed: f32,
    /// Vertical velocity set on tap (negative = up)
    pub jump_velocity: f32,
    /// Downward acceleration (pixels/sec^2)
    pub gravity: f32,
    /// Height of the ground strip at the bottom of the screen
    pub ground_height: f32,
    /// Rendered bird size
    pub bird_size: f32,
    /// Side length of the bird's collision box, smaller than `bird_size`
    pub bird_radius: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pipe_width: 100.0,
            min_pipe_height: 100.0,
            max_pipe_height: 500.0,
            pipe_gap: 100.0,
            scroll_speed: 300.0,
            jump_velocity: -400.0,
            gravity: 1000.0,
            ground_height: 100.0,
            bird_size: 80.0,
            bird_radius: 13.0,
        }
    }
}

impl Settings {
    /// Sampling range for the top pipe height.
    ///
    /// Requires `min_pipe_height < max_pipe_height`.
    pub fn gap_range(&self) -> std::ops::RangeInclusive<f32> {
        debug_assert!(self.min_pipe_height < self.max_pipe_height);
        self.min_pipe_height..=self.max_pipe_height
    }

    /// Load tuning from a JSON file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded tuning from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Bad tuning file {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No tuning file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }
}
