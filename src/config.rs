// src/config.rs

//! Configuration for the LED strip renderer.
//!
//! `RendererOptions` carries the layout parameters a host passes when it
//! initializes a renderer. The struct deserializes from a configuration
//! file or embedded host settings (TOML, JSON, ...), with every field
//! optional; defaults give 10px LED blocks with a 2px gap, left-to-right
//! placement, and a pure black background.

use serde::{Deserialize, Serialize};

/// Layout options for a `StripRenderer`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RendererOptions {
    /// Edge length, in output pixels, of the square block drawn per LED.
    pub pixel_size: usize,
    /// Gap in output pixels between neighbouring LED blocks.
    pub led_spacing: usize,
    /// Mirror horizontal placement (for right-to-left strips).
    pub reversed: bool,
    /// Background color as a `#RRGGBB` string.
    pub background_color: String,
}

impl Default for RendererOptions {
    fn default() -> Self {
        RendererOptions {
            pixel_size: 10,
            led_spacing: 2,
            reversed: false,
            background_color: "#000000".to_string(),
        }
    }
}
