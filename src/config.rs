//! Geometry of a picker as laid out by its adapter.

use serde::{Deserialize, Serialize};

use crate::Component;

/// Side of the square saturation/brightness pad, also the height of the hue
/// bar, in pixels.
pub const DEFAULT_SIZE: Component = 196.0;

/// Radius of the pad thumb in pixels.
pub const DEFAULT_PAD_THUMB_RADIUS: Component = 5.0;

/// Distance from the top of the hue bar to the pointer hot spot of its thumb.
pub const DEFAULT_HUE_THUMB_OFFSET: Component = 8.5;

/// Pixel geometry the picker needs to map pointer positions to color
/// components and back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Side of the pad and height of the hue bar.
    pub size: Component,
    /// Radius of the pad thumb.
    pub pad_thumb_radius: Component,
    /// Offset of the hue thumb hot spot from the top of the bar.
    pub hue_thumb_offset: Component,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            pad_thumb_radius: DEFAULT_PAD_THUMB_RADIUS,
            hue_thumb_offset: DEFAULT_HUE_THUMB_OFFSET,
        }
    }
}
