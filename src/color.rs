//! The [`Color`] held by a picker. Hue, saturation and brightness are stored
//! in the units shown to the user and are the only source of truth; RGB and
//! hex values are always derived from them.

use crate::math::clamp;
use crate::{Hsv, Rgb};

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

/// Upper bound of the hue component in degrees.
pub const MAX_HUE: Component = 360.0;

/// Upper bound of the saturation and brightness components in percent.
pub const MAX_PERCENT: Component = 100.0;

/// A color in the HSB notation used by the picker.
///
/// Components can only be set through methods that keep them in range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    hue: Component,
    saturation: Component,
    brightness: Component,
}

impl Default for Color {
    /// Pure red with the hue at the top of the hue bar.
    fn default() -> Self {
        Self::new(MAX_HUE, MAX_PERCENT, MAX_PERCENT)
    }
}

/// Bound a value without truncating it. NaN becomes `min`.
fn bound(min: Component, max: Component, value: Component) -> Component {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

impl Color {
    /// Create a color from hue in degrees and saturation and brightness in
    /// percent. Out of range components are bounded, not truncated.
    pub fn new(hue: Component, saturation: Component, brightness: Component) -> Self {
        Self {
            hue: bound(0.0, MAX_HUE, hue),
            saturation: bound(0.0, MAX_PERCENT, saturation),
            brightness: bound(0.0, MAX_PERCENT, brightness),
        }
    }

    /// The hue in degrees, `[0, 360]`.
    pub fn hue(&self) -> Component {
        self.hue
    }

    /// The saturation in percent, `[0, 100]`.
    pub fn saturation(&self) -> Component {
        self.saturation
    }

    /// The brightness (value) in percent, `[0, 100]`.
    pub fn brightness(&self) -> Component {
        self.brightness
    }

    /// Replace the hue. The value is truncated and clamped to `[0, 360]`.
    pub fn set_hue(&mut self, hue: Component) {
        self.hue = clamp(0.0, MAX_HUE, hue);
    }

    /// Replace the saturation. The value is truncated and clamped to
    /// `[0, 100]`.
    pub fn set_saturation(&mut self, saturation: Component) {
        self.saturation = clamp(0.0, MAX_PERCENT, saturation);
    }

    /// Replace the brightness. The value is truncated and clamped to
    /// `[0, 100]`.
    pub fn set_brightness(&mut self, brightness: Component) {
        self.brightness = clamp(0.0, MAX_PERCENT, brightness);
    }

    /// Replace all three components from a color in unit HSV.
    ///
    /// Unlike the setters, the scaled components are kept exact so that
    /// RGB entered by the user is not rounded twice.
    pub fn set_hsv(&mut self, hsv: &Hsv) {
        let hsv = hsv.map(|c| c.clamp(0.0, 1.0));
        self.hue = hsv.hue * MAX_HUE;
        self.saturation = hsv.saturation * MAX_PERCENT;
        self.brightness = hsv.value * MAX_PERCENT;
    }

    /// Replace all three components from a color in RGB.
    pub fn set_rgb(&mut self, rgb: &Rgb) {
        self.set_hsv(&rgb.to_hsv());
    }

    /// The color in unit HSV.
    pub fn to_hsv(&self) -> Hsv {
        Hsv::new(
            self.hue / MAX_HUE,
            self.saturation / MAX_PERCENT,
            self.brightness / MAX_PERCENT,
        )
    }

    /// The color converted to unrounded RGB.
    pub fn to_rgb(&self) -> Rgb {
        self.to_hsv().to_rgb()
    }

    /// The fully saturated, fully bright color sharing this hue. Used as the
    /// backdrop of the saturation/brightness pad.
    pub fn hue_backdrop(&self) -> Rgb {
        Hsv::new(self.hue / MAX_HUE, 1.0, 1.0).to_rgb()
    }
}
