//! Conversions between [`Rgb`] and [`Hsv`].
//!
//! NOTE: Converting an achromatic color (all channels equal) to HSV yields a
//!       hue of 0. Hue is meaningless for such colors, so a round trip
//!       through RGB does not keep the original hue.

use crate::{Component, Components, Hsv, Rgb};

impl Rgb {
    /// Convert this color to the HSV notation.
    pub fn to_hsv(&self) -> Hsv {
        rgb_to_hsv(self.red, self.green, self.blue).into()
    }
}

impl Hsv {
    /// Convert this color from the HSV notation to RGB.
    pub fn to_rgb(&self) -> Rgb {
        hsv_to_rgb(self.hue, self.saturation, self.value).into()
    }
}

/// Convert red, green and blue components in `[0, 255]` to hue, saturation
/// and value in `[0, 1]`.
///
/// When more than one channel holds the maximum, the hue is computed from
/// the first of red, green and blue that does.
pub fn rgb_to_hsv(red: Component, green: Component, blue: Component) -> Components {
    let Components(red, green, blue) = Components(red, green, blue).map(|c| c / 255.0);

    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);
    let delta = max - min;

    let saturation = if max == 0.0 { 0.0 } else { delta / max };

    let hue = if max == min {
        0.0
    } else {
        let sextant = if max == red {
            (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
        } else if max == green {
            (blue - red) / delta + 2.0
        } else {
            (red - green) / delta + 4.0
        };
        sextant / 6.0
    };

    Components(hue, saturation, max)
}

/// Convert hue, saturation and value in `[0, 1]` to red, green and blue
/// components in `[0, 255]`. The result is not rounded.
pub fn hsv_to_rgb(hue: Component, saturation: Component, value: Component) -> Components {
    let scaled = hue * 6.0;
    let sector = scaled.floor();
    let f = scaled - sector;

    let p = value * (1.0 - saturation);
    let q = value * (1.0 - f * saturation);
    let t = value * (1.0 - (1.0 - f) * saturation);

    let rgb = match (sector as i64).rem_euclid(6) {
        0 => Components(value, t, p),
        1 => Components(q, value, p),
        2 => Components(p, value, t),
        3 => Components(p, q, value),
        4 => Components(t, p, value),
        _ => Components(value, p, q),
    };

    rgb.map(|c| c * 255.0)
}
