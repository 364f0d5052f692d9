//! Model a color in RGB with components scaled to a byte.

use crate::Component;

hsvpick_macros::gen_model! {
    /// A color specified with red, green and blue components in `[0, 255]`.
    ///
    /// Components are not rounded; see [`Rgb::to_bytes`] for display values.
    pub struct Rgb {
        /// The red component of the color.
        red: Component,
        /// The green component of the color.
        green: Component,
        /// The blue component of the color.
        blue: Component,
    }
}

impl Rgb {
    /// Create a color from byte components.
    pub fn from_bytes([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red.into(), green.into(), blue.into())
    }

    /// Round each component to the nearest byte.
    pub fn to_bytes(&self) -> [u8; 3] {
        fn byte(c: Component) -> u8 {
            c.round().clamp(0.0, 255.0) as u8
        }
        [byte(self.red), byte(self.green), byte(self.blue)]
    }

    /// Format the color as `#RRGGBB` with uppercase hexits.
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.to_bytes();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }
}
