//! Model a color with the HSV notation, all components in unit range.

use crate::Component;

hsvpick_macros::gen_model! {
    /// A color specified with the HSV notation. Every component is in
    /// `[0, 1]`.
    pub struct Hsv {
        /// The hue component of the color, a fraction of a full turn.
        hue: Component,
        /// The saturation component of the color.
        saturation: Component,
        /// The value (brightness) component of the color.
        value: Component,
    }
}
