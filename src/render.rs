//! Everything an adapter needs to draw a picker, recomputed after every
//! change.

use euclid::{Length, Point2D};

use crate::color::{MAX_HUE, MAX_PERCENT};
use crate::math::{clamp, invert};
use crate::{Channel, Color, Component, Field, PickerConfig, Rgb};

/// Pixel coordinates relative to a picker element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WidgetSpace;

/// Pixel coordinates relative to the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageSpace;

/// A position inside a picker element.
pub type WidgetPoint = Point2D<Component, WidgetSpace>;

/// A pointer position on the page.
pub type PagePoint = Point2D<Component, PageSpace>;

/// Topmost position of the hue thumb.
const HUE_THUMB_MIN: Component = 2.0;

/// Color of the text drawn over the hex field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextColor {
    /// Used on bright colors.
    Black,
    /// Used on dark colors.
    White,
}

impl TextColor {
    /// Brightness above which text is drawn in black.
    pub const THRESHOLD: Component = 75.0;

    /// Pick the text color for a brightness in percent.
    pub fn for_brightness(brightness: Component) -> Self {
        if brightness > Self::THRESHOLD {
            TextColor::Black
        } else {
            TextColor::White
        }
    }

    /// The CSS color value.
    pub fn css(&self) -> &'static str {
        match self {
            TextColor::Black => "#000",
            TextColor::White => "#FFF",
        }
    }
}

/// The derived state of a picker after a change.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    /// The exact color the snapshot was taken from.
    pub color: Color,
    /// Displayed hue, rounded.
    pub hue: u16,
    /// Displayed saturation, rounded.
    pub saturation: u8,
    /// Displayed brightness, rounded.
    pub brightness: u8,
    /// Displayed red, green and blue.
    pub rgb: [u8; 3],
    /// The color as `#RRGGBB`.
    pub hex: String,
    /// Fill of the preview swatch, unrounded.
    pub preview: Rgb,
    /// Fill behind the saturation/brightness pad, unrounded.
    pub pad_backdrop: Rgb,
    /// Top of the hue thumb.
    pub hue_thumb: Length<Component, WidgetSpace>,
    /// Top left corner of the pad thumb.
    pub pad_thumb: WidgetPoint,
    /// Color of the hex text.
    pub text_color: TextColor,
}

impl Snapshot {
    /// Derive everything shown for `color`.
    pub fn new(color: &Color, config: &PickerConfig) -> Self {
        let size = config.size;
        let radius = config.pad_thumb_radius;

        let preview = color.to_rgb();

        let hue_thumb = clamp(
            HUE_THUMB_MIN,
            size + HUE_THUMB_MIN,
            invert(color.hue() / MAX_HUE) * size + 1.0,
        );
        let pad_thumb = WidgetPoint::new(
            clamp(-radius, size - radius, color.saturation() / MAX_PERCENT * size - radius),
            clamp(
                -radius,
                size - radius,
                invert(color.brightness() / MAX_PERCENT) * size - radius,
            ),
        );

        Self {
            color: *color,
            hue: color.hue().round() as u16,
            saturation: color.saturation().round() as u8,
            brightness: color.brightness().round() as u8,
            rgb: preview.to_bytes(),
            hex: preview.to_hex(),
            preview,
            pad_backdrop: color.hue_backdrop(),
            hue_thumb: Length::new(hue_thumb),
            pad_thumb,
            text_color: TextColor::for_brightness(color.brightness()),
        }
    }

    /// The integer shown in a numeric field.
    pub fn value(&self, channel: Channel) -> i64 {
        match channel {
            Channel::Red => self.rgb[0].into(),
            Channel::Green => self.rgb[1].into(),
            Channel::Blue => self.rgb[2].into(),
            Channel::Hue => self.hue.into(),
            Channel::Saturation => self.saturation.into(),
            Channel::Brightness => self.brightness.into(),
        }
    }

    /// The text shown in a field.
    pub fn text(&self, field: Field) -> String {
        match field {
            Field::Hex => self.hex.clone(),
            Field::Channel(channel) => self.value(channel).to_string(),
        }
    }
}

/// The presentation side of a picker.
pub trait Render {
    /// Draw a new snapshot: move both thumbs, fill the preview and the pad
    /// backdrop, and replace the text of all fields.
    fn render(&mut self, snapshot: &Snapshot);

    /// Select the text of the hex field.
    fn select_hex(&mut self) {}

    /// Give keyboard focus to a field.
    fn focus(&mut self, _field: Field) {}

    /// Clear any text selection in the document.
    fn clear_selection(&mut self) {}
}

impl<R: Render + ?Sized> Render for &mut R {
    fn render(&mut self, snapshot: &Snapshot) {
        (**self).render(snapshot)
    }

    fn select_hex(&mut self) {
        (**self).select_hex()
    }

    fn focus(&mut self, field: Field) {
        (**self).focus(field)
    }

    fn clear_selection(&mut self) {
        (**self).clear_selection()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(hue: Component, saturation: Component, brightness: Component) -> Snapshot {
        Snapshot::new(
            &Color::new(hue, saturation, brightness),
            &PickerConfig::default(),
        )
    }

    #[test]
    fn default_color() {
        let s = snapshot(360.0, 100.0, 100.0);
        assert_eq!(s.rgb, [255, 0, 0]);
        assert_eq!(s.hex, "#FF0000");
        assert_eq!(s.hue, 360);
        assert_eq!(s.pad_backdrop.to_bytes(), [255, 0, 0]);
        assert_eq!(s.hue_thumb.get(), 2.0);
        assert_eq!(s.pad_thumb, WidgetPoint::new(191.0, -5.0));
        assert_eq!(s.text_color, TextColor::Black);
    }

    #[test]
    fn thumbs_at_origin() {
        let s = snapshot(0.0, 0.0, 0.0);
        assert_eq!(s.hue_thumb.get(), 197.0);
        assert_eq!(s.pad_thumb, WidgetPoint::new(-5.0, 191.0));
        assert_eq!(s.hex, "#000000");
    }

    #[test]
    fn thumb_positions_are_truncated() {
        // 196 * 0.5 - 5 = 93, 196 * 0.7 + 1 = 138.2
        let s = snapshot(108.0, 50.0, 50.0);
        assert_eq!(s.pad_thumb, WidgetPoint::new(93.0, 93.0));
        assert_eq!(s.hue_thumb.get(), 138.0);
    }

    #[test]
    fn text_color_threshold() {
        assert_eq!(snapshot(0.0, 0.0, 76.0).text_color, TextColor::Black);
        assert_eq!(snapshot(0.0, 0.0, 75.0).text_color, TextColor::White);
        assert_eq!(TextColor::for_brightness(75.5), TextColor::Black);
        assert_eq!(TextColor::White.css(), "#FFF");
    }

    #[test]
    fn field_text() {
        let s = snapshot(210.0, 50.0, 80.0);
        assert_eq!(s.rgb, [102, 153, 204]);
        assert_eq!(s.text(Field::Hex), "#6699CC");
        assert_eq!(s.text(Channel::Red.into()), "102");
        assert_eq!(s.text(Channel::Hue.into()), "210");
        assert_eq!(s.value(Channel::Saturation), 50);
        assert_eq!(s.value(Channel::Brightness), 80);
    }

    #[test]
    fn displayed_components_are_rounded() {
        let s = snapshot(12.5, 33.4, 66.6);
        assert_eq!(s.hue, 13);
        assert_eq!(s.saturation, 33);
        assert_eq!(s.brightness, 67);
    }
}
