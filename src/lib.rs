//! hsvpick provides the model and controller of an HSV color picker widget:
//! RGB/HSV conversion, normalization of field input, and the drag gestures
//! of the saturation/brightness pad, the hue bar and numeric fields.
//!
//! Drawing is left to an adapter implementing [`Render`].

#![deny(missing_docs)]

mod color;
mod config;
mod convert;
mod error;
mod hsv;
mod input;
mod interaction;
mod math;
mod picker;
mod render;
mod rgb;


pub use color::{Color, Component, Components, MAX_HUE, MAX_PERCENT};
pub use config::PickerConfig;
pub use convert::{hsv_to_rgb, rgb_to_hsv};
pub use error::{Error, Result};
pub use hsv::Hsv;
pub use input::{decode_hex, Channel, Field, Input};
pub use interaction::{
    Cursor, DragId, DragState, DragTarget, InputCoordinator, Target, TargetClasses,
};
pub use math::{clamp, parse_int};
pub use picker::{ColorPicker, Layout};
pub use render::{PagePoint, PageSpace, Render, Snapshot, TextColor, WidgetPoint, WidgetSpace};
pub use rgb::Rgb;
