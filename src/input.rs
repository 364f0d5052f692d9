//! Normalization of raw field values into picker inputs.
//!
//! An adapter reads text out of a field and resolves it into an [`Input`]
//! before the picker sees it. Parsing never fails: malformed text falls back
//! to a default value.

use std::fmt;
use std::str::FromStr;

use crate::color::{MAX_HUE, MAX_PERCENT};
use crate::math::parse_int;
use crate::{Component, Error};

/// One of the six numeric inputs of the picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Red, `[0, 255]`.
    Red,
    /// Green, `[0, 255]`.
    Green,
    /// Blue, `[0, 255]`.
    Blue,
    /// Hue in degrees, `[0, 360]`.
    Hue,
    /// Saturation in percent, `[0, 100]`.
    Saturation,
    /// Brightness in percent, `[0, 100]`.
    Brightness,
}

impl Channel {
    /// All channels in display order.
    pub const ALL: [Channel; 6] = [
        Channel::Red,
        Channel::Green,
        Channel::Blue,
        Channel::Hue,
        Channel::Saturation,
        Channel::Brightness,
    ];

    /// The tag an adapter uses for this channel.
    pub fn name(&self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
            Channel::Hue => "hue",
            Channel::Saturation => "saturation",
            Channel::Brightness => "brightness",
        }
    }

    /// The inclusive range a value on this channel is clamped to.
    pub fn range(&self) -> (Component, Component) {
        match self {
            Channel::Red | Channel::Green | Channel::Blue => (0.0, 255.0),
            Channel::Hue => (0.0, MAX_HUE),
            Channel::Saturation | Channel::Brightness => (0.0, MAX_PERCENT),
        }
    }
}

/// A text field of the picker: the hex field or one of the numeric channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    /// The `#RRGGBB` field.
    Hex,
    /// A numeric field.
    Channel(Channel),
}

impl Field {
    /// The tag an adapter uses for this field.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Hex => "hex",
            Field::Channel(channel) => channel.name(),
        }
    }
}

impl From<Channel> for Field {
    fn from(value: Channel) -> Self {
        Field::Channel(value)
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "hex" {
            return Ok(Field::Hex);
        }
        Channel::ALL
            .into_iter()
            .find(|channel| channel.name() == s)
            .map(Field::Channel)
            .ok_or_else(|| Error::UnknownField(s.to_owned()))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A normalized value for one of the picker's fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    /// Hex text, decoded with [`decode_hex`] when applied.
    Hex(String),
    /// An integer for a numeric channel, clamped when applied.
    Channel(Channel, i64),
}

impl Input {
    /// Resolve the raw text of `field` into an input.
    ///
    /// Numeric text that does not start with an integer reads as 0.
    pub fn from_text(field: Field, raw: &str) -> Self {
        match field {
            Field::Hex => Input::Hex(raw.to_owned()),
            Field::Channel(channel) => Input::Channel(channel, parse_int(raw).unwrap_or(0)),
        }
    }

    /// The field this input targets.
    pub fn field(&self) -> Field {
        match self {
            Input::Hex(_) => Field::Hex,
            Input::Channel(channel, _) => Field::Channel(*channel),
        }
    }
}

/// Hexit used for a character that is not a hex digit.
const INVALID_HEXIT: u8 = 0xF;

/// Decode hex color text into three bytes.
///
/// A leading `#` is stripped and the rest limited to six characters. Three
/// characters are expanded by doubling each one (`F0A` is `FF00AA`).
/// Missing hexits read as 0 and characters that are not hex digits read as
/// `F`, so garbage decodes toward white.
pub fn decode_hex(raw: &str) -> [u8; 3] {
    let chars: Vec<char> = match raw.strip_prefix('#') {
        Some(rest) => rest.chars().take(6).collect(),
        None => raw.chars().collect(),
    };

    let hexits: [Option<char>; 6] = if chars.len() == 3 {
        [0, 0, 1, 1, 2, 2].map(|i| Some(chars[i]))
    } else {
        [0, 1, 2, 3, 4, 5].map(|i| chars.get(i).copied())
    };

    let hexits = hexits.map(|c| match c {
        None => 0,
        Some(c) => c.to_digit(16).map_or(INVALID_HEXIT, |d| d as u8),
    });

    [0, 2, 4].map(|i| (hexits[i] << 4) + hexits[i + 1])
}
