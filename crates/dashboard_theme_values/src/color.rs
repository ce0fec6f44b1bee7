use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};
use thiserror::Error;

/// An sRGB color with straight (non-premultiplied) alpha.
///
/// Parses from `#RRGGBB` or `rgba(r, g, b, a)` and writes back out as
/// uppercase `#RRGGBB` when fully opaque, `rgba(...)` otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

/// Creates an opaque color from a `0xRRGGBB` value.
pub const fn rgb(hex: u32) -> Color {
    rgb_a(hex, 1.0)
}

/// Creates a color from a `0xRRGGBB` value and alpha component.
pub const fn rgb_a(hex: u32, a: f32) -> Color {
    let [_, r, g, b] = hex.to_be_bytes();
    Color { r, g, b, a }
}

impl Color {
    /// Returns a new color with the specified alpha value.
    pub fn alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    /// The color channels packed as `0xRRGGBB`, alpha dropped.
    pub fn to_hex(&self) -> u32 {
        u32::from_be_bytes([0, self.r, self.g, self.b])
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorParseError {
    #[error("expected \"#RRGGBB\", got \"{0}\"")]
    InvalidHex(String),
    #[error("expected 4 components in rgba(), got {0}")]
    ComponentCount(usize),
    #[error("color channel \"{0}\" is not an integer in 0..=255")]
    InvalidChannel(String),
    #[error("alpha \"{0}\" is not a number")]
    InvalidAlpha(String),
    #[error("alpha {0} is outside [0, 1]")]
    AlphaOutOfRange(f32),
    #[error("unrecognized color syntax \"{0}\", expected \"#RRGGBB\" or \"rgba(r, g, b, a)\"")]
    UnknownSyntax(String),
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorParseError::InvalidHex(s.to_owned()));
        }

        if let Some(args) = s.strip_prefix("rgba(").and_then(|rest| rest.strip_suffix(')')) {
            return parse_rgba(args);
        }

        Err(ColorParseError::UnknownSyntax(s.to_owned()))
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    u32::from_str_radix(hex, 16).ok().map(rgb)
}

fn parse_rgba(args: &str) -> Result<Color, ColorParseError> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();

    let [r, g, b, a] = parts.as_slice() else {
        return Err(ColorParseError::ComponentCount(parts.len()));
    };

    let channel = |value: &str| {
        value
            .parse::<u8>()
            .map_err(|_| ColorParseError::InvalidChannel(value.to_owned()))
    };

    let alpha = a
        .parse::<f32>()
        .map_err(|_| ColorParseError::InvalidAlpha((*a).to_owned()))?;

    if !(0.0..=1.0).contains(&alpha) {
        return Err(ColorParseError::AlphaOutOfRange(alpha));
    }

    Ok(Color {
        r: channel(*r)?,
        g: channel(*g)?,
        b: channel(*b)?,
        a: alpha,
    })
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let string = String::deserialize(deserializer)?;
        string.parse().map_err(D::Error::custom)
    }
}
