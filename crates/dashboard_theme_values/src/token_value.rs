use std::fmt;

use serde::Serialize;

use crate::{Color, FontFamily, FontWeight, Px, serializers::ser_ratio};

/// Any single token value, for name-based access to a token set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TokenValue {
    Color(Color),
    Px(Px),
    /// Unitless multiplier, e.g. a line height.
    #[serde(serialize_with = "ser_ratio")]
    Ratio(f32),
    Weight(FontWeight),
    FontFamily(FontFamily),
}

impl TokenValue {
    pub fn as_color(&self) -> Option<Color> {
        match self {
            Self::Color(color) => Some(*color),
            _ => None,
        }
    }

    pub fn as_px(&self) -> Option<Px> {
        match self {
            Self::Px(px) => Some(*px),
            _ => None,
        }
    }

    /// The numeric magnitude of scalar values; `None` for colors and families.
    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Self::Px(px) => Some(px.get()),
            Self::Ratio(ratio) => Some(*ratio),
            Self::Weight(weight) => Some(weight.get() as f32),
            Self::Color(_) | Self::FontFamily(_) => None,
        }
    }
}

impl From<Color> for TokenValue {
    fn from(value: Color) -> Self {
        Self::Color(value)
    }
}

impl From<Px> for TokenValue {
    fn from(value: Px) -> Self {
        Self::Px(value)
    }
}

impl From<f32> for TokenValue {
    fn from(value: f32) -> Self {
        Self::Ratio(value)
    }
}

impl From<FontWeight> for TokenValue {
    fn from(value: FontWeight) -> Self {
        Self::Weight(value)
    }
}

impl From<FontFamily> for TokenValue {
    fn from(value: FontFamily) -> Self {
        Self::FontFamily(value)
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(color) => color.fmt(f),
            Self::Px(px) => px.fmt(f),
            Self::Ratio(ratio) => ratio.fmt(f),
            Self::Weight(weight) => weight.fmt(f),
            Self::FontFamily(family) => family.fmt(f),
        }
    }
}
