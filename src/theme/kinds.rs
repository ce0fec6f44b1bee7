#![allow(missing_docs)] // Derive macros generate undocumented methods.

use dashboard_theme_macros::IntoThemeField;
use enum_assoc::Assoc;

use crate::theme::{Px, Theme};

/// Margin steps, smallest first.
///
/// Use `resolve()` to read the step's value from a theme.
#[derive(IntoThemeField, Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[field(Px)]
#[func(pub fn key(&self) -> &'static str)]
pub enum MarginKind {
    #[theme(token.margin_xs)]
    #[assoc(key = "marginXS")]
    Xs,
    #[theme(token.margin_sm)]
    #[assoc(key = "marginSM")]
    Sm,
    #[theme(token.margin)]
    #[assoc(key = "margin")]
    Base,
    #[theme(token.margin_md)]
    #[assoc(key = "marginMD")]
    Md,
    #[theme(token.margin_lg)]
    #[assoc(key = "marginLG")]
    Lg,
    #[theme(token.margin_xl)]
    #[assoc(key = "marginXL")]
    Xl,
}

impl MarginKind {
    pub const SCALE: [MarginKind; 6] = [
        Self::Xs,
        Self::Sm,
        Self::Base,
        Self::Md,
        Self::Lg,
        Self::Xl,
    ];
}

/// Padding steps, smallest first. There is no extra large padding.
#[derive(IntoThemeField, Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[field(Px)]
#[func(pub fn key(&self) -> &'static str)]
pub enum PaddingKind {
    #[theme(token.padding_xs)]
    #[assoc(key = "paddingXS")]
    Xs,
    #[theme(token.padding_sm)]
    #[assoc(key = "paddingSM")]
    Sm,
    #[theme(token.padding)]
    #[assoc(key = "padding")]
    Base,
    #[theme(token.padding_md)]
    #[assoc(key = "paddingMD")]
    Md,
    #[theme(token.padding_lg)]
    #[assoc(key = "paddingLG")]
    Lg,
}

impl PaddingKind {
    pub const SCALE: [PaddingKind; 5] = [Self::Xs, Self::Sm, Self::Base, Self::Md, Self::Lg];
}

/// Corner radius steps.
#[derive(IntoThemeField, Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[field(Px)]
#[func(pub fn key(&self) -> &'static str)]
pub enum RadiusKind {
    #[theme(token.border_radius_sm)]
    #[assoc(key = "borderRadiusSM")]
    Sm,
    #[theme(token.border_radius)]
    #[assoc(key = "borderRadius")]
    Base,
    #[theme(token.border_radius_lg)]
    #[assoc(key = "borderRadiusLG")]
    Lg,
    #[theme(token.border_radius_xl)]
    #[assoc(key = "borderRadiusXL")]
    Xl,
}

impl RadiusKind {
    pub const SCALE: [RadiusKind; 4] = [Self::Sm, Self::Base, Self::Lg, Self::Xl];
}

/// Heading levels, largest first.
#[derive(IntoThemeField, Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[field(Px)]
#[func(pub fn key(&self) -> &'static str)]
pub enum HeadingKind {
    #[theme(token.font_size_heading1)]
    #[assoc(key = "fontSizeHeading1")]
    H1,
    #[theme(token.font_size_heading2)]
    #[assoc(key = "fontSizeHeading2")]
    H2,
    #[theme(token.font_size_heading3)]
    #[assoc(key = "fontSizeHeading3")]
    H3,
}

impl HeadingKind {
    /// The heading's own line height, if the theme defines one. Levels
    /// without one use the body `lineHeight`.
    pub fn line_height(&self, theme: &Theme) -> Option<f32> {
        match self {
            Self::H1 => Some(theme.token.line_height_heading1),
            Self::H2 => Some(theme.token.line_height_heading2),
            Self::H3 => None,
        }
    }
}
