#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::macros::component_overrides;
use crate::theme::{Color, FontFamily, FontWeight, Px, Theme, TokenValue};

component_overrides! {
    pub struct ButtonToken {
        primary_color: Color = "primaryColor",
        color_primary: Color = "colorPrimary",
        default_bg: Color = "defaultBg",
        default_color: Color = "defaultColor",
        default_border_color: Color = "defaultBorderColor",
        control_height: Px = "controlHeight",
        control_height_lg: Px = "controlHeightLG",
        control_height_sm: Px = "controlHeightSM",
        padding_inline: Px = "paddingInline",
        font_size: Px = "fontSize",
        font_weight: FontWeight = "fontWeight",
        border_radius: Px = "borderRadius",
    }
}

component_overrides! {
    pub struct CardToken {
        color_bg_container: Color = "colorBgContainer",
        color_border_secondary: Color = "colorBorderSecondary",
        border_radius_lg: Px = "borderRadiusLG",
        padding: Px = "padding",
        padding_lg: Px = "paddingLG",
        header_bg: Color = "headerBg",
        header_font_size: Px = "headerFontSize",
        header_height: Px = "headerHeight",
    }
}

component_overrides! {
    pub struct StatisticToken {
        content_font_size: Px = "contentFontSize",
        title_font_size: Px = "titleFontSize",
        font_family: FontFamily = "fontFamily",
        color_text: Color = "colorText",
        color_text_description: Color = "colorTextDescription",
    }
}

component_overrides! {
    pub struct BadgeToken {
        color_error: Color = "colorError",
        color_warning: Color = "colorWarning",
        color_success: Color = "colorSuccess",
        dot_size: Px = "dotSize",
        indicator_height: Px = "indicatorHeight",
        text_font_size: Px = "textFontSize",
        status_size: Px = "statusSize",
    }
}

component_overrides! {
    pub struct AlertToken {
        color_error_bg: Color = "colorErrorBg",
        color_error_border: Color = "colorErrorBorder",
        color_error: Color = "colorError",
        color_info_bg: Color = "colorInfoBg",
        color_info_border: Color = "colorInfoBorder",
        color_success_bg: Color = "colorSuccessBg",
        color_warning_bg: Color = "colorWarningBg",
        border_radius_lg: Px = "borderRadiusLG",
        font_size: Px = "fontSize",
    }
}

component_overrides! {
    /// Accepts both the older `colorBg*` names and the current `*Bg` names.
    pub struct LayoutToken {
        color_bg_header: Color = "colorBgHeader",
        color_bg_body: Color = "colorBgBody",
        color_bg_trigger: Color = "colorBgTrigger",
        sider_bg: Color = "siderBg",
        header_bg: Color = "headerBg",
        body_bg: Color = "bodyBg",
        footer_bg: Color = "footerBg",
        trigger_bg: Color = "triggerBg",
        header_height: Px = "headerHeight",
    }
}

/// Per-widget overrides, keyed by the widget's name on the wire.
///
/// A widget missing from a theme file parses as an empty override set, so
/// every widget is always present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentOverrides {
    #[serde(rename = "Button", default)]
    pub button: ButtonToken,
    #[serde(rename = "Card", default)]
    pub card: CardToken,
    #[serde(rename = "Statistic", default)]
    pub statistic: StatisticToken,
    #[serde(rename = "Badge", default)]
    pub badge: BadgeToken,
    #[serde(rename = "Alert", default)]
    pub alert: AlertToken,
    #[serde(rename = "Layout", default)]
    pub layout: LayoutToken,
}

impl ComponentOverrides {
    pub fn entries(&self, kind: ComponentKind) -> IndexMap<&'static str, TokenValue> {
        match kind {
            ComponentKind::Button => self.button.entries(),
            ComponentKind::Card => self.card.entries(),
            ComponentKind::Statistic => self.statistic.entries(),
            ComponentKind::Badge => self.badge.entries(),
            ComponentKind::Alert => self.alert.entries(),
            ComponentKind::Layout => self.layout.entries(),
        }
    }

    pub fn get(&self, kind: ComponentKind, key: &str) -> Option<TokenValue> {
        match kind {
            ComponentKind::Button => self.button.get(key),
            ComponentKind::Card => self.card.get(key),
            ComponentKind::Statistic => self.statistic.get(key),
            ComponentKind::Badge => self.badge.get(key),
            ComponentKind::Alert => self.alert.get(key),
            ComponentKind::Layout => self.layout.get(key),
        }
    }

    pub fn is_empty(&self, kind: ComponentKind) -> bool {
        match kind {
            ComponentKind::Button => self.button.is_empty(),
            ComponentKind::Card => self.card.is_empty(),
            ComponentKind::Statistic => self.statistic.is_empty(),
            ComponentKind::Badge => self.badge.is_empty(),
            ComponentKind::Alert => self.alert.is_empty(),
            ComponentKind::Layout => self.layout.is_empty(),
        }
    }
}

/// The widgets a theme can override.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[func(pub fn name(&self) -> &'static str)]
#[func(pub fn keys(&self) -> &'static [&'static str])]
pub enum ComponentKind {
    #[assoc(name = "Button")]
    #[assoc(keys = ButtonToken::KEYS)]
    Button,
    #[assoc(name = "Card")]
    #[assoc(keys = CardToken::KEYS)]
    Card,
    #[assoc(name = "Statistic")]
    #[assoc(keys = StatisticToken::KEYS)]
    Statistic,
    #[assoc(name = "Badge")]
    #[assoc(keys = BadgeToken::KEYS)]
    Badge,
    #[assoc(name = "Alert")]
    #[assoc(keys = AlertToken::KEYS)]
    Alert,
    #[assoc(name = "Layout")]
    #[assoc(keys = LayoutToken::KEYS)]
    Layout,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 6] = [
        Self::Button,
        Self::Card,
        Self::Statistic,
        Self::Badge,
        Self::Alert,
        Self::Layout,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn recognizes(&self, key: &str) -> bool {
        self.keys().contains(&key)
    }

    /// The overrides `theme` sets for this widget.
    pub fn overrides(&self, theme: &Theme) -> IndexMap<&'static str, TokenValue> {
        theme.components.entries(*self)
    }
}
