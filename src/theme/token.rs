use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use dashboard_theme_values::serializers::ser_ratio;

use super::macros::token_set;
use crate::theme::{Color, FontFamily, FontWeight, Px, TokenValue};

token_set! {
    /// Global design tokens, applied to every widget unless a component
    /// override replaces them.
    pub struct GlobalToken {
        color_primary: Color = "colorPrimary",
        color_success: Color = "colorSuccess",
        color_warning: Color = "colorWarning",
        color_error: Color = "colorError",
        color_info: Color = "colorInfo",

        /// Seed for the page background the algorithm derives surfaces from.
        color_bg_base: Color = "colorBgBase",
        color_bg_container: Color = "colorBgContainer",
        color_border: Color = "colorBorder",
        color_text: Color = "colorText",
        color_text_secondary: Color = "colorTextSecondary",

        font_family: FontFamily = "fontFamily",
        font_size: Px = "fontSize",
        font_size_heading1: Px = "fontSizeHeading1",
        font_size_heading2: Px = "fontSizeHeading2",
        font_size_heading3: Px = "fontSizeHeading3",
        font_weight_strong: FontWeight = "fontWeightStrong",
        /// Unitless, multiplied by the font size.
        #[serde(serialize_with = "ser_ratio")]
        line_height: f32 = "lineHeight",
        #[serde(serialize_with = "ser_ratio")]
        line_height_heading1: f32 = "lineHeightHeading1",
        #[serde(serialize_with = "ser_ratio")]
        line_height_heading2: f32 = "lineHeightHeading2",

        margin_xs: Px = "marginXS",
        margin_sm: Px = "marginSM",
        margin: Px = "margin",
        margin_md: Px = "marginMD",
        margin_lg: Px = "marginLG",
        margin_xl: Px = "marginXL",

        padding_xs: Px = "paddingXS",
        padding_sm: Px = "paddingSM",
        padding: Px = "padding",
        padding_md: Px = "paddingMD",
        padding_lg: Px = "paddingLG",

        border_radius_sm: Px = "borderRadiusSM",
        border_radius: Px = "borderRadius",
        border_radius_lg: Px = "borderRadiusLG",
        border_radius_xl: Px = "borderRadiusXL",
    }
}
