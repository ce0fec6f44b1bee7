//! Theme definition: global design tokens, per-widget overrides and the
//! color algorithm a rendering layer applies them with.
//!
//! The built-in dark theme is embedded JSON parsed once on first access.
//! Further themes can be loaded from JSON files, are validated on load and
//! are immutable afterwards.

mod macros;

mod schema;
pub use schema::*;

mod token;
pub use token::*;

mod components;
pub use components::*;

mod kinds;
pub use kinds::*;

mod validate;
pub use validate::*;

mod error;
pub use error::*;

mod ext;
pub use ext::*;

pub use dashboard_theme_values::{
    Color, ColorParseError, FontFamily, FontWeight, FontWeightError, Px, TokenValue, px, rgb,
    rgb_a,
};
