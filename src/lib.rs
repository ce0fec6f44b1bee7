// Lets derive output name `::dashboard_theme::Theme` from inside this crate.
extern crate self as dashboard_theme;

pub mod theme;
pub use theme::Theme;
