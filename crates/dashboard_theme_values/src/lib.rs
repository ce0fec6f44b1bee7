//! Scalar value types for design tokens: colors, pixel lengths, font
//! weights and font family stacks, with the serde forms a web rendering
//! layer expects.

mod color;
pub use color::*;

mod length;
pub use length::*;

mod font;
pub use font::*;

mod token_value;
pub use token_value::*;

pub mod deserializers;
pub mod serializers;
