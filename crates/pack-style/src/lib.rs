//! Pack Style
//!
//! Resolved style values consumed by the Pack layout engine.
//!
//! Everything in this crate is already validated: properties are plain
//! enums and integers, with the initial values Pack assigns to a fresh
//! style declaration. Parsing and cascading happen elsewhere.

mod color;
mod font;
mod property;
mod style;
mod values;

pub use color::Color;
pub use font::{
    FontStyle, FontVariant, FontWeight, GENERIC_FAMILIES, SYSTEM, SYSTEM_DEFAULT_FONT_SIZE,
};
pub use property::{StyleChanges, StyleProperty};
pub use style::Style;
pub use values::{
    AlignItems, Dimension, Direction, JustifyContent, Side, TextAlign, TextDirection, Visibility,
};

/// Style error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    #[error("Unknown style property: {0}")]
    UnknownProperty(String),
}

pub type Result<T> = std::result::Result<T, StyleError>;
