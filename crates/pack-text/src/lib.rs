//! Pack Text
//!
//! Font descriptors and font-family resolution:
//! - `Font`, the descriptor pushed to a rendering backend
//! - `FontResolver`, the capability that decides whether a family exists
//! - `FontDatabase`, a resolver backed by fontdb

pub mod font;

pub use font::{Font, FontDatabase, FontResolver, is_generic_family};

/// Text error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TextError {
    #[error("Font not found: {0}")]
    FontNotFound(String),

    #[error("Failed to parse font: {0}")]
    FontParsing(String),
}

pub type Result<T> = std::result::Result<T, TextError>;
