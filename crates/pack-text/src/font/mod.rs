//! Font descriptors and family resolution

mod database;

pub use database::FontDatabase;

use pack_style::{FontStyle, FontVariant, FontWeight, GENERIC_FAMILIES, Style};

use crate::Result;

/// A resolved font request
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Font {
    pub family: String,
    /// Point size; negative means the platform default
    pub size: i32,
    pub style: FontStyle,
    pub variant: FontVariant,
    pub weight: FontWeight,
}

impl Font {
    pub fn new(family: impl Into<String>, size: i32) -> Self {
        Self {
            family: family.into(),
            size,
            style: FontStyle::Normal,
            variant: FontVariant::Normal,
            weight: FontWeight::Normal,
        }
    }

    /// Font for `family` carrying the size/style/variant/weight of `style`
    pub fn for_style(family: impl Into<String>, style: &Style) -> Self {
        Self {
            family: family.into(),
            size: style.font_size,
            style: style.font_style,
            variant: style.font_variant,
            weight: style.font_weight,
        }
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }
}

/// Is `family` one of the generic families every backend supplies?
pub fn is_generic_family(family: &str) -> bool {
    GENERIC_FAMILIES.contains(&family)
}

/// Decides whether a requested font can be honored.
pub trait FontResolver {
    /// Return the usable font for `candidate`, or `TextError::FontNotFound`.
    fn resolve(&self, candidate: Font) -> Result<Font>;
}

impl<R: FontResolver + ?Sized> FontResolver for &R {
    fn resolve(&self, candidate: Font) -> Result<Font> {
        (**self).resolve(candidate)
    }
}
