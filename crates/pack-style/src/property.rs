//! Style property names and change sets

use std::fmt;
use std::str::FromStr;

use crate::StyleError;

/// A single Pack style property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    Direction,
    AlignItems,
    JustifyContent,
    Gap,
    Width,
    Height,
    Flex,
    MarginTop,
    MarginRight,
    MarginBottom,
    MarginLeft,
    Visibility,
    TextDirection,
    TextAlign,
    Color,
    BackgroundColor,
    FontFamily,
    FontSize,
    FontStyle,
    FontVariant,
    FontWeight,
}

impl StyleProperty {
    pub const ALL: [StyleProperty; 21] = [
        Self::Direction,
        Self::AlignItems,
        Self::JustifyContent,
        Self::Gap,
        Self::Width,
        Self::Height,
        Self::Flex,
        Self::MarginTop,
        Self::MarginRight,
        Self::MarginBottom,
        Self::MarginLeft,
        Self::Visibility,
        Self::TextDirection,
        Self::TextAlign,
        Self::Color,
        Self::BackgroundColor,
        Self::FontFamily,
        Self::FontSize,
        Self::FontStyle,
        Self::FontVariant,
        Self::FontWeight,
    ];

    /// Attribute name as used by style declarations
    pub fn name(&self) -> &'static str {
        match self {
            Self::Direction => "direction",
            Self::AlignItems => "align_items",
            Self::JustifyContent => "justify_content",
            Self::Gap => "gap",
            Self::Width => "width",
            Self::Height => "height",
            Self::Flex => "flex",
            Self::MarginTop => "margin_top",
            Self::MarginRight => "margin_right",
            Self::MarginBottom => "margin_bottom",
            Self::MarginLeft => "margin_left",
            Self::Visibility => "visibility",
            Self::TextDirection => "text_direction",
            Self::TextAlign => "text_align",
            Self::Color => "color",
            Self::BackgroundColor => "background_color",
            Self::FontFamily => "font_family",
            Self::FontSize => "font_size",
            Self::FontStyle => "font_style",
            Self::FontVariant => "font_variant",
            Self::FontWeight => "font_weight",
        }
    }

    /// The change-set bit for this property
    pub fn flag(&self) -> StyleChanges {
        match self {
            Self::Direction => StyleChanges::DIRECTION,
            Self::AlignItems => StyleChanges::ALIGN_ITEMS,
            Self::JustifyContent => StyleChanges::JUSTIFY_CONTENT,
            Self::Gap => StyleChanges::GAP,
            Self::Width => StyleChanges::WIDTH,
            Self::Height => StyleChanges::HEIGHT,
            Self::Flex => StyleChanges::FLEX,
            Self::MarginTop => StyleChanges::MARGIN_TOP,
            Self::MarginRight => StyleChanges::MARGIN_RIGHT,
            Self::MarginBottom => StyleChanges::MARGIN_BOTTOM,
            Self::MarginLeft => StyleChanges::MARGIN_LEFT,
            Self::Visibility => StyleChanges::VISIBILITY,
            Self::TextDirection => StyleChanges::TEXT_DIRECTION,
            Self::TextAlign => StyleChanges::TEXT_ALIGN,
            Self::Color => StyleChanges::COLOR,
            Self::BackgroundColor => StyleChanges::BACKGROUND_COLOR,
            Self::FontFamily => StyleChanges::FONT_FAMILY,
            Self::FontSize => StyleChanges::FONT_SIZE,
            Self::FontStyle => StyleChanges::FONT_STYLE,
            Self::FontVariant => StyleChanges::FONT_VARIANT,
            Self::FontWeight => StyleChanges::FONT_WEIGHT,
        }
    }
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StyleProperty {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|property| property.name() == s)
            .ok_or_else(|| StyleError::UnknownProperty(s.to_string()))
    }
}

bitflags::bitflags! {
    /// Set of style properties that changed since they were last applied.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleChanges: u32 {
        const DIRECTION = 1 << 0;
        const ALIGN_ITEMS = 1 << 1;
        const JUSTIFY_CONTENT = 1 << 2;
        const GAP = 1 << 3;
        const WIDTH = 1 << 4;
        const HEIGHT = 1 << 5;
        const FLEX = 1 << 6;
        const MARGIN_TOP = 1 << 7;
        const MARGIN_RIGHT = 1 << 8;
        const MARGIN_BOTTOM = 1 << 9;
        const MARGIN_LEFT = 1 << 10;
        const VISIBILITY = 1 << 11;
        const TEXT_DIRECTION = 1 << 12;
        const TEXT_ALIGN = 1 << 13;
        const COLOR = 1 << 14;
        const BACKGROUND_COLOR = 1 << 15;
        const FONT_FAMILY = 1 << 16;
        const FONT_SIZE = 1 << 17;
        const FONT_STYLE = 1 << 18;
        const FONT_VARIANT = 1 << 19;
        const FONT_WEIGHT = 1 << 20;

        const FONT = Self::FONT_FAMILY.bits()
            | Self::FONT_SIZE.bits()
            | Self::FONT_STYLE.bits()
            | Self::FONT_VARIANT.bits()
            | Self::FONT_WEIGHT.bits();

        /// Changes a backend can apply without a visual refresh
        const PRESENTATION = Self::TEXT_ALIGN.bits()
            | Self::COLOR.bits()
            | Self::BACKGROUND_COLOR.bits()
            | Self::VISIBILITY.bits();
    }
}

impl StyleChanges {
    /// Build a change set from attribute names.
    pub fn from_names<I, S>(names: I) -> crate::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut changes = StyleChanges::empty();
        for name in names {
            changes |= name.as_ref().parse::<StyleProperty>()?.flag();
        }
        Ok(changes)
    }

    /// Whether anything outside the presentation-only set changed.
    pub fn needs_refresh(&self) -> bool {
        !self.difference(StyleChanges::PRESENTATION).is_empty()
    }
}

impl From<StyleProperty> for StyleChanges {
    fn from(property: StyleProperty) -> Self {
        property.flag()
    }
}

impl FromIterator<StyleProperty> for StyleChanges {
    fn from_iter<T: IntoIterator<Item = StyleProperty>>(iter: T) -> Self {
        iter.into_iter().fold(StyleChanges::empty(), |acc, p| acc | p.flag())
    }
}
