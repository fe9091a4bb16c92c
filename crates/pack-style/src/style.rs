//! The resolved style record of a single node

use crate::{
    AlignItems, Color, Dimension, Direction, FontStyle, FontVariant, FontWeight, JustifyContent,
    Side, TextAlign, TextDirection, Visibility, SYSTEM, SYSTEM_DEFAULT_FONT_SIZE,
};

/// Resolved Pack style attributes
///
/// `Default` gives the initial value of every property.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub direction: Direction,
    /// Cross-axis alignment; unset aligns children at the physical top/left
    pub align_items: Option<AlignItems>,
    pub justify_content: JustifyContent,
    /// Spacing between consecutive children along the main axis
    pub gap: u32,
    pub width: Dimension,
    pub height: Dimension,
    /// Weight for sharing leftover main-axis space; 0 does not grow
    pub flex: f64,
    pub margin_top: u32,
    pub margin_right: u32,
    pub margin_bottom: u32,
    pub margin_left: u32,
    pub visibility: Visibility,
    pub text_direction: TextDirection,
    pub text_align: Option<TextAlign>,
    pub color: Option<Color>,
    pub background_color: Color,
    /// Candidate families, most preferred first
    pub font_family: Vec<String>,
    pub font_size: i32,
    pub font_style: FontStyle,
    pub font_variant: FontVariant,
    pub font_weight: FontWeight,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            direction: Direction::Row,
            align_items: None,
            justify_content: JustifyContent::Start,
            gap: 0,
            width: Dimension::Auto,
            height: Dimension::Auto,
            flex: 0.0,
            margin_top: 0,
            margin_right: 0,
            margin_bottom: 0,
            margin_left: 0,
            visibility: Visibility::Visible,
            text_direction: TextDirection::Ltr,
            text_align: None,
            color: None,
            background_color: Color::TRANSPARENT,
            font_family: vec![SYSTEM.to_string()],
            font_size: SYSTEM_DEFAULT_FONT_SIZE,
            font_style: FontStyle::Normal,
            font_variant: FontVariant::Normal,
            font_weight: FontWeight::Normal,
        }
    }
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row() -> Self {
        Self { direction: Direction::Row, ..Self::default() }
    }

    pub fn column() -> Self {
        Self { direction: Direction::Column, ..Self::default() }
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = Dimension::Px(width);
        self
    }

    pub fn with_height(mut self, height: u32) -> Self {
        self.height = Dimension::Px(height);
        self
    }

    pub fn with_flex(mut self, flex: f64) -> Self {
        self.flex = flex;
        self
    }

    pub fn with_gap(mut self, gap: u32) -> Self {
        self.gap = gap;
        self
    }

    /// Set all four margins at once
    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin_top = margin;
        self.margin_right = margin;
        self.margin_bottom = margin;
        self.margin_left = margin;
        self
    }

    pub fn margin(&self, side: Side) -> u32 {
        match side {
            Side::Top => self.margin_top,
            Side::Right => self.margin_right,
            Side::Bottom => self.margin_bottom,
            Side::Left => self.margin_left,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.visibility == Visibility::Hidden
    }

    /// Explicit `text_align`, or the side implied by `text_direction`.
    pub fn resolved_text_align(&self) -> TextAlign {
        self.text_align.unwrap_or_else(|| TextAlign::for_direction(self.text_direction))
    }
}
