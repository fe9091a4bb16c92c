//! Keyword values for Pack style properties

/// Main axis of a container
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Row,
    Column,
}

/// Cross-axis alignment of children (logical, not physical)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlignItems {
    Start,
    Center,
    End,
}

impl AlignItems {
    /// The same alignment seen from the opposite edge.
    pub fn flipped(self) -> Self {
        match self {
            Self::Start => Self::End,
            Self::Center => Self::Center,
            Self::End => Self::Start,
        }
    }
}

/// Main-axis distribution of leftover space
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum JustifyContent {
    #[default]
    Start,
    Center,
    End,
}

/// Which physical side is "start" along a row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl TextDirection {
    /// Physical (start, end) sides of the horizontal axis.
    pub fn horizontal_sides(&self) -> (Side, Side) {
        match self {
            Self::Ltr => (Side::Left, Side::Right),
            Self::Rtl => (Side::Right, Side::Left),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
}

/// Horizontal alignment of text inside a widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextAlign {
    Left,
    Right,
    Center,
    Justify,
}

impl TextAlign {
    /// Alignment used when no explicit `text_align` is set.
    pub fn for_direction(direction: TextDirection) -> Self {
        match direction {
            TextDirection::Rtl => Self::Right,
            TextDirection::Ltr => Self::Left,
        }
    }
}

/// Explicit pixel size, or auto (sized by content and flex)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Dimension {
    #[default]
    Auto,
    Px(u32),
}

impl Dimension {
    pub fn is_auto(&self) -> bool {
        matches!(self, Self::Auto)
    }

    /// Pixel value when explicit
    pub fn px(&self) -> Option<u32> {
        match self {
            Self::Px(v) => Some(*v),
            Self::Auto => None,
        }
    }
}

impl From<u32> for Dimension {
    fn from(value: u32) -> Self {
        Dimension::Px(value)
    }
}

/// Physical side of a box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rtl_swaps_horizontal_sides() {
        assert_eq!(TextDirection::Ltr.horizontal_sides(), (Side::Left, Side::Right));
        assert_eq!(TextDirection::Rtl.horizontal_sides(), (Side::Right, Side::Left));
    }

    #[test]
    fn test_align_flip() {
        assert_eq!(AlignItems::Start.flipped(), AlignItems::End);
        assert_eq!(AlignItems::End.flipped(), AlignItems::Start);
        assert_eq!(AlignItems::Center.flipped(), AlignItems::Center);
    }

    #[test]
    fn test_text_align_for_direction() {
        assert_eq!(TextAlign::for_direction(TextDirection::Ltr), TextAlign::Left);
        assert_eq!(TextAlign::for_direction(TextDirection::Rtl), TextAlign::Right);
    }

    #[test]
    fn test_dimension() {
        assert!(Dimension::default().is_auto());
        assert_eq!(Dimension::from(40).px(), Some(40));
        assert_eq!(Dimension::Auto.px(), None);
    }
}
