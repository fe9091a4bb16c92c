//! Font-related style values

/// The platform's default UI family
pub const SYSTEM: &str = "system";

/// Families that every backend can satisfy
pub const GENERIC_FAMILIES: [&str; 6] =
    [SYSTEM, "serif", "sans-serif", "cursive", "fantasy", "monospace"];

/// Font size meaning "whatever the platform uses by default"
pub const SYSTEM_DEFAULT_FONT_SIZE: i32 = -1;

/// Font style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
    Oblique,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum FontVariant {
    #[default]
    Normal,
    SmallCaps,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    /// Numeric weight on the 100-900 scale
    pub fn numeric(&self) -> u16 {
        match self {
            Self::Normal => 400,
            Self::Bold => 700,
        }
    }
}
