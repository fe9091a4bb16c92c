//! Engine configuration

use pack_style::SYSTEM;

/// Settings shared by layout passes and style effects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Family used when none of a style's requested families resolve
    pub fallback_font_family: String,
    /// Emit a `trace` event for every node visited by a layout pass
    pub trace_layout: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fallback_font_family: SYSTEM.to_string(),
            trace_layout: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fallback_font_family(mut self, family: impl Into<String>) -> Self {
        self.fallback_font_family = family.into();
        self
    }

    pub fn with_trace_layout(mut self, enabled: bool) -> Self {
        self.trace_layout = enabled;
        self
    }
}
