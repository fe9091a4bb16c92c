//! Per-node layout output

use crate::geometry::Axis;

/// Result of the last layout pass for one node
///
/// All values are whole pixels. Positions are relative to the parent's
/// content box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LayoutResult {
    pub content_top: u32,
    pub content_left: u32,
    pub content_width: u32,
    pub content_height: u32,
    /// Smallest width this node could take without breaking an explicit
    /// size or intrinsic minimum
    pub min_content_width: u32,
    pub min_content_height: u32,
}

impl LayoutResult {
    pub fn content(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Horizontal => self.content_width,
            Axis::Vertical => self.content_height,
        }
    }

    pub fn min_content(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Horizontal => self.min_content_width,
            Axis::Vertical => self.min_content_height,
        }
    }

    /// Set the leading coordinate along `axis` (left or top).
    pub fn set_content_start(&mut self, axis: Axis, value: u32) {
        match axis {
            Axis::Horizontal => self.content_left = value,
            Axis::Vertical => self.content_top = value,
        }
    }
}
