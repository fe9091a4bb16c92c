//! Geometry helpers shared by the engine and the effects layer

use pack_style::{Dimension, Direction, Style};

use crate::{Intrinsic, IntrinsicSize};

/// Size of the area the root node is laid out into
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Absolute content rectangle pushed to a rendering backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounds {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

/// Physical axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Main axis of a container with `direction`
    pub fn main(direction: Direction) -> Self {
        match direction {
            Direction::Row => Self::Horizontal,
            Direction::Column => Self::Vertical,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    pub fn size(self, style: &Style) -> Dimension {
        match self {
            Self::Horizontal => style.width,
            Self::Vertical => style.height,
        }
    }

    pub fn intrinsic(self, intrinsic: &IntrinsicSize) -> Intrinsic {
        match self {
            Self::Horizontal => intrinsic.width,
            Self::Vertical => intrinsic.height,
        }
    }
}
