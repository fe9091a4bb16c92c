//! Intrinsic sizes reported by leaf content

/// Natural size of a node along one axis
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Intrinsic {
    /// No intrinsic constraint
    #[default]
    Absent,
    /// Hard size: the node is exactly this big unless explicitly sized
    Fixed(f64),
    /// Measured baseline: a minimum that flexible growth may exceed
    Measured(f64),
}

/// Per-axis intrinsic size of a node
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IntrinsicSize {
    pub width: Intrinsic,
    pub height: Intrinsic,
}

impl IntrinsicSize {
    pub fn new(width: Intrinsic, height: Intrinsic) -> Self {
        Self { width, height }
    }

    /// Measured baseline on both axes, the usual shape for text content
    pub fn measured(width: f64, height: f64) -> Self {
        Self::new(Intrinsic::Measured(width), Intrinsic::Measured(height))
    }

    pub fn fixed(width: f64, height: f64) -> Self {
        Self::new(Intrinsic::Fixed(width), Intrinsic::Fixed(height))
    }
}
