//! Pack Layout Engine
//!
//! Box layout for trees of styled widgets.
//!
//! This crate computes the position and size of every node in a
//! `LayoutTree` from its resolved `Style` and the intrinsic size of its
//! content. It implements:
//! - Row and column containers with margins, gaps and explicit sizes
//! - Flexible children sharing leftover main-axis space by weight
//! - Main-axis justification and cross-axis alignment
//! - Right-to-left mirroring of rows
//!
//! Presentation-only style changes (color, font, visibility, text
//! alignment) are pushed to a backend `Applicator` by `StyleEffects`.

mod applicator;
mod config;
mod effects;
mod engine;
mod geometry;
mod intrinsic;
mod result;
mod tree;

pub use applicator::Applicator;
pub use config::Config;
pub use effects::{StyleEffects, apply_bounds, is_hidden};
pub use engine::{layout, layout_tree, layout_with_config};
pub use geometry::{Axis, Bounds, Viewport};
pub use intrinsic::{Intrinsic, IntrinsicSize};
pub use result::LayoutResult;
pub use tree::{Ancestors, ChildIterator, LayoutNode, LayoutTree, NodeId};

pub use pack_style as style;
pub use pack_text as text;
