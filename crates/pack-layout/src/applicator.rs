//! Applicator: the rendering backend's side of style application
//!
//! The engine never draws anything. After a layout pass or a style change
//! it tells an `Applicator` what to do to each node's native widget; one
//! implementation exists per backend.

use pack_style::{Color, TextAlign};
use pack_text::Font;

use crate::{Bounds, NodeId};

/// Per-node presentation sink implemented by a rendering backend
pub trait Applicator {
    /// Absolute content rectangle of `node`
    fn set_bounds(&mut self, node: NodeId, bounds: Bounds);

    /// Effective hidden state, ancestors already taken into account
    fn set_hidden(&mut self, node: NodeId, hidden: bool);

    fn set_text_align(&mut self, node: NodeId, align: TextAlign);

    /// Foreground color; `None` means the backend default
    fn set_color(&mut self, node: NodeId, color: Option<Color>);

    fn set_background_color(&mut self, node: NodeId, color: Color);

    fn set_font(&mut self, node: NodeId, font: &Font);

    /// Request a full visual refresh of `node`
    fn refresh(&mut self, node: NodeId);
}
