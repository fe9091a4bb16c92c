//! Style mutation effects
//!
//! Translates changed presentation properties of a node into calls on an
//! `Applicator`. Geometry is not touched here: layout-affecting changes
//! only result in a refresh request, and the surrounding framework decides
//! when to run the next layout pass.

use pack_style::{Style, StyleChanges};
use pack_text::{Font, FontResolver};

use crate::{Applicator, Bounds, Config, LayoutTree, NodeId};

/// Pushes style changes to a rendering backend
#[derive(Debug)]
pub struct StyleEffects<R> {
    fonts: R,
    config: Config,
}

impl<R: FontResolver> StyleEffects<R> {
    pub fn new(fonts: R) -> Self {
        Self::with_config(fonts, Config::default())
    }

    pub fn with_config(fonts: R, config: Config) -> Self {
        Self { fonts, config }
    }

    /// Apply the effects of `changes` on `node`'s style.
    pub fn apply<A: Applicator + ?Sized>(
        &self,
        tree: &LayoutTree,
        node: NodeId,
        changes: StyleChanges,
        applicator: &mut A,
    ) {
        let Some(style) = tree.style(node) else {
            return;
        };

        if changes.contains(StyleChanges::TEXT_ALIGN) {
            applicator.set_text_align(node, style.resolved_text_align());
        }
        if changes.contains(StyleChanges::TEXT_DIRECTION) && style.text_align.is_none() {
            applicator.set_text_align(node, style.resolved_text_align());
        }
        if changes.contains(StyleChanges::COLOR) {
            applicator.set_color(node, style.color);
        }
        if changes.contains(StyleChanges::BACKGROUND_COLOR) {
            applicator.set_background_color(node, style.background_color);
        }
        if changes.contains(StyleChanges::VISIBILITY) {
            let hidden = is_hidden(tree, node);
            applicator.set_hidden(node, hidden);
            cascade_hidden(tree, node, hidden, applicator);
        }
        if changes.intersects(StyleChanges::FONT) {
            let font = self.resolve_font(style);
            applicator.set_font(node, &font);
        }
        if changes.needs_refresh() {
            applicator.refresh(node);
        }
    }

    /// First family of `style.font_family` the resolver accepts, or the
    /// configured fallback family.
    pub fn resolve_font(&self, style: &Style) -> Font {
        for family in &style.font_family {
            match self.fonts.resolve(Font::for_style(family.as_str(), style)) {
                Ok(font) => return font,
                Err(err) => tracing::debug!("Skipping font family: {}", err),
            }
        }

        tracing::warn!(
            families = ?style.font_family,
            fallback = %self.config.fallback_font_family,
            "No valid font family; using fallback font"
        );
        Font::for_style(self.config.fallback_font_family.as_str(), style)
    }
}

/// Whether `node` renders hidden: its own visibility, or any ancestor's.
pub fn is_hidden(tree: &LayoutTree, node: NodeId) -> bool {
    let Some(style) = tree.style(node) else {
        return false;
    };
    style.is_hidden() || tree.ancestors(node).any(|(_, ancestor)| ancestor.style.is_hidden())
}

fn cascade_hidden<A: Applicator + ?Sized>(
    tree: &LayoutTree,
    node: NodeId,
    hidden: bool,
    applicator: &mut A,
) {
    for (child, child_node) in tree.children(node) {
        let child_hidden = hidden || child_node.style.is_hidden();
        applicator.set_hidden(child, child_hidden);
        cascade_hidden(tree, child, child_hidden, applicator);
    }
}

/// Push the absolute content bounds of `node` and every descendant.
pub fn apply_bounds<A: Applicator + ?Sized>(tree: &LayoutTree, node: NodeId, applicator: &mut A) {
    let position = tree.absolute_content_position(node);
    let (Some((left, top)), Some(layout)) = (position, tree.layout(node)) else {
        return;
    };
    applicator.set_bounds(
        node,
        Bounds { left, top, width: layout.content_width, height: layout.content_height },
    );
    for (child, _) in tree.children(node) {
        apply_bounds(tree, child, applicator);
    }
}
