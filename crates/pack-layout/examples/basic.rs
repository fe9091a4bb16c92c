//! Example: lay out a small form and push it to a logging backend
//!
//! Run with `RUST_LOG=pack_layout=trace` to watch the recursion.

use pack_layout::style::{AlignItems, Color, Style, StyleChanges, TextAlign};
use pack_layout::text::{Font, FontDatabase};
use pack_layout::{
    Applicator, Bounds, IntrinsicSize, LayoutTree, NodeId, StyleEffects, Viewport, apply_bounds,
    layout_tree,
};
use tracing_subscriber::EnvFilter;

/// Backend that only logs what it is asked to do
struct LoggingBackend;

impl Applicator for LoggingBackend {
    fn set_bounds(&mut self, node: NodeId, bounds: Bounds) {
        tracing::info!(node = node.0, ?bounds, "set_bounds");
    }

    fn set_hidden(&mut self, node: NodeId, hidden: bool) {
        tracing::info!(node = node.0, hidden, "set_hidden");
    }

    fn set_text_align(&mut self, node: NodeId, align: TextAlign) {
        tracing::info!(node = node.0, ?align, "set_text_align");
    }

    fn set_color(&mut self, node: NodeId, color: Option<Color>) {
        tracing::info!(node = node.0, ?color, "set_color");
    }

    fn set_background_color(&mut self, node: NodeId, color: Color) {
        tracing::info!(node = node.0, ?color, "set_background_color");
    }

    fn set_font(&mut self, node: NodeId, font: &Font) {
        tracing::info!(node = node.0, family = %font.family, size = font.size, "set_font");
    }

    fn refresh(&mut self, node: NodeId) {
        tracing::info!(node = node.0, "refresh");
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut tree = LayoutTree::new();
    let root =
        tree.create_node(Style::column().with_margin(10).with_gap(8), IntrinsicSize::default());
    tree.set_root(root);

    let row = tree.create_child(
        root,
        Style { align_items: Some(AlignItems::Center), ..Style::row().with_gap(4) },
        IntrinsicSize::default(),
    );
    let label = tree.create_child(row, Style::default(), IntrinsicSize::measured(60.0, 18.0));
    let input = tree.create_child(
        row,
        Style::default().with_flex(1.0),
        IntrinsicSize::measured(100.0, 24.0),
    );
    let button =
        tree.create_child(root, Style::default().with_height(32), IntrinsicSize::default());

    layout_tree(&mut tree, Viewport::new(400, 300));

    let mut backend = LoggingBackend;
    apply_bounds(&tree, root, &mut backend);

    if let Some(node) = tree.get_mut(label) {
        node.style.color = Some(Color::rgb(40, 40, 40));
        node.style.font_family = vec!["Inter".to_string(), "sans-serif".to_string()];
    }
    let effects = StyleEffects::new(FontDatabase::with_system_fonts());
    let changes = StyleChanges::from_names(["color", "font_family"])?;
    effects.apply(&tree, label, changes, &mut backend);

    for id in [row, label, input, button] {
        if let Some(result) = tree.layout(id) {
            println!(
                "node {:>2}: {:>3}x{:<3} at ({}, {})",
                id.0,
                result.content_width,
                result.content_height,
                result.content_left,
                result.content_top
            );
        }
    }

    Ok(())
}
