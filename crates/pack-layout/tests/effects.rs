//! Style effects tests
//!
//! A recording applicator captures every call so the tests can check
//! exactly what a backend would be told.

use pack_layout::style::{
    Color, FontWeight, Style, StyleChanges, TextAlign, TextDirection, Visibility,
};
use pack_layout::text::{Font, FontDatabase, FontResolver, TextError};
use pack_layout::*;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Bounds(NodeId, Bounds),
    Hidden(NodeId, bool),
    TextAlign(NodeId, TextAlign),
    Color(NodeId, Option<Color>),
    BackgroundColor(NodeId, Color),
    Font(NodeId, Font),
    Refresh(NodeId),
}

#[derive(Debug, Default)]
struct RecordingApplicator {
    calls: Vec<Call>,
}

impl Applicator for RecordingApplicator {
    fn set_bounds(&mut self, node: NodeId, bounds: Bounds) {
        self.calls.push(Call::Bounds(node, bounds));
    }

    fn set_hidden(&mut self, node: NodeId, hidden: bool) {
        self.calls.push(Call::Hidden(node, hidden));
    }

    fn set_text_align(&mut self, node: NodeId, align: TextAlign) {
        self.calls.push(Call::TextAlign(node, align));
    }

    fn set_color(&mut self, node: NodeId, color: Option<Color>) {
        self.calls.push(Call::Color(node, color));
    }

    fn set_background_color(&mut self, node: NodeId, color: Color) {
        self.calls.push(Call::BackgroundColor(node, color));
    }

    fn set_font(&mut self, node: NodeId, font: &Font) {
        self.calls.push(Call::Font(node, font.clone()));
    }

    fn refresh(&mut self, node: NodeId) {
        self.calls.push(Call::Refresh(node));
    }
}

/// Resolver that only knows a fixed list of family names
struct KnownFamilies(&'static [&'static str]);

impl FontResolver for KnownFamilies {
    fn resolve(&self, candidate: Font) -> text::Result<Font> {
        if self.0.contains(&candidate.family.as_str()) {
            Ok(candidate)
        } else {
            Err(TextError::FontNotFound(candidate.family))
        }
    }
}

fn single_node(style: Style) -> (LayoutTree, NodeId) {
    let mut tree = LayoutTree::new();
    let root = tree.create_node(style, IntrinsicSize::default());
    tree.set_root(root);
    (tree, root)
}

fn apply(tree: &LayoutTree, node: NodeId, changes: StyleChanges) -> Vec<Call> {
    let effects = StyleEffects::new(KnownFamilies(&["Helvetica"]));
    let mut applicator = RecordingApplicator::default();
    effects.apply(tree, node, changes, &mut applicator);
    applicator.calls
}

fn rtl_style() -> Style {
    Style { text_direction: TextDirection::Rtl, ..Style::default() }
}

// ============================================================================
// TEXT ALIGNMENT
// ============================================================================

#[test]
fn test_text_align_derived_from_direction() {
    let (tree, node) = single_node(rtl_style());
    assert_eq!(
        apply(&tree, node, StyleChanges::TEXT_ALIGN),
        vec![Call::TextAlign(node, TextAlign::Right)]
    );

    let (tree, node) = single_node(Style::default());
    assert_eq!(
        apply(&tree, node, StyleChanges::TEXT_ALIGN),
        vec![Call::TextAlign(node, TextAlign::Left)]
    );
}

#[test]
fn test_explicit_text_align() {
    let (tree, node) = single_node(Style {
        text_align: Some(TextAlign::Justify),
        text_direction: TextDirection::Rtl,
        ..Style::default()
    });
    assert_eq!(
        apply(&tree, node, StyleChanges::TEXT_ALIGN),
        vec![Call::TextAlign(node, TextAlign::Justify)]
    );
}

#[test]
fn test_text_direction_change() {
    let (tree, node) = single_node(rtl_style());
    assert_eq!(
        apply(&tree, node, StyleChanges::TEXT_DIRECTION),
        vec![Call::TextAlign(node, TextAlign::Right), Call::Refresh(node)]
    );

    // An explicit alignment is not affected by the direction.
    let (tree, node) = single_node(Style {
        text_direction: TextDirection::Rtl,
        text_align: Some(TextAlign::Center),
        ..Style::default()
    });
    assert_eq!(apply(&tree, node, StyleChanges::TEXT_DIRECTION), vec![Call::Refresh(node)]);
}

// ============================================================================
// COLORS
// ============================================================================

#[test]
fn test_colors_do_not_refresh() {
    let red = Color::rgb(255, 0, 0);
    let (tree, node) = single_node(Style {
        color: Some(red),
        background_color: Color::WHITE,
        ..Style::default()
    });

    assert_eq!(
        apply(&tree, node, StyleChanges::COLOR | StyleChanges::BACKGROUND_COLOR),
        vec![Call::Color(node, Some(red)), Call::BackgroundColor(node, Color::WHITE)]
    );
}

// ============================================================================
// VISIBILITY
// ============================================================================

fn hidden_style() -> Style {
    Style { visibility: Visibility::Hidden, ..Style::default() }
}

#[test]
fn test_visible_child_of_hidden_parent() {
    let mut tree = LayoutTree::new();
    let root = tree.create_node(hidden_style(), IntrinsicSize::default());
    let child = tree.create_child(root, Style::default(), IntrinsicSize::default());
    let grandchild = tree.create_child(child, Style::default(), IntrinsicSize::default());

    assert_eq!(
        apply(&tree, child, StyleChanges::VISIBILITY),
        vec![Call::Hidden(child, true), Call::Hidden(grandchild, true)]
    );
}

#[test]
fn test_hidden_cascades_to_descendants() {
    let mut tree = LayoutTree::new();
    let root = tree.create_node(Style::default(), IntrinsicSize::default());
    let hidden = tree.create_child(root, hidden_style(), IntrinsicSize::default());
    let inner = tree.create_child(hidden, Style::default(), IntrinsicSize::default());
    let sibling = tree.create_child(root, Style::default(), IntrinsicSize::default());

    assert_eq!(
        apply(&tree, root, StyleChanges::VISIBILITY),
        vec![
            Call::Hidden(root, false),
            Call::Hidden(hidden, true),
            Call::Hidden(inner, true),
            Call::Hidden(sibling, false),
        ]
    );
}

// ============================================================================
// FONTS
// ============================================================================

#[test]
fn test_first_resolvable_family_wins() {
    let (tree, node) = single_node(Style {
        font_family: vec!["Missing".to_string(), "Helvetica".to_string(), "serif".to_string()],
        font_size: 14,
        font_weight: FontWeight::Bold,
        ..Style::default()
    });

    let calls = apply(&tree, node, StyleChanges::FONT_FAMILY);
    assert_eq!(
        calls,
        vec![
            Call::Font(node, Font::new("Helvetica", 14).with_weight(FontWeight::Bold)),
            Call::Refresh(node),
        ]
    );
}

#[test]
fn test_font_falls_back_to_system() {
    let (tree, node) = single_node(Style {
        font_family: vec!["Missing".to_string()],
        font_size: 9,
        ..Style::default()
    });

    let calls = apply(&tree, node, StyleChanges::FONT_SIZE);
    assert_eq!(calls, vec![Call::Font(node, Font::new("system", 9)), Call::Refresh(node)]);
}

#[test]
fn test_font_fallback_family_is_configurable() {
    let (tree, node) = single_node(Style {
        font_family: vec!["Missing".to_string()],
        ..Style::default()
    });
    let effects = StyleEffects::with_config(
        KnownFamilies(&[]),
        Config::new().with_fallback_font_family("monospace"),
    );

    let font = effects.resolve_font(tree.style(node).unwrap());
    assert_eq!(font.family, "monospace");
}

#[test]
fn test_font_database_resolver() {
    let fonts = FontDatabase::new();
    let effects = StyleEffects::new(&fonts);
    let style = Style {
        font_family: vec!["Nonexistent".to_string(), "cursive".to_string()],
        ..Style::default()
    };

    assert_eq!(effects.resolve_font(&style).family, "cursive");
}

// ============================================================================
// REFRESH AND BOUNDS
// ============================================================================

#[test]
fn test_layout_changes_only_refresh() {
    let (tree, node) = single_node(Style::default());
    let changes = StyleChanges::from_names(["width", "flex", "margin_top"]).unwrap();
    assert_eq!(apply(&tree, node, changes), vec![Call::Refresh(node)]);
}

#[test]
fn test_no_changes_no_calls() {
    let (tree, node) = single_node(Style::default());
    assert!(apply(&tree, node, StyleChanges::empty()).is_empty());
}

#[test]
fn test_unknown_node_is_ignored() {
    let (tree, _) = single_node(Style::default());
    assert!(apply(&tree, NodeId(7), StyleChanges::all()).is_empty());
}

#[test]
fn test_apply_bounds_uses_absolute_positions() {
    let mut tree = LayoutTree::new();
    let root = tree.create_node(Style::column().with_margin(5), IntrinsicSize::default());
    tree.set_root(root);
    let header = tree.create_child(root, Style::row().with_height(20), IntrinsicSize::default());
    let button = tree.create_child(
        header,
        Style { margin_left: 7, ..Style::default().with_width(30) },
        IntrinsicSize::default(),
    );

    layout_tree(&mut tree, Viewport::new(110, 110));

    // The header row is not stretched across the column: it shrinks to
    // its content (7px margin + 30px button).
    let mut applicator = RecordingApplicator::default();
    apply_bounds(&tree, root, &mut applicator);

    assert_eq!(
        applicator.calls,
        vec![
            Call::Bounds(root, Bounds { left: 5, top: 5, width: 100, height: 100 }),
            Call::Bounds(header, Bounds { left: 5, top: 5, width: 37, height: 20 }),
            Call::Bounds(button, Bounds { left: 12, top: 5, width: 30, height: 20 }),
        ]
    );
}
