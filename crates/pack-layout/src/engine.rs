//! Pack box layout
//!
//! A recursive two-phase pass. Going down, each container hands its
//! children an allocation along its main axis; coming back up, each
//! child reports the size it took and the smallest size it could have
//! taken. Flexible children are sized last, from whatever main-axis
//! space the fixed children left behind.
//!
//! All arithmetic runs in `f64`; values are truncated to whole pixels
//! only when written into a node's `LayoutResult`.

use pack_style::{AlignItems, Dimension, Direction, JustifyContent, Side};

use crate::{Axis, Config, Intrinsic, LayoutTree, NodeId, Viewport};

/// Lay out the tree's root into `viewport`.
pub fn layout_tree(tree: &mut LayoutTree, viewport: Viewport) {
    if let Some(root) = tree.root() {
        layout(tree, root, viewport);
    }
}

/// Lay out `root` and all of its descendants into `viewport`.
///
/// The root is forced to consume the full viewport on both axes.
pub fn layout(tree: &mut LayoutTree, root: NodeId, viewport: Viewport) {
    layout_with_config(tree, root, viewport, &Config::default());
}

pub fn layout_with_config(
    tree: &mut LayoutTree,
    root: NodeId,
    viewport: Viewport,
    config: &Config,
) {
    let mut pass = LayoutPass { tree, trace: config.trace_layout };
    pass.layout_node(
        root,
        f64::from(viewport.width),
        f64::from(viewport.height),
        true,
        true,
        0,
    );

    if let Some(node) = tree.get_mut(root) {
        node.layout.content_top = node.style.margin_top;
        node.layout.content_left = node.style.margin_left;
        tracing::debug!(
            viewport_width = viewport.width,
            viewport_height = viewport.height,
            width = node.layout.content_width,
            height = node.layout.content_height,
            "Layout complete"
        );
    }
}

/// Style values of one child, snapshotted in its parent's orientation
#[derive(Debug, Clone, Copy)]
struct ChildInfo {
    id: NodeId,
    direction: Direction,
    main_size: Dimension,
    flex: f64,
    intrinsic_main: Intrinsic,
    margin_main_start: f64,
    margin_main_end: f64,
    margin_cross_start: f64,
    margin_cross_end: f64,
}

impl ChildInfo {
    fn is_flexible(&self) -> bool {
        self.flex > 0.0
    }

    /// Deferred to phase 2: auto-sized, flexible, and not bound by a
    /// fixed intrinsic size.
    fn is_deferred(&self) -> bool {
        self.main_size.is_auto()
            && self.is_flexible()
            && !matches!(self.intrinsic_main, Intrinsic::Fixed(_))
    }

    fn main_margins(&self) -> f64 {
        self.margin_main_start + self.margin_main_end
    }
}

/// Orientation of a container's children
#[derive(Debug, Clone, Copy)]
struct Orientation {
    main_axis: Axis,
    cross_axis: Axis,
    main_start: Side,
    main_end: Side,
    cross_start: Side,
    cross_end: Side,
}

struct LayoutPass<'a> {
    tree: &'a mut LayoutTree,
    trace: bool,
}

impl LayoutPass<'_> {
    fn layout_node(
        &mut self,
        id: NodeId,
        alloc_width: f64,
        alloc_height: f64,
        use_all_width: bool,
        use_all_height: bool,
        depth: usize,
    ) {
        let Some(node) = self.tree.get(id) else {
            return;
        };
        let style = &node.style;
        let explicit_width = style.width.px();
        let explicit_height = style.height.px();

        let (available_width, min_width) = resolve_axis(
            explicit_width,
            alloc_width,
            style.margin_left,
            style.margin_right,
            node.intrinsic.width,
        );
        let (available_height, min_height) = resolve_axis(
            explicit_height,
            alloc_height,
            style.margin_top,
            style.margin_bottom,
            node.intrinsic.height,
        );

        let (mut min_width, mut width, mut min_height, mut height) = if node.has_children() {
            self.layout_children(
                id,
                available_width,
                available_height,
                use_all_width,
                use_all_height,
                depth,
            )
        } else {
            (min_width, available_width, min_height, available_height)
        };

        // Explicit sizes win over anything the children asked for.
        if let Some(px) = explicit_width {
            width = f64::from(px);
            min_width = width;
        }
        if let Some(px) = explicit_height {
            height = f64::from(px);
            min_height = height;
        }

        let Some(node) = self.tree.get_mut(id) else {
            return;
        };
        node.layout.content_width = to_px(width);
        node.layout.content_height = to_px(height);
        node.layout.min_content_width = to_px(min_width);
        node.layout.min_content_height = to_px(min_height);

        if self.trace {
            tracing::trace!(
                depth,
                node = id.0,
                alloc_width,
                alloc_height,
                use_all_width,
                use_all_height,
                width = node.layout.content_width,
                height = node.layout.content_height,
                min_width = node.layout.min_content_width,
                min_height = node.layout.min_content_height,
                "{:1$}layout node",
                "",
                depth * 4,
            );
        }
    }

    /// Lay out a child given sizes along its parent's main/cross axes.
    fn layout_node_in_direction(
        &mut self,
        id: NodeId,
        direction: Direction,
        alloc_main: f64,
        alloc_cross: f64,
        use_all_main: bool,
        use_all_cross: bool,
        depth: usize,
    ) {
        match direction {
            Direction::Column => {
                self.layout_node(id, alloc_cross, alloc_main, use_all_cross, use_all_main, depth)
            }
            Direction::Row => {
                self.layout_node(id, alloc_main, alloc_cross, use_all_main, use_all_cross, depth)
            }
        }
    }

    /// Distribute a container's space among its children.
    ///
    /// Returns `(min_width, width, min_height, height)` of the container.
    fn layout_children(
        &mut self,
        id: NodeId,
        available_width: f64,
        available_height: f64,
        use_all_width: bool,
        use_all_height: bool,
        depth: usize,
    ) -> (f64, f64, f64, f64) {
        let Some(style) = self.tree.style(id) else {
            return (0.0, 0.0, 0.0, 0.0);
        };
        let direction = style.direction;
        let gap = f64::from(style.gap);
        let justify_content = style.justify_content;
        let align_items = style.align_items;
        let main_axis = Axis::main(direction);
        let explicit_main = main_axis.size(style);

        let (horizontal_start, horizontal_end) = style.text_direction.horizontal_sides();
        let orientation = match direction {
            Direction::Column => Orientation {
                main_axis,
                cross_axis: main_axis.other(),
                main_start: Side::Top,
                main_end: Side::Bottom,
                cross_start: horizontal_start,
                cross_end: horizontal_end,
            },
            Direction::Row => Orientation {
                main_axis,
                cross_axis: main_axis.other(),
                main_start: horizontal_start,
                main_end: horizontal_end,
                cross_start: Side::Top,
                cross_end: Side::Bottom,
            },
        };
        let (available_main, available_cross, use_all_main, use_all_cross) = match direction {
            Direction::Column => (available_height, available_width, use_all_height, use_all_width),
            Direction::Row => (available_width, available_height, use_all_width, use_all_height),
        };

        let children: Vec<ChildInfo> = self
            .tree
            .child_ids(id)
            .into_iter()
            .filter_map(|child| self.child_info(child, &orientation))
            .collect();

        let child_depth = depth + 1;
        let mut flex_total = 0.0;
        let mut min_flex = 0.0;
        let mut main = 0.0;
        let mut min_main = 0.0;
        let mut remaining_main = available_main;

        // Phase 1: size everything that does not depend on leftover space.
        for (i, child) in children.iter().enumerate() {
            let use_all_child_cross = child.direction == direction;
            let (content_main, min_content_main) = if !child.main_size.is_auto() {
                self.layout_node_in_direction(
                    child.id,
                    direction,
                    remaining_main,
                    available_cross,
                    false,
                    use_all_child_cross,
                    child_depth,
                );
                let content = self.content(child.id, orientation.main_axis);
                (content, content)
            } else {
                match child.intrinsic_main {
                    Intrinsic::Measured(value) if child.is_flexible() => {
                        flex_total += child.flex;
                        min_flex += child.margin_main_start + value + child.margin_main_end;
                        (value, value)
                    }
                    Intrinsic::Measured(_) => {
                        self.layout_node_in_direction(
                            child.id,
                            direction,
                            0.0,
                            available_cross,
                            false,
                            use_all_child_cross,
                            child_depth,
                        );
                        let content = self.content(child.id, orientation.main_axis);
                        (content, content)
                    }
                    Intrinsic::Fixed(_) => {
                        self.layout_node_in_direction(
                            child.id,
                            direction,
                            remaining_main,
                            available_cross,
                            false,
                            use_all_child_cross,
                            child_depth,
                        );
                        let content = self.content(child.id, orientation.main_axis);
                        (content, content)
                    }
                    Intrinsic::Absent if child.is_flexible() => {
                        flex_total += child.flex;
                        (0.0, 0.0)
                    }
                    Intrinsic::Absent => {
                        self.layout_node_in_direction(
                            child.id,
                            direction,
                            remaining_main,
                            available_cross,
                            false,
                            use_all_child_cross,
                            child_depth,
                        );
                        (
                            self.content(child.id, orientation.main_axis),
                            self.min_content(child.id, orientation.main_axis),
                        )
                    }
                }
            };

            let gap_before = if i == 0 { 0.0 } else { gap };
            let child_main = child.margin_main_start + content_main + child.margin_main_end;
            main += gap_before + child_main;
            remaining_main -= gap_before + child_main;
            min_main +=
                gap_before + child.margin_main_start + min_content_main + child.margin_main_end;
        }

        // Phase 2: share what is left among the flexible children. A
        // measured child whose share would be smaller than its own size
        // leaves the pool; the quantum is recomputed once, not iterated
        // to a fixed point.
        let quantum = if flex_total > 0.0 {
            let first_quantum = (remaining_main + min_flex) / flex_total;
            for child in children.iter().filter(|c| c.is_deferred()) {
                if let Intrinsic::Measured(value) = child.intrinsic_main {
                    if value > first_quantum * child.flex {
                        flex_total -= child.flex;
                        min_flex -= child.margin_main_start + value + child.margin_main_end;
                    }
                }
            }
            if flex_total > 0.0 {
                (min_flex + remaining_main) / flex_total
            } else {
                0.0
            }
        } else {
            0.0
        };

        for child in children.iter().filter(|c| c.is_deferred()) {
            let use_all_child_cross = child.direction == direction;
            match child.intrinsic_main {
                Intrinsic::Measured(value) => {
                    let footprint = child.margin_main_start + value + child.margin_main_end;
                    let child_alloc_main = footprint.max(quantum * child.flex);
                    self.layout_node_in_direction(
                        child.id,
                        direction,
                        child_alloc_main,
                        available_cross,
                        true,
                        use_all_child_cross,
                        child_depth,
                    );
                    main += self.content(child.id, orientation.main_axis) - value;
                    min_main += self.min_content(child.id, orientation.main_axis) - value;
                }
                Intrinsic::Absent => {
                    let child_alloc_main = if quantum != 0.0 {
                        quantum * child.flex
                    } else {
                        child.main_margins()
                    };
                    self.layout_node_in_direction(
                        child.id,
                        direction,
                        child_alloc_main,
                        available_cross,
                        true,
                        use_all_child_cross,
                        child_depth,
                    );
                    main += self.content(child.id, orientation.main_axis);
                    min_main += self.min_content(child.id, orientation.main_axis);
                }
                Intrinsic::Fixed(_) => {}
            }
        }

        // Main-axis placement.
        let extra = if use_all_main || !explicit_main.is_auto() {
            let extra = (available_main - main).max(0.0);
            main += extra;
            extra
        } else {
            0.0
        };

        let mut offset = match justify_content {
            JustifyContent::Start => 0.0,
            JustifyContent::Center => extra / 2.0,
            JustifyContent::End => extra,
        };

        let mut cross: f64 = 0.0;
        let mut min_cross: f64 = 0.0;
        for child in &children {
            let Some(node) = self.tree.get_mut(child.id) else {
                continue;
            };
            let layout = &mut node.layout;

            if orientation.main_start == Side::Right {
                // Mirrored row: measure from the far (right) edge.
                offset += f64::from(layout.content_width) + child.margin_main_start;
                layout.content_left = to_px(main - offset);
                offset += child.margin_main_end;
            } else {
                offset += child.margin_main_start;
                layout.set_content_start(orientation.main_axis, to_px(offset));
                offset += f64::from(layout.content(orientation.main_axis));
                offset += child.margin_main_end;
            }
            offset += gap;

            let cross_margins = child.margin_cross_start + child.margin_cross_end;
            cross = cross.max(f64::from(layout.content(orientation.cross_axis)) + cross_margins);
            let min_content_cross = f64::from(layout.min_content(orientation.cross_axis));
            min_cross = min_cross.max(min_content_cross + cross_margins);
        }

        // Cross-axis sizing and alignment.
        if use_all_cross {
            cross = cross.max(available_cross);
        }

        // Offsets are always written to the physical left/top. When the
        // logical cross start is the right edge, flip start/end alignment
        // so that START keeps meaning the logical start.
        let effective_align = if orientation.cross_start == Side::Right {
            align_items.map(AlignItems::flipped)
        } else {
            align_items
        };

        for child in &children {
            let Some(node) = self.tree.get_mut(child.id) else {
                continue;
            };
            let layout = &mut node.layout;
            let extra = cross
                - (f64::from(layout.content(orientation.cross_axis))
                    + child.margin_cross_start
                    + child.margin_cross_end);
            let cross_start = match effective_align {
                Some(AlignItems::End) => extra + child.margin_cross_start,
                Some(AlignItems::Center) => (extra / 2.0).trunc() + child.margin_cross_start,
                Some(AlignItems::Start) | None => child.margin_cross_start,
            };
            layout.set_content_start(orientation.cross_axis, to_px(cross_start));
        }

        match direction {
            Direction::Column => (min_cross, cross, min_main, main),
            Direction::Row => (min_main, main, min_cross, cross),
        }
    }

    fn child_info(&self, id: NodeId, orientation: &Orientation) -> Option<ChildInfo> {
        let node = self.tree.get(id)?;
        let style = &node.style;
        Some(ChildInfo {
            id,
            direction: style.direction,
            main_size: orientation.main_axis.size(style),
            flex: style.flex,
            intrinsic_main: orientation.main_axis.intrinsic(&node.intrinsic),
            margin_main_start: f64::from(style.margin(orientation.main_start)),
            margin_main_end: f64::from(style.margin(orientation.main_end)),
            margin_cross_start: f64::from(style.margin(orientation.cross_start)),
            margin_cross_end: f64::from(style.margin(orientation.cross_end)),
        })
    }

    fn content(&self, id: NodeId, axis: Axis) -> f64 {
        self.tree
            .layout(id)
            .map_or(0.0, |layout| f64::from(layout.content(axis)))
    }

    fn min_content(&self, id: NodeId, axis: Axis) -> f64 {
        self.tree
            .layout(id)
            .map_or(0.0, |layout| f64::from(layout.min_content(axis)))
    }
}

/// Resolve one axis of a node into `(available, minimum)`.
fn resolve_axis(
    explicit: Option<u32>,
    alloc: f64,
    margin_before: u32,
    margin_after: u32,
    intrinsic: Intrinsic,
) -> (f64, f64) {
    if let Some(px) = explicit {
        let px = f64::from(px);
        return (px, px);
    }

    let available = (alloc - f64::from(margin_before) - f64::from(margin_after)).max(0.0);
    match intrinsic {
        Intrinsic::Measured(value) => (available.max(value), value),
        Intrinsic::Fixed(value) => (value, value),
        Intrinsic::Absent => (available, 0.0),
    }
}

/// Truncate to whole, non-negative pixels.
fn to_px(value: f64) -> u32 {
    // Float-to-int casts saturate: negatives and NaN become 0.
    value as u32
}
