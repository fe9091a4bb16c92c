//! Layout Tree
//!
//! Arena of styled nodes. Each node carries its resolved style, the
//! intrinsic size reported by its content, and the layout result written
//! by the most recent pass. Parent and sibling links are plain ids, so
//! climbing to an ancestor never implies ownership.

use pack_style::Style;

use crate::{IntrinsicSize, LayoutResult};

/// Layout tree - arena of styled nodes
#[derive(Debug, Default)]
pub struct LayoutTree {
    nodes: Vec<LayoutNode>,
    root: Option<usize>,
}

impl LayoutTree {
    pub fn new() -> Self {
        Self {
            nodes: Vec::with_capacity(64),
            root: None,
        }
    }

    /// Create a new detached node and return its id
    pub fn create_node(&mut self, style: Style, intrinsic: IntrinsicSize) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(LayoutNode {
            style,
            intrinsic,
            layout: LayoutResult::default(),
            parent: None,
            first_child: None,
            last_child: None,
            next_sibling: None,
            prev_sibling: None,
        });
        id
    }

    /// Create a node and append it to `parent`
    pub fn create_child(
        &mut self,
        parent: NodeId,
        style: Style,
        intrinsic: IntrinsicSize,
    ) -> NodeId {
        let id = self.create_node(style, intrinsic);
        self.append_child(parent, id);
        id
    }

    pub fn set_root(&mut self, id: NodeId) {
        self.root = Some(id.0);
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root.map(NodeId)
    }

    pub fn get(&self, id: NodeId) -> Option<&LayoutNode> {
        self.nodes.get(id.0)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut LayoutNode> {
        self.nodes.get_mut(id.0)
    }

    /// Append a child node to a parent
    ///
    /// A child that is already linked is moved: it is unlinked from its
    /// current parent first. Appending a node under itself or under one of
    /// its own descendants is ignored.
    pub fn append_child(&mut self, parent_id: NodeId, child_id: NodeId) {
        let missing = self.get(parent_id).is_none() || self.get(child_id).is_none();
        if missing || parent_id == child_id {
            return;
        }
        if self.ancestors(parent_id).any(|(id, _)| id == child_id) {
            return;
        }

        self.detach(child_id);

        let last_child = self.nodes.get(parent_id.0).and_then(|p| p.last_child);

        if let Some(child) = self.nodes.get_mut(child_id.0) {
            child.parent = Some(parent_id);
            child.prev_sibling = last_child;
        }

        if let Some(last_id) = last_child {
            if let Some(last) = self.nodes.get_mut(last_id.0) {
                last.next_sibling = Some(child_id);
            }
        } else if let Some(parent) = self.nodes.get_mut(parent_id.0) {
            parent.first_child = Some(child_id);
        }

        if let Some(parent) = self.nodes.get_mut(parent_id.0) {
            parent.last_child = Some(child_id);
        }
    }

    /// Unlink a node from its parent's child list
    pub fn detach(&mut self, id: NodeId) {
        let Some(node) = self.nodes.get_mut(id.0) else {
            return;
        };
        let parent = node.parent.take();
        let prev = node.prev_sibling.take();
        let next = node.next_sibling.take();

        match prev.and_then(|prev| self.nodes.get_mut(prev.0)) {
            Some(prev) => prev.next_sibling = next,
            None => {
                if let Some(p) = parent.and_then(|p| self.nodes.get_mut(p.0)) {
                    p.first_child = next;
                }
            }
        }
        match next.and_then(|next| self.nodes.get_mut(next.0)) {
            Some(next) => next.prev_sibling = prev,
            None => {
                if let Some(p) = parent.and_then(|p| self.nodes.get_mut(p.0)) {
                    p.last_child = prev;
                }
            }
        }
    }

    /// Iterate over children of a node, in layout order
    pub fn children(&self, parent_id: NodeId) -> ChildIterator<'_> {
        let first = self.get(parent_id).and_then(|n| n.first_child);
        ChildIterator { tree: self, current: first }
    }

    /// Snapshot of child ids, for walks that mutate the tree
    pub fn child_ids(&self, parent_id: NodeId) -> Vec<NodeId> {
        self.children(parent_id).map(|(id, _)| id).collect()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Iterate from the parent of `id` up to the root
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors { tree: self, current: self.parent(id) }
    }

    pub fn style(&self, id: NodeId) -> Option<&Style> {
        self.get(id).map(|n| &n.style)
    }

    pub fn layout(&self, id: NodeId) -> Option<&LayoutResult> {
        self.get(id).map(|n| &n.layout)
    }

    /// Content position relative to the root's parent, i.e. the sum of
    /// the node's own offset and the offsets of all its ancestors
    pub fn absolute_content_position(&self, id: NodeId) -> Option<(u32, u32)> {
        let node = self.get(id)?;
        let (mut left, mut top) = (node.layout.content_left, node.layout.content_top);
        for (_, ancestor) in self.ancestors(id) {
            left += ancestor.layout.content_left;
            top += ancestor.layout.content_top;
        }
        Some((left, top))
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Node identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// A styled node in the layout tree
#[derive(Debug)]
pub struct LayoutNode {
    pub style: Style,
    /// Natural content size, as reported by the widget
    pub intrinsic: IntrinsicSize,
    /// Output of the most recent layout pass
    pub layout: LayoutResult,
    pub parent: Option<NodeId>,
    pub first_child: Option<NodeId>,
    pub last_child: Option<NodeId>,
    pub next_sibling: Option<NodeId>,
    pub prev_sibling: Option<NodeId>,
}

impl LayoutNode {
    pub fn has_children(&self) -> bool {
        self.first_child.is_some()
    }
}

/// Iterator over children of a node
pub struct ChildIterator<'a> {
    tree: &'a LayoutTree,
    current: Option<NodeId>,
}

impl<'a> Iterator for ChildIterator<'a> {
    type Item = (NodeId, &'a LayoutNode);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.tree.get(id)?;
        self.current = node.next_sibling;
        Some((id, node))
    }
}

/// Iterator over the ancestors of a node, nearest first
pub struct Ancestors<'a> {
    tree: &'a LayoutTree,
    current: Option<NodeId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = (NodeId, &'a LayoutNode);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.tree.get(id)?;
        self.current = node.parent;
        Some((id, node))
    }
}
