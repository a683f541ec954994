//! Node storage for [`RBTree`].
//!
//! All nodes of a tree live in one `Vec`, and links between them are indices into it.
//! A removed node's slot is filled by `swap_remove`, so the arena never has holes.

use log::{debug, warn};

use super::{RBTree, RBTreeError};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(pub(super) usize);

/// The color tag of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub(super) fn as_str(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Black => "black",
        }
    }
}

/// Which child of its parent a node is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Side {
    Left,
    Right,
}

impl Side {
    pub(super) fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

pub(super) struct Node<T> {
    pub(super) parent: Option<NodeId>,
    pub(super) left: Option<NodeId>,
    pub(super) right: Option<NodeId>,
    pub(super) color: Color,
    pub(super) value: T,
}

impl<T> Node<T> {
    pub(super) fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    fn child_mut(&mut self, side: Side) -> &mut Option<NodeId> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

// Link accessors
impl<T, C> RBTree<T, C> {
    pub(super) fn node(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.0]
    }

    pub(super) fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        &mut self.nodes[id.0]
    }

    pub(super) fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub(super) fn child(&self, id: NodeId, side: Side) -> Option<NodeId> {
        self.node(id).child(side)
    }

    pub(super) fn set_child(&mut self, id: NodeId, side: Side, child: Option<NodeId>) {
        *self.node_mut(id).child_mut(side) = child;
    }

    pub(super) fn set_parent(&mut self, id: NodeId, parent: Option<NodeId>) {
        self.node_mut(id).parent = parent;
    }

    pub(super) fn color(&self, id: NodeId) -> Color {
        self.node(id).color
    }

    pub(super) fn set_color(&mut self, id: NodeId, color: Color) {
        self.node_mut(id).color = color;
    }

    /// Absent children count as black.
    pub(super) fn is_red(&self, id: Option<NodeId>) -> bool {
        id.is_some_and(|id| self.color(id) == Color::Red)
    }

    pub(super) fn is_black(&self, id: Option<NodeId>) -> bool {
        !self.is_red(id)
    }

    /// Which side of its parent `id` hangs off.
    ///
    /// Must only be called on a node that has a parent.
    pub(super) fn side_of(&self, id: NodeId) -> Side {
        let parent = self.parent(id).expect("only non-root nodes have a side");
        if self.node(parent).left == Some(id) { Side::Left } else { Side::Right }
    }

    /// Point whatever referenced `old` (its parent's child slot, or the root) at `new` instead.
    ///
    /// `parent` must be `old`'s parent. `new`'s own parent link is left untouched.
    pub(super) fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        match parent {
            None => self.root = new,
            Some(p) => {
                let node = self.node_mut(p);
                if node.left == Some(old) {
                    node.left = new;
                } else {
                    debug_assert_eq!(node.right, Some(old));
                    node.right = new;
                }
            }
        }
    }

    pub(super) fn swap_values(&mut self, a: NodeId, b: NodeId) {
        debug_assert_ne!(a, b);
        let (lo, hi) = if a.0 < b.0 { (a.0, b.0) } else { (b.0, a.0) };
        let (head, tail) = self.nodes.split_at_mut(hi);
        std::mem::swap(&mut head[lo].value, &mut tail[0].value);
    }
}

// Allocation
impl<T, C> RBTree<T, C> {
    /// Allocate a new red, childless node. The caller is responsible for linking it in.
    pub(super) fn allocate(&mut self, value: T, parent: Option<NodeId>) -> Result<NodeId, (RBTreeError, T)> {
        if self.nodes.try_reserve(1).is_err() {
            warn!("Unable to grow the node arena past {} nodes", self.nodes.len());
            return Err((RBTreeError::OutOfMemory, value))
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            parent,
            left: None,
            right: None,
            color: Color::Red,
            value,
        });
        debug!("Allocated node {id:?} (parent {parent:?})");
        Ok(id)
    }

    /// Free a node that has already been unlinked from the tree, returning its value.
    ///
    /// The last node in the arena is moved into the freed slot, and the links pointing
    /// at it are patched to the new index.
    pub(super) fn release(&mut self, id: NodeId) -> T {
        let last = NodeId(self.nodes.len() - 1);
        let node = self.nodes.swap_remove(id.0);

        if last != id {
            let moved = self.node(id);
            let (parent, left, right) = (moved.parent, moved.left, moved.right);
            self.replace_child(parent, last, Some(id));
            for child in [left, right].into_iter().flatten() {
                self.set_parent(child, Some(id));
            }
        }

        debug!("Released node {id:?} ({} nodes left)", self.nodes.len());
        node.value
    }
}
