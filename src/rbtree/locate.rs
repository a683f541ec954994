use std::cmp::Ordering;

use super::node::{NodeId, Side};
use super::{Comparator, RBTree};


impl<T, C: Comparator<T>> RBTree<T, C> {
    /// Walk down from `from`, following the comparator, to the node holding a value equal to `value`.
    pub(super) fn find(&self, from: Option<NodeId>, value: &T) -> Option<NodeId> {
        let mut pos = from;
        while let Some(id) = pos {
            pos = match self.cmp.compare(value, &self.node(id).value) {
                Ordering::Less => self.node(id).left,
                Ordering::Greater => self.node(id).right,
                Ordering::Equal => return Some(id),
            };
        }
        None
    }
}

impl<T, C> RBTree<T, C> {
    /// Follow children on `side` until there are none left.
    fn outermost(&self, mut id: NodeId, side: Side) -> NodeId {
        while let Some(child) = self.child(id, side) {
            id = child;
        }
        id
    }

    /// The minimum of the subtree rooted at `id`.
    pub(super) fn leftmost(&self, id: NodeId) -> NodeId {
        self.outermost(id, Side::Left)
    }

    /// The maximum of the subtree rooted at `id`.
    pub(super) fn rightmost(&self, id: NodeId) -> NodeId {
        self.outermost(id, Side::Right)
    }

    /// The node holding the smallest value in the tree.
    pub(super) fn head(&self) -> Option<NodeId> {
        self.root.map(|root| self.leftmost(root))
    }

    /// The node holding the largest value in the tree.
    pub(super) fn tail(&self) -> Option<NodeId> {
        self.root.map(|root| self.rightmost(root))
    }

    /// The in-order neighbour of `id` in direction `side` (`Right` for successor, `Left` for predecessor).
    fn neighbour(&self, mut id: NodeId, side: Side) -> Option<NodeId> {
        if let Some(child) = self.child(id, side) {
            return Some(self.outermost(child, side.opposite()))
        }

        // climb until we step up out of the subtree on the opposite side
        while let Some(parent) = self.parent(id) {
            if self.child(parent, side) != Some(id) {
                return Some(parent)
            }
            id = parent;
        }
        None
    }

    pub(super) fn successor(&self, id: NodeId) -> Option<NodeId> {
        self.neighbour(id, Side::Right)
    }

    pub(super) fn predecessor(&self, id: NodeId) -> Option<NodeId> {
        self.neighbour(id, Side::Left)
    }
}
