use log::trace;

use super::RBTree;
use super::node::{NodeId, Side};


impl<T, C> RBTree<T, C> {
    /// Promote `pivot`, the child on `side` of its parent, into its parent's position.
    ///
    /// The old parent becomes `pivot`'s child on the opposite side, and `pivot`'s inner
    /// child is handed to the old parent in the slot `pivot` vacated.
    /// Only links change; values and colors are left for the caller to deal with.
    fn rotate(&mut self, pivot: NodeId, side: Side) {
        let parent = self.parent(pivot).expect("can't rotate the root");
        let grandparent = self.parent(parent);
        let inner = self.child(pivot, side.opposite());

        trace!("Rotating {pivot:?} above {parent:?} ({side:?} child)");

        self.set_child(parent, side, inner);
        if let Some(inner) = inner {
            self.set_parent(inner, Some(parent));
        }

        self.replace_child(grandparent, parent, Some(pivot));
        self.set_parent(pivot, grandparent);

        self.set_child(pivot, side.opposite(), Some(parent));
        self.set_parent(parent, Some(pivot));
    }

    /// Rotate a right child `pivot` above its parent.
    pub(super) fn rotate_left(&mut self, pivot: NodeId) {
        debug_assert_eq!(self.side_of(pivot), Side::Right);
        self.rotate(pivot, Side::Right);
    }

    /// Rotate a left child `pivot` above its parent.
    pub(super) fn rotate_right(&mut self, pivot: NodeId) {
        debug_assert_eq!(self.side_of(pivot), Side::Left);
        self.rotate(pivot, Side::Left);
    }

    /// Rotate `pivot` above its parent, whichever side of it `pivot` is on.
    pub(super) fn rotate_up(&mut self, pivot: NodeId) {
        match self.side_of(pivot) {
            Side::Left => self.rotate_right(pivot),
            Side::Right => self.rotate_left(pivot),
        }
    }
}
