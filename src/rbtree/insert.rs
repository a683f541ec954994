use std::cmp::Ordering;

use log::trace;

use super::node::{Color, NodeId, Side};
use super::{Comparator, RBTree, RBTreeError};


impl<T, C: Comparator<T>> RBTree<T, C> {
    /// Inserts `value` into the tree.
    ///
    /// If the tree already holds a value that compares equal, that value is destroyed and
    /// `value` takes its place; the shape of the tree doesn't change.
    ///
    /// If a new node is needed and there is no memory for it, `value` is handed back
    /// alongside the error and the tree is left as it was.
    pub fn insert(&mut self, value: T) -> Result<(), (RBTreeError, T)> {
        let mut parent = None;
        let mut side = Side::Left;
        let mut pos = self.root;

        while let Some(id) = pos {
            side = match self.cmp.compare(&value, &self.node(id).value) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => {
                    trace!("Replacing value of {id:?}");
                    let old = std::mem::replace(&mut self.node_mut(id).value, value);
                    self.destroy(old);
                    return Ok(())
                }
            };
            parent = Some(id);
            pos = self.child(id, side);
        }

        let id = self.allocate(value, parent)?;
        match parent {
            None => self.root = Some(id),
            Some(parent) => self.set_child(parent, side, Some(id)),
        }

        self.fix_after_insert(id);
        Ok(())
    }
}

impl<T, C> RBTree<T, C> {
    /// Restore the red-black invariants after `node` was linked in as a red leaf.
    fn fix_after_insert(&mut self, mut node: NodeId) {
        loop {
            let Some(parent) = self.parent(node) else {
                trace!("Insert fixup reached the root at {node:?}");
                self.set_color(node, Color::Black);
                return
            };

            if self.color(parent) == Color::Black {
                return
            }

            // the parent is red, so it isn't the root
            let grandparent = self.parent(parent).expect("a red node always has a parent");
            let parent_side = self.side_of(parent);
            let uncle = self.child(grandparent, parent_side.opposite());

            if let Some(uncle) = uncle.filter(|&u| self.color(u) == Color::Red) {
                trace!("Red uncle {uncle:?}, pushing red up to {grandparent:?}");
                self.set_color(uncle, Color::Black);
                self.set_color(parent, Color::Black);
                self.set_color(grandparent, Color::Red);
                node = grandparent;
                continue
            }

            // black uncle: first make sure `node` is on the outside of `grandparent`'s subtree
            let top = if self.side_of(node) != parent_side {
                trace!("Inner grandchild {node:?}, rotating it above {parent:?}");
                self.rotate_up(node);
                node
            } else {
                parent
            };

            trace!("Black uncle, rotating {top:?} above {grandparent:?}");
            self.rotate_up(top);
            self.set_color(top, Color::Black);
            self.set_color(grandparent, Color::Red);
            return
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn first_insert_is_black_root() {
        let mut tree = RBTree::new();
        tree.insert(1).unwrap();
        let root = tree.root.unwrap();
        assert_eq!(tree.color(root), Color::Black);
        assert_eq!(tree.validate(), Ok(1));
    }

    #[test]
    fn ascending_inserts_stay_balanced() {
        let mut tree = RBTree::new();
        for i in 0..1024 {
            tree.insert(i).unwrap();
            assert!(tree.validate().is_ok(), "invalid after inserting {i}");
        }
        assert_eq!(tree.len(), 1024);

        // a red-black tree with n nodes has height at most 2*log2(n+1)
        let height = tree.height();
        assert!(height <= 2 * 11, "height {height} is too large");
    }

    #[test]
    fn zig_zag_insert() {
        // 3 <- 1 -> 2 is the inner grandchild case
        let mut tree = RBTree::new();
        for i in [3, 1, 2] {
            tree.insert(i).unwrap();
        }
        let root = tree.root.unwrap();
        assert_eq!(tree.node(root).value, 2);
        assert_eq!(tree.color(root), Color::Black);
        for side in [Side::Left, Side::Right] {
            let child = tree.child(root, side).unwrap();
            assert_eq!(tree.color(child), Color::Red);
        }
        assert_eq!(tree.validate(), Ok(1));
    }

    #[test]
    fn replacement_destroys_old_value_once() {
        let destroyed = Rc::new(Cell::new(0));
        let counter = destroyed.clone();
        let mut tree: RBTree<(i32, char), _> = RBTree::with_destructor(
            |a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0),
            move |_| counter.set(counter.get() + 1),
        );

        tree.insert((1, 'a')).unwrap();
        tree.insert((2, 'b')).unwrap();
        tree.insert((1, 'c')).unwrap();

        assert_eq!(destroyed.get(), 1);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.get(&(1, ' ')), Some(&(1, 'c')));
    }

    #[test]
    fn demo_sequence_round_trip() {
        let mut tree = RBTree::new();
        for i in [7, 2, 1, 8, 9, 5, 3, 4, 6, 0] {
            tree.insert(i).unwrap();
            assert!(tree.validate().is_ok());
        }
        assert!(tree.iter().copied().eq(0..10));
    }
}
