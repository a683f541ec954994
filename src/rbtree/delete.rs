use log::trace;

use super::node::{Color, NodeId};
use super::{Comparator, RBTree};


impl<T, C: Comparator<T>> RBTree<T, C> {
    /// Removes the value equal to `value` from the tree and destroys it.
    ///
    /// Returns whether such a value was present. A missing value leaves the tree untouched.
    pub fn delete(&mut self, value: &T) -> bool {
        match self.take(value) {
            Some(removed) => {
                self.destroy(removed);
                true
            }
            None => false,
        }
    }

    /// Removes the value equal to `value` from the tree and gives it back, without destroying it.
    pub fn take(&mut self, value: &T) -> Option<T> {
        let id = self.find(self.root, value)?;
        Some(self.remove_node(id))
    }
}

impl<T, C> RBTree<T, C> {
    /// Unlink `id`'s value from the tree, restore the invariants, and free a node.
    ///
    /// The freed node is not necessarily `id`: a node with two children has its value
    /// swapped with its successor, and the successor's node is the one removed.
    pub(super) fn remove_node(&mut self, id: NodeId) -> T {
        let mut target = id;
        if let (Some(_), Some(right)) = (self.node(id).left, self.node(id).right) {
            let successor = self.leftmost(right);
            trace!("{id:?} has two children, removing successor {successor:?} instead");
            self.swap_values(id, successor);
            target = successor;
        }

        // `target` now has at most one child
        let child = self.node(target).left.or(self.node(target).right);

        match self.color(target) {
            Color::Red => {
                // a red node with a single child would break black height, so `child` is `None` here
                self.splice(target, child);
            }
            Color::Black if self.is_red(child) => {
                self.splice(target, child);
                if let Some(child) = child {
                    self.set_color(child, Color::Black);
                }
            }
            Color::Black => {
                // a black node whose only child is black is impossible, so `target` is a leaf
                debug_assert!(child.is_none());
                self.fix_before_delete(target);
                self.splice(target, None);
            }
        }

        self.release(target)
    }

    /// Put `replacement` where `node` is, detaching `node` from its parent.
    fn splice(&mut self, node: NodeId, replacement: Option<NodeId>) {
        let parent = self.parent(node);
        self.replace_child(parent, node, replacement);
        if let Some(replacement) = replacement {
            self.set_parent(replacement, parent);
        }
    }

    /// Make up for the black node `node` that is about to be removed.
    ///
    /// `node` stays linked throughout, and stands in for the black height its subtree is
    /// about to lose. Every case is written relative to `side`, so the mirrored cases
    /// for a right-hand deficiency fall out of the same code.
    fn fix_before_delete(&mut self, mut node: NodeId) {
        loop {
            let Some(parent) = self.parent(node) else {
                trace!("Delete fixup reached the root at {node:?}");
                return
            };

            let side = self.side_of(node);
            // `node`'s side has black height at least one, so the other side can't be empty
            let mut sibling = self.child(parent, side.opposite()).expect("a black node always has a sibling");

            if self.color(sibling) == Color::Red {
                trace!("Red sibling {sibling:?}, rotating it above {parent:?}");
                self.rotate_up(sibling);
                self.set_color(sibling, Color::Black);
                self.set_color(parent, Color::Red);
                // the red sibling's children were black and non-empty, and the near one is the new sibling
                sibling = self.child(parent, side.opposite()).expect("a red node's children have black height at least one");
            }

            let mut far = self.child(sibling, side.opposite());
            let near = self.child(sibling, side);

            if self.is_black(far) && self.is_black(near) {
                self.set_color(sibling, Color::Red);
                if self.color(parent) == Color::Red {
                    trace!("Black nephews, absorbing the deficiency into red {parent:?}");
                    self.set_color(parent, Color::Black);
                    return
                }
                trace!("Black nephews, pushing the deficiency up to {parent:?}");
                node = parent;
                continue
            }

            if self.is_black(far) {
                let near = near.expect("checked that one of the nephews is red");
                trace!("Near nephew {near:?} is red, rotating it above {sibling:?}");
                self.rotate_up(near);
                self.set_color(near, Color::Black);
                self.set_color(sibling, Color::Red);
                far = Some(sibling);
                sibling = near;
            }

            trace!("Far nephew {far:?} is red, rotating {sibling:?} above {parent:?}");
            let parent_color = self.color(parent);
            self.rotate_up(sibling);
            self.set_color(sibling, parent_color);
            self.set_color(parent, Color::Black);
            if let Some(far) = far {
                self.set_color(far, Color::Black);
            }
            return
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    fn tree_of(values: &[i32]) -> RBTree<i32> {
        let mut tree = RBTree::new();
        for &v in values {
            tree.insert(v).unwrap();
        }
        tree
    }

    fn values(tree: &RBTree<i32>) -> Vec<i32> {
        tree.iter().copied().collect()
    }

    #[test]
    fn delete_absent_is_a_no_op() {
        let mut tree = tree_of(&[7, 2, 1, 8, 9, 5, 3, 4, 6, 0]);
        let before = tree.dump().to_string();

        assert!(!tree.delete(&42));
        assert!(!tree.delete(&-1));

        assert_eq!(tree.dump().to_string(), before);
        assert_eq!(tree.len(), 10);
    }

    #[test]
    fn demo_deletion_order() {
        let numbers = [7, 2, 1, 8, 9, 5, 3, 4, 6, 0];
        let mut tree = tree_of(&numbers);
        let mut expected: Vec<i32> = (0..10).collect();

        for i in 5..15 {
            let v = numbers[i % 10];
            assert!(tree.delete(&v), "{v} should have been present");
            expected.retain(|&x| x != v);
            assert_eq!(tree.validate().map(|_| ()), Ok(()), "invalid after deleting {v}");
            assert_eq!(values(&tree), expected);
        }
        assert!(tree.is_empty());
        assert_eq!(tree.root, None);
    }

    #[test]
    fn delete_root_of_single_node_tree() {
        let mut tree = tree_of(&[1]);
        assert!(tree.delete(&1));
        assert!(tree.is_empty());
        assert!(!tree.delete(&1));
    }

    #[test]
    fn delete_every_node_from_every_position() {
        // delete each key from a full tree in turn, covering both sides of every fixup case
        let keys: Vec<i32> = (0..64).collect();
        for victim in &keys {
            let mut tree = tree_of(&keys);
            assert!(tree.delete(victim));
            assert!(tree.validate().is_ok(), "invalid after deleting {victim}");
            assert_eq!(tree.len(), 63);
            assert!(!tree.contains(victim));
        }
    }

    #[test]
    fn ascending_and_descending_teardown() {
        let keys: Vec<i32> = (0..200).collect();

        let mut tree = tree_of(&keys);
        for k in &keys {
            assert!(tree.delete(k));
            assert!(tree.validate().is_ok(), "invalid after deleting {k}");
        }
        assert!(tree.is_empty());

        let mut tree = tree_of(&keys);
        for k in keys.iter().rev() {
            assert!(tree.delete(k));
            assert!(tree.validate().is_ok(), "invalid after deleting {k}");
        }
        assert!(tree.is_empty());
    }

    #[test]
    fn take_returns_value_without_destroying() {
        let destroyed = Rc::new(Cell::new(0));
        let counter = destroyed.clone();
        let mut tree: RBTree<String, _> = RBTree::with_destructor(
            |a: &String, b: &String| a.cmp(b),
            move |_| counter.set(counter.get() + 1),
        );
        for s in ["pear", "apple", "fig"] {
            tree.insert(s.to_string()).unwrap();
        }

        assert_eq!(tree.take(&"apple".to_string()), Some("apple".to_string()));
        assert_eq!(destroyed.get(), 0);

        assert!(tree.delete(&"fig".to_string()));
        assert_eq!(destroyed.get(), 1);

        assert_eq!(tree.take(&"apple".to_string()), None);
        drop(tree);
        assert_eq!(destroyed.get(), 2);
    }

    #[test]
    fn two_child_delete_keeps_successor_value() {
        let mut tree = tree_of(&[4, 2, 6, 1, 3, 5, 7]);
        assert!(tree.delete(&4));
        let root = tree.root.unwrap();
        assert_eq!(tree.node(root).value, 5);
        assert_eq!(values(&tree), [1, 2, 3, 5, 6, 7]);
        assert!(tree.validate().is_ok());
    }
}
