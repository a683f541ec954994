use std::cmp::Ordering;

use super::node::{Color, NodeId};
use super::{Comparator, InvariantViolation, RBTree};


impl<T, C: Comparator<T>> RBTree<T, C> {
    /// Checks every red-black and structural invariant of the tree.
    ///
    /// On success, returns the number of black nodes on each path from the root down to
    /// an absent child (0 for an empty tree).
    ///
    /// Complexity: O(n)
    pub fn validate(&self) -> Result<usize, InvariantViolation> {
        let allocated = self.nodes.len();
        let Some(root) = self.root else {
            return match allocated {
                0 => Ok(0),
                _ => Err(InvariantViolation::UnreachableNodes { reachable: 0, allocated }),
            }
        };

        if self.parent(root).is_some() {
            return Err(InvariantViolation::BrokenParentLink)
        }
        if self.color(root) == Color::Red {
            return Err(InvariantViolation::RedRoot)
        }

        // NOTE: parent links are checked before descending, which also rules out cycles
        let mut reachable = 0;
        let black_height = self.check_subtree(root, &mut reachable)?;
        if reachable != allocated {
            return Err(InvariantViolation::UnreachableNodes { reachable, allocated })
        }

        let mut pos = self.head();
        while let Some(id) = pos {
            pos = self.successor(id);
            if let Some(next) = pos {
                if self.cmp.compare(&self.node(id).value, &self.node(next).value) != Ordering::Less {
                    return Err(InvariantViolation::Unordered)
                }
            }
        }

        Ok(black_height)
    }

    fn check_subtree(&self, id: NodeId, reachable: &mut usize) -> Result<usize, InvariantViolation> {
        *reachable += 1;
        let node = self.node(id);

        let mut heights = [0; 2];
        for (height, child) in heights.iter_mut().zip([node.left, node.right]) {
            let Some(child) = child else { continue };
            if self.parent(child) != Some(id) {
                return Err(InvariantViolation::BrokenParentLink)
            }
            if node.color == Color::Red && self.color(child) == Color::Red {
                return Err(InvariantViolation::RedRed)
            }
            *height = self.check_subtree(child, reachable)?;
        }

        if heights[0] != heights[1] {
            return Err(InvariantViolation::BlackHeightMismatch)
        }
        Ok(heights[0] + usize::from(node.color == Color::Black))
    }
}

#[cfg(test)]
impl<T, C> RBTree<T, C> {
    /// The number of nodes on the longest path from the root down.
    pub(super) fn height(&self) -> usize {
        fn go<T, C>(tree: &RBTree<T, C>, id: Option<NodeId>) -> usize {
            match id {
                None => 0,
                Some(id) => {
                    let node = tree.node(id);
                    1 + go(tree, node.left).max(go(tree, node.right))
                }
            }
        }
        go(self, self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rbtree::node::Side;

    fn tree_of(values: &[i32]) -> RBTree<i32> {
        let mut tree = RBTree::new();
        for &v in values {
            tree.insert(v).unwrap();
        }
        tree
    }

    fn children(tree: &RBTree<i32>) -> (NodeId, NodeId, NodeId) {
        let root = tree.root.unwrap();
        (root, tree.child(root, Side::Left).unwrap(), tree.child(root, Side::Right).unwrap())
    }

    #[test]
    fn valid_trees() {
        assert_eq!(RBTree::<i32>::new().validate(), Ok(0));
        assert_eq!(tree_of(&[1, 2, 3]).validate(), Ok(1));
        assert_eq!(tree_of(&[2, 1, 3, 4]).validate(), Ok(2));
    }

    #[test]
    fn red_root() {
        let mut tree = tree_of(&[1, 2, 3]);
        let (root, _, _) = children(&tree);
        tree.set_color(root, Color::Red);
        assert_eq!(tree.validate(), Err(InvariantViolation::RedRoot));
    }

    #[test]
    fn black_height_mismatch() {
        let mut tree = tree_of(&[1, 2, 3]);
        let (_, left, _) = children(&tree);
        tree.set_color(left, Color::Black);
        assert_eq!(tree.validate(), Err(InvariantViolation::BlackHeightMismatch));
    }

    #[test]
    fn red_red() {
        let mut tree = tree_of(&[2, 1, 3, 4]);
        let (_, _, right) = children(&tree);
        tree.set_color(right, Color::Red);
        assert_eq!(tree.validate(), Err(InvariantViolation::RedRed));
    }

    #[test]
    fn unordered() {
        let mut tree = tree_of(&[1, 2, 3]);
        let (_, left, right) = children(&tree);
        tree.swap_values(left, right);
        assert_eq!(tree.validate(), Err(InvariantViolation::Unordered));
    }

    #[test]
    fn broken_parent_link() {
        let mut tree = tree_of(&[1, 2, 3]);
        let (_, left, right) = children(&tree);
        tree.set_parent(right, Some(left));
        assert_eq!(tree.validate(), Err(InvariantViolation::BrokenParentLink));
    }

    #[test]
    fn unreachable_nodes() {
        let mut tree = tree_of(&[1, 2, 3]);
        let (root, _, _) = children(&tree);
        tree.set_child(root, Side::Right, None);
        assert_eq!(tree.validate(), Err(InvariantViolation::UnreachableNodes { reachable: 2, allocated: 3 }));
    }
}
