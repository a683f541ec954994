use std::iter::FusedIterator;

use super::RBTree;
use super::node::NodeId;


/// An in-order iterator over the values of an [`RBTree`].
///
/// Created by [`RBTree::iter`]. Holding it borrows the tree, so the tree can't change
/// underneath it.
pub struct Iter<'a, T, C> {
    tree: &'a RBTree<T, C>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
}

impl<'a, T, C> Iter<'a, T, C> {
    pub(super) fn new(tree: &'a RBTree<T, C>) -> Self {
        Self {
            tree,
            front: tree.head(),
            back: tree.tail(),
            remaining: tree.len(),
        }
    }
}

impl<'a, T, C> Iterator for Iter<'a, T, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 { return None }
        let id = self.front?;
        self.remaining -= 1;
        self.front = self.tree.successor(id);
        Some(&self.tree.node(id).value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, C> DoubleEndedIterator for Iter<'_, T, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 { return None }
        let id = self.back?;
        self.remaining -= 1;
        self.back = self.tree.predecessor(id);
        Some(&self.tree.node(id).value)
    }
}

impl<T, C> ExactSizeIterator for Iter<'_, T, C> {}
impl<T, C> FusedIterator for Iter<'_, T, C> {}

impl<T, C> Clone for Iter<'_, T, C> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, T, C> IntoIterator for &'a RBTree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
