//! An ordered set backed by a red-black tree.
//!
//! Nodes live in an index-addressed arena owned by the tree, so parent links are plain
//! indices rather than raw back-pointers. The ordering is supplied by a [`Comparator`],
//! and values leaving the tree can optionally be handed to a destructor callback
//! instead of simply being dropped.

// PROVE: any node with height `h` has black height at least `h/2`
// PROVE: the subtree located at any node `x` contains at least `2^bh(x) - 1` nodes (use induction)
// LEMMA: An RBTree with `n` internal nodes has height at most `2*log₂(n+1)`

use std::fmt::{self, Debug};

use log::debug;

mod compare;
mod delete;
mod error;
mod insert;
mod iter;
mod locate;
mod node;
mod print;
mod rotate;
mod validate;

pub use compare::{Comparator, NaturalOrder};
pub use error::{InvariantViolation, RBTreeError};
pub use iter::Iter;
pub use node::Color;
pub use print::Dump;

use node::Node;


/// Called with each value as it leaves the tree for good.
pub type Destructor<T> = Box<dyn FnMut(T)>;

/// An ordered set of `T`, ordered by `C`.
///
/// Values that compare equal are treated as the same key: inserting one replaces the other.
pub struct RBTree<T, C = NaturalOrder> {
    nodes: Vec<Node<T>>,
    root: Option<node::NodeId>,
    cmp: C,
    destructor: Option<Destructor<T>>,
}

impl<T: Ord> RBTree<T, NaturalOrder> {
    /// Creates an empty tree ordered by `T`'s [`Ord`] implementation.
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T: Ord> Default for RBTree<T, NaturalOrder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Comparator<T>> RBTree<T, C> {
    /// Creates an empty tree ordered by `cmp`.
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            cmp,
            destructor: None,
        }
    }

    /// Creates an empty tree ordered by `cmp`, which calls `destructor` on every value it
    /// gets rid of (replaced, deleted, or disposed), exactly once per value.
    pub fn with_destructor(cmp: C, destructor: impl FnMut(T) + 'static) -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            cmp,
            destructor: Some(Box::new(destructor)),
        }
    }

    /// Whether the tree holds a value equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.find(self.root, value).is_some()
    }

    /// The stored value equal to `value`, if any.
    pub fn get(&self, value: &T) -> Option<&T> {
        self.find(self.root, value).map(|id| &self.node(id).value)
    }
}

impl<T, C> RBTree<T, C> {
    /// The amount of values in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Reserves room for at least `additional` more values without reallocating.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), RBTreeError> {
        self.nodes.try_reserve(additional).map_err(|_| RBTreeError::OutOfMemory)
    }

    /// The smallest value in the tree.
    pub fn first(&self) -> Option<&T> {
        self.head().map(|id| &self.node(id).value)
    }

    /// The largest value in the tree.
    pub fn last(&self) -> Option<&T> {
        self.tail().map(|id| &self.node(id).value)
    }

    /// Iterates over the values in ascending order.
    pub fn iter(&self) -> Iter<'_, T, C> {
        Iter::new(self)
    }

    /// A [`Display`](std::fmt::Display)able listing of every node, with its color and links.
    pub fn dump(&self) -> Dump<'_, T, C> {
        Dump::new(self)
    }

    /// Destroys every value and frees every node, leaving an empty tree that can be reused.
    pub fn dispose(&mut self) {
        if self.nodes.is_empty() { return }

        debug!("Disposing of {} nodes", self.nodes.len());
        self.root = None;
        let nodes = std::mem::take(&mut self.nodes);
        for node in nodes {
            self.destroy(node.value);
        }
    }

    /// Get rid of a value that is leaving the tree.
    fn destroy(&mut self, value: T) {
        match &mut self.destructor {
            Some(destructor) => destructor(value),
            None => drop(value),
        }
    }
}

impl<T, C> Drop for RBTree<T, C> {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl<T: Debug, C> Debug for RBTree<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
