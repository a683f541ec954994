#![deny(unsafe_op_in_unsafe_fn)]

// not concurrent
pub mod rbtree;

pub mod logging;

pub use rbtree::{Color, Comparator, Destructor, Dump, InvariantViolation, Iter, NaturalOrder, RBTree, RBTreeError};
