use std::fmt;

/// Errors that can come out of mutating an [`RBTree`](super::RBTree).
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RBTreeError {
    /// The node arena could not grow to fit another node.
    OutOfMemory,
}

impl fmt::Display for RBTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RBTreeError::OutOfMemory => f.write_str("unable to allocate memory for a tree node"),
        }
    }
}

impl std::error::Error for RBTreeError {}


/// A broken red-black or structural invariant, as reported by [`RBTree::validate`](super::RBTree::validate).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Two in-order neighbours do not compare as strictly increasing.
    Unordered,
    /// The root node is red.
    RedRoot,
    /// A red node has a red child.
    RedRed,
    /// Two paths down from the same node pass through different numbers of black nodes.
    BlackHeightMismatch,
    /// A child's parent link does not point back at the node that owns it.
    BrokenParentLink,
    /// Some nodes in the arena can't be reached from the root.
    UnreachableNodes { reachable: usize, allocated: usize },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantViolation::Unordered => f.write_str("values are not in strictly ascending order"),
            InvariantViolation::RedRoot => f.write_str("the root is red"),
            InvariantViolation::RedRed => f.write_str("a red node has a red child"),
            InvariantViolation::BlackHeightMismatch => f.write_str("black height differs between paths"),
            InvariantViolation::BrokenParentLink => f.write_str("parent link does not match child link"),
            InvariantViolation::UnreachableNodes { reachable, allocated } => {
                write!(f, "only {reachable} of {allocated} nodes are reachable from the root")
            }
        }
    }
}

impl std::error::Error for InvariantViolation {}
