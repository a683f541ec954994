use std::fmt::{self, Display};

use super::RBTree;
use super::node::NodeId;


/// Prints every node of a tree on its own line, in ascending order.
///
/// Each line reads `node <value> (<color>)`, followed by `parent <value>` (or `root`),
/// then `left` and `right` with the child's value, or `nil` when the child is absent.
///
/// Created by [`RBTree::dump`].
pub struct Dump<'a, T, C> {
    tree: &'a RBTree<T, C>,
}

impl<'a, T, C> Dump<'a, T, C> {
    pub(super) fn new(tree: &'a RBTree<T, C>) -> Self {
        Self { tree }
    }
}

struct Link<'a, T>(Option<&'a T>);

impl<T: Display> Display for Link<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str("nil"),
        }
    }
}

impl<T: Display, C> Display for Dump<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tree = self.tree;
        let value_of = move |id: Option<NodeId>| Link(id.map(|id| &tree.node(id).value));

        let mut pos = tree.head();
        while let Some(id) = pos {
            let node = tree.node(id);
            write!(f, "node {} ({})", node.value, node.color.as_str())?;
            match node.parent {
                Some(_) => write!(f, " parent {}", value_of(node.parent))?,
                None => f.write_str(" root")?,
            }
            writeln!(f, " left {} right {}", value_of(node.left), value_of(node.right))?;
            pos = tree.successor(id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_dump() {
        let tree = RBTree::<i32>::new();
        assert_eq!(tree.dump().to_string(), "");
    }

    #[test]
    fn dump_lines() {
        let mut tree = RBTree::new();
        for i in [2, 1, 3, 4] {
            tree.insert(i).unwrap();
        }
        // inserting 4 recolors 1 and 3 black through the red uncle case
        let expected = "\
node 1 (black) parent 2 left nil right nil
node 2 (black) root left 1 right 3
node 3 (black) parent 2 left nil right 4
node 4 (red) parent 3 left nil right nil
";
        assert_eq!(tree.dump().to_string(), expected);
    }
}
