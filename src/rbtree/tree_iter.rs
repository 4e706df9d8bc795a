use super::node::{NodeId, NodeStore, NIL};
use super::{RBTree, MAX_HEIGHT};
use arrayvec::ArrayVec;

/// In-order iterator over the keys of a `RBTree`.
/// Keys equal to each other are all returned, in insertion order
pub struct TreeIter<'a, T: Ord> {
    nodes: &'a NodeStore<T>,
    /// Ancestors whose key and right subtree are still to be visited.
    /// The top of the stack is the next key to return
    pending: ArrayVec<[NodeId; MAX_HEIGHT]>,
    len: usize,
}

impl<'a, T: Ord> TreeIter<'a, T> {
    pub(super) fn new(tree: &'a RBTree<T>) -> Self {
        let mut iter = TreeIter {
            nodes: &tree.nodes,
            pending: ArrayVec::new(),
            len: tree.len(),
        };
        iter.push_left_spine(tree.root);
        iter
    }

    /// Stack `node` and all its left descendants
    fn push_left_spine(&mut self, mut node: NodeId) {
        while node != NIL {
            self.pending.push(node);
            node = self.nodes.left(node);
        }
    }
}

impl<'a, T: Ord> Iterator for TreeIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        let node = self.pending.pop()?;
        self.push_left_spine(nodes.right(node));
        self.len -= 1;
        Some(nodes.key(node))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T: Ord> ExactSizeIterator for TreeIter<'a, T> {}
impl<'a, T: Ord> std::iter::FusedIterator for TreeIter<'a, T> {}
