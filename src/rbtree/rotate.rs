use super::node::{NodeId, NIL};
use super::*;
use log::trace;

impl<T: Ord> RBTree<T> {
    /// Promote the right child of `node` into its place.
    /// Panics if `node` has no right child
    pub(super) fn rotate_left(&mut self, node: NodeId) {
        self.promote_child(node, Side::Right);
    }

    /// Promote the left child of `node` into its place.
    /// Panics if `node` has no left child
    pub(super) fn rotate_right(&mut self, node: NodeId) {
        self.promote_child(node, Side::Left);
    }

    /// Rotate the subtree at `node` towards `direction`
    pub(super) fn rotate(&mut self, node: NodeId, direction: Side) {
        match direction {
            Side::Left => self.rotate_left(node),
            Side::Right => self.rotate_right(node),
        }
    }

    /// The child of `node` on `side` takes its place, and `node` becomes the
    /// pivot's child on the other side. The in-order sequence of keys is unchanged
    ///
    /// ```text
    ///       node                  pivot
    ///      /    \   (left)       /     \
    ///     a    pivot   -->    node      c
    ///         /     \        /    \
    ///        b       c      a      b
    /// ```
    fn promote_child(&mut self, node: NodeId, side: Side) {
        let pivot = self.nodes.child(node, side);
        assert_ne!(pivot, NIL, "Cannot rotate towards an empty subtree");
        trace!("Promoting the {:?} child of {:?}", side, node);

        // The inner subtree of the pivot changes hands
        let moved = self.nodes.child(pivot, side.opposite());
        self.nodes.set_child(node, side, moved);
        if moved != NIL {
            self.nodes.set_parent(moved, node);
        }

        // The pivot takes the place of `node` below the grandparent
        let grandparent = self.nodes.parent(node);
        self.nodes.set_parent(pivot, grandparent);
        if grandparent == NIL {
            self.root = pivot;
        } else {
            let node_side = self.nodes.side_of(node);
            self.nodes.set_child(grandparent, node_side, pivot);
        }

        self.nodes.set_child(pivot, side.opposite(), node);
        self.nodes.set_parent(node, pivot);
    }
}
