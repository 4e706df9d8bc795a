use super::node::NodeId;
use super::*;
use log::trace;

impl<T: Ord> RBTree<T> {
    /// Restore the red-black properties after `node` was inserted as a red leaf
    /// below a node that has a parent.
    ///
    /// The only property that can be broken is "no red node has a red child",
    /// between `node` and its parent. Each round either pushes the violation two
    /// levels up (red uncle) or removes it with at most two rotations (black uncle)
    pub(super) fn fix_insert(&mut self, mut node: NodeId) {
        while self.nodes.is_red(self.nodes.parent(node)) {
            let parent = self.nodes.parent(node);
            // A red node is never the root, so the grandparent exists
            let grandparent = self.nodes.parent(parent);
            let parent_side = self.nodes.side_of(parent);
            let uncle = self.nodes.child(grandparent, parent_side.opposite());

            if self.nodes.is_red(uncle) {
                // Red uncle: move the blackness down from the grandparent and
                // continue from there
                trace!("Red uncle below {:?}: recoloring", grandparent);
                self.nodes.set_color(parent, Color::Black);
                self.nodes.set_color(uncle, Color::Black);
                self.nodes.set_color(grandparent, Color::Red);
                node = grandparent;
            } else {
                if self.nodes.side_of(node) != parent_side {
                    // Inner grandchild: straighten the path so that it becomes
                    // an outer one
                    trace!("Inner grandchild {:?}: rotating its parent", node);
                    node = parent;
                    self.rotate(node, parent_side);
                }

                // Outer grandchild
                trace!("Outer grandchild {:?}: rotating its grandparent", node);
                let parent = self.nodes.parent(node);
                let grandparent = self.nodes.parent(parent);
                self.nodes.set_color(parent, Color::Black);
                self.nodes.set_color(grandparent, Color::Red);
                self.rotate(grandparent, parent_side.opposite());
            }

            if node == self.root {
                break;
            }
        }

        let root = self.root;
        self.nodes.set_color(root, Color::Black);
    }
}
