use super::node::{NodeId, NIL};
use super::*;
use std::fmt;

/// A broken red-black tree property, as reported by `RBTree::validate`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// The sentinel lost its black color
    RedSentinel,
    /// The root is red
    RedRoot,
    /// A red node at this depth has a red child
    RedChildOfRed { depth: usize },
    /// Two subtrees of the node at this depth have different black heights
    UnbalancedBlackHeight {
        depth: usize,
        left: usize,
        right: usize,
    },
    /// A key at this depth is outside of the range allowed by its ancestors
    OutOfOrder { depth: usize },
    /// A child at this depth does not point back to its parent
    BrokenParentLink { depth: usize },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::RedSentinel => write!(f, "the sentinel is red"),
            Violation::RedRoot => write!(f, "the root is red"),
            Violation::RedChildOfRed { depth } => {
                write!(f, "red node at depth {} has a red parent", depth)
            }
            Violation::UnbalancedBlackHeight { depth, left, right } => write!(
                f,
                "node at depth {} has black heights {} (left) and {} (right)",
                depth, left, right
            ),
            Violation::OutOfOrder { depth } => write!(f, "key at depth {} is out of order", depth),
            Violation::BrokenParentLink { depth } => {
                write!(f, "node at depth {} has a wrong parent link", depth)
            }
        }
    }
}

impl std::error::Error for Violation {}

impl<T: Ord> RBTree<T> {
    /// Check every red-black and search tree property, returning the black
    /// height of the tree (black nodes from the root to any leaf, sentinel excluded)
    pub fn validate(&self) -> Result<usize, Violation> {
        if self.nodes.is_red(NIL) {
            return Err(Violation::RedSentinel);
        }
        if self.nodes.is_red(self.root) {
            return Err(Violation::RedRoot);
        }
        if self.root != NIL && self.nodes.parent(self.root) != NIL {
            return Err(Violation::BrokenParentLink { depth: 0 });
        }
        self.validate_subtree(self.root, 0, None, None)
    }

    /// Validate the subtree at `node`, whose keys must be in `[lower, upper]`.
    /// Return its black height
    fn validate_subtree(
        &self,
        node: NodeId,
        depth: usize,
        lower: Option<&T>,
        upper: Option<&T>,
    ) -> Result<usize, Violation> {
        if node == NIL {
            return Ok(0);
        }

        // Equal keys are inserted to the right, but rotations can later move
        // them to the left of each other: both bounds are inclusive
        let key = self.nodes.key(node);
        if lower.map_or(false, |lower| key < lower) || upper.map_or(false, |upper| key > upper) {
            return Err(Violation::OutOfOrder { depth });
        }

        let left = self.nodes.left(node);
        let right = self.nodes.right(node);
        for &child in &[left, right] {
            if child == NIL {
                continue;
            }
            if self.nodes.parent(child) != node {
                return Err(Violation::BrokenParentLink { depth: depth + 1 });
            }
            if self.nodes.is_red(node) && self.nodes.is_red(child) {
                return Err(Violation::RedChildOfRed { depth: depth + 1 });
            }
        }

        let left_height = self.validate_subtree(left, depth + 1, lower, Some(key))?;
        let right_height = self.validate_subtree(right, depth + 1, Some(key), upper)?;
        if left_height != right_height {
            return Err(Violation::UnbalancedBlackHeight {
                depth,
                left: left_height,
                right: right_height,
            });
        }

        Ok(left_height + if self.nodes.is_red(node) { 0 } else { 1 })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn valid_trees() {
        assert_eq!(RBTree::<i32>::new().validate(), Ok(0));
        assert_eq!(vec![1].into_iter().collect::<RBTree<_>>().validate(), Ok(1));
        assert_eq!((0..7).collect::<RBTree<_>>().validate(), Ok(2));
    }

    #[test]
    fn rotated_duplicates() {
        // The second 7 becomes the root, with the first one on its left
        let tree: RBTree<i32> = vec![7, 7, 7].into_iter().collect();
        assert_eq!(*tree.nodes.key(tree.nodes.left(tree.root)), 7);
        assert_eq!(tree.validate(), Ok(1));

        let tree: RBTree<i32> = vec![1, 3, 7, 0, 8, 5, 8, 9].into_iter().collect();
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn out_of_order() {
        // 1 -> (0, 3 -> (2, 4)), with both subtrees of the root swapped
        let mut tree: RBTree<i32> = (0..5).collect();
        let root = tree.root;
        let left = tree.nodes.left(root);
        let right = tree.nodes.right(root);
        tree.nodes.set_child(root, Side::Left, right);
        tree.nodes.set_child(root, Side::Right, left);
        assert_eq!(tree.validate(), Err(Violation::OutOfOrder { depth: 1 }));
    }

    #[test]
    fn red_root() {
        let mut tree: RBTree<i32> = (0..7).collect();
        let root = tree.root;
        tree.nodes.set_color(root, Color::Red);
        assert_eq!(tree.validate(), Err(Violation::RedRoot));
    }

    #[test]
    fn red_child_of_red() {
        // 1 -> (0, 3 -> (2, 4)), with 2 and 4 red
        let mut tree: RBTree<i32> = (0..5).collect();
        let right = tree.nodes.right(tree.root);
        assert!(!tree.nodes.is_red(right));
        tree.nodes.set_color(right, Color::Red);
        assert_eq!(tree.validate(), Err(Violation::RedChildOfRed { depth: 2 }));
    }

    #[test]
    fn unbalanced_black_height() {
        let mut tree: RBTree<i32> = (0..5).collect();
        let left = tree.nodes.left(tree.root);
        tree.nodes.set_color(left, Color::Red);
        assert_eq!(
            tree.validate(),
            Err(Violation::UnbalancedBlackHeight {
                depth: 0,
                left: 0,
                right: 1
            })
        );
    }

    #[test]
    fn rotation_breaks_colors_not_order() {
        let mut tree: RBTree<i32> = (0..5).collect();
        let root = tree.root;
        tree.rotate_right(root);
        let err = tree.validate().unwrap_err();
        assert_ne!(err, Violation::OutOfOrder { depth: 0 });
        assert_eq!(tree.iter().cloned().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn broken_parent_link() {
        let mut tree: RBTree<i32> = (0..5).collect();
        let root = tree.root;
        let left = tree.nodes.left(root);
        let right = tree.nodes.right(root);
        tree.nodes.set_parent(left, right);
        assert_eq!(
            tree.validate(),
            Err(Violation::BrokenParentLink { depth: 1 })
        );
    }

    #[test]
    fn display() {
        assert_eq!(Violation::RedRoot.to_string(), "the root is red");
        assert_eq!(
            Violation::UnbalancedBlackHeight {
                depth: 3,
                left: 1,
                right: 2
            }
            .to_string(),
            "node at depth 3 has black heights 1 (left) and 2 (right)"
        );
    }
}
