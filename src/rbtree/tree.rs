use super::node::{NodeId, NodeStore, NIL};
use super::*;
use crate::Operation;
use log::debug;
use std::fmt;

/// A red-black tree holding a multiset of keys.
///
/// Nodes live in an arena and refer to each other by index, with slot 0 acting
/// as the black sentinel for every leaf. Equal keys are never merged nor
/// rejected: they are routed to the right subtree and counted individually by
/// every traversal.
///
/// Removing keys is not supported.
#[derive(Clone)]
pub struct RBTree<T: Ord> {
    pub(super) nodes: NodeStore<T>,
    pub(super) root: NodeId,
}

impl<T: Ord> RBTree<T> {
    /// Create a new empty tree
    pub fn new() -> Self {
        RBTree::with_capacity(0)
    }

    /// Create a new empty tree with room for `capacity` keys before reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        RBTree {
            nodes: NodeStore::with_capacity(capacity),
            root: NIL,
        }
    }

    /// Insert a new key into the tree.
    /// Keys equal to an existing one are placed in its right subtree
    pub fn insert(&mut self, key: T) {
        // Find the parent of the new node by a plain binary search descent
        let mut parent = NIL;
        let mut side = Side::Left;
        let mut current = self.root;
        while current != NIL {
            parent = current;
            side = if key < *self.nodes.key(current) {
                Side::Left
            } else {
                Side::Right
            };
            current = self.nodes.child(current, side);
        }

        let node = self.nodes.push(key);
        self.nodes.set_parent(node, parent);
        if parent == NIL {
            // First node: a lone black root is always valid
            self.root = node;
            self.nodes.set_color(node, Color::Black);
            debug!("Inserted the root of a new tree");
            return;
        }
        self.nodes.set_child(parent, side, node);

        // A red child of the (black) root breaks nothing
        if self.nodes.parent(parent) != NIL {
            self.fix_insert(node);
        }
        debug!("Inserted node #{}", self.nodes.len());
    }

    /// Return the total number of keys in the tree, counting duplicates
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root == NIL
    }

    /// Return whether at least one key equal to `key` is present
    pub fn contains(&self, key: &T) -> bool {
        let mut current = self.root;
        while current != NIL {
            let current_key = self.nodes.key(current);
            if *key == *current_key {
                return true;
            }
            current = if *key < *current_key {
                self.nodes.left(current)
            } else {
                self.nodes.right(current)
            };
        }
        false
    }

    /// Return the smallest key, if any
    pub fn min(&self) -> Option<&T> {
        self.extreme(Side::Left)
    }

    /// Return the largest key, if any
    pub fn max(&self) -> Option<&T> {
        self.extreme(Side::Right)
    }

    /// Number of nodes on the longest path from the root to a leaf.
    /// An empty tree has height 0
    pub fn height(&self) -> usize {
        let mut max_height = 0;
        let mut pending = vec![(self.root, 0)];
        while let Some((node, depth)) = pending.pop() {
            if node == NIL {
                max_height = max_height.max(depth);
            } else {
                pending.push((self.nodes.left(node), depth + 1));
                pending.push((self.nodes.right(node), depth + 1));
            }
        }
        max_height
    }

    /// Number of black nodes on the path from the root to any leaf,
    /// excluding the sentinel. Every path has the same count
    pub fn black_height(&self) -> usize {
        let mut black_height = 0;
        let mut node = self.root;
        while node != NIL {
            if !self.nodes.is_red(node) {
                black_height += 1;
            }
            node = self.nodes.left(node);
        }
        black_height
    }

    /// Return a sorted iterator over references to keys in the tree
    pub fn iter(&self) -> TreeIter<T> {
        TreeIter::new(self)
    }

    /// Fold `reduce` over every key in ascending order, starting from `identity`.
    /// An empty tree returns `identity`
    pub fn fold<B, F>(&self, identity: B, reduce: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        self.iter().fold(identity, reduce)
    }

    /// Run an aggregation operation over every key in ascending order
    pub fn aggregate<O>(&self) -> O::Output
    where
        T: Clone,
        O: Operation<Item = T>,
    {
        let mut state = O::create();
        for key in self.iter() {
            state.update(key.clone());
        }
        state.finish()
    }

    /// Sum every key.
    /// Overflow behaves as the key type's own addition does: to sum into a wider
    /// type, use `fold` with a wider accumulator
    pub fn sum<'a, S>(&'a self) -> S
    where
        S: std::iter::Sum<&'a T>,
    {
        self.iter().sum()
    }

    fn extreme(&self, side: Side) -> Option<&T> {
        if self.root == NIL {
            return None;
        }
        let mut node = self.root;
        loop {
            let child = self.nodes.child(node, side);
            if child == NIL {
                return Some(self.nodes.key(node));
            }
            node = child;
        }
    }
}

impl<T: Ord> Default for RBTree<T> {
    fn default() -> Self {
        RBTree::new()
    }
}

impl<T: Ord + fmt::Debug> fmt::Debug for RBTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Ord> std::iter::FromIterator<T> for RBTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut tree = RBTree::with_capacity(iter.size_hint().0);
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for RBTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, T: Ord> IntoIterator for &'a RBTree<T> {
    type Item = &'a T;
    type IntoIter = TreeIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
