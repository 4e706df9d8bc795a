//! A red-black tree multiset whose keys can be folded in ascending order.
//!
//! ```
//! use rb_fold::rbtree::RBTree;
//! use rb_fold::sum::SumOperation;
//!
//! let mut tree = RBTree::new();
//! for key in vec![10, 20, 30, 15, 25] {
//!     tree.insert(key);
//! }
//!
//! assert_eq!(tree.aggregate::<SumOperation<i32>>(), 100);
//! assert_eq!(tree.iter().cloned().collect::<Vec<_>>(), vec![10, 15, 20, 25, 30]);
//! ```

#[cfg(test)]
mod tests;

pub mod rbtree;

pub mod collect;
pub mod count;
pub mod extrema;
pub mod mean;
pub mod sum;

#[cfg(any(test, feature = "key-generator"))]
pub mod key_generator;

/// A reduction over a sequence of items.
/// `create` returns the identity state, which `finish` must accept as is
pub trait Operation {
    type Item;
    type Output;

    fn create() -> Self;

    fn update(&mut self, value: Self::Item);

    /// Combine the partial result of another state, that saw items ordered
    /// after the ones seen by `self`
    fn merge_with(&mut self, other: Self);

    fn finish(self) -> Self::Output;
}
