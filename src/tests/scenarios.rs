use super::init_logging;
use crate::rbtree::RBTree;
use crate::sum::SumOperation;
use ordered_float::NotNan;

#[test]
fn five_keys() {
    init_logging();
    let mut tree = RBTree::new();
    for key in vec![10, 20, 30, 15, 25] {
        tree.insert(key);
    }
    assert_eq!(tree.sum::<i32>(), 100);
    assert_eq!(tree.aggregate::<SumOperation<i32>>(), 100);
    assert_eq!(
        tree.iter().cloned().collect::<Vec<_>>(),
        vec![10, 15, 20, 25, 30]
    );
}

#[test]
fn seven_ascending_keys() {
    init_logging();
    let mut tree = RBTree::new();
    for key in 1..=7 {
        tree.insert(key);
        assert!(tree.validate().is_ok(), "after inserting {}", key);
    }
    // At most 3 edges below the root
    assert!(tree.height() <= 4);
    assert_eq!(tree.black_height(), 2);
    assert_eq!(tree.iter().cloned().collect::<Vec<_>>(), (1..=7).collect::<Vec<_>>());
}

#[test]
fn three_duplicates() {
    init_logging();
    let tree: RBTree<i32> = vec![5, 5, 5].into_iter().collect();
    assert_eq!(tree.len(), 3);
    assert_eq!(tree.iter().cloned().collect::<Vec<_>>(), vec![5, 5, 5]);
    assert_eq!(tree.sum::<i32>(), 15);
}

#[test]
fn single_key() {
    init_logging();
    let mut tree = RBTree::new();
    tree.insert(-8);
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.height(), 1);
    assert_eq!(tree.validate(), Ok(1));
    assert_eq!(tree.sum::<i32>(), -8);
}

#[test]
fn min_with_infinite_identity() {
    init_logging();
    let infinity = NotNan::new(std::f64::INFINITY).unwrap();
    let min = |tree: &RBTree<NotNan<f64>>| tree.fold(infinity, |acc, &k| acc.min(k));

    let mut tree = RBTree::new();
    assert_eq!(min(&tree), infinity);

    let key = NotNan::new(3.25).unwrap();
    tree.insert(key);
    assert_eq!(min(&tree), key);
}

#[test]
fn nan_is_rejected_before_insertion() {
    assert!(NotNan::new(std::f64::NAN).is_err());
}
