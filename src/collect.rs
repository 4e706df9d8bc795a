use crate::Operation;

/// All items, in the order they were seen.
/// Fed by a tree traversal, this is the sorted sequence of keys
pub struct CollectOperation<T> {
    items: Vec<T>,
}

impl<T> Operation for CollectOperation<T> {
    type Item = T;
    type Output = Vec<T>;

    fn create() -> Self {
        CollectOperation { items: Vec::new() }
    }

    fn update(&mut self, value: Self::Item) {
        self.items.push(value);
    }

    fn merge_with(&mut self, other: Self) {
        self.items.extend(other.items);
    }

    fn finish(self) -> Self::Output {
        self.items
    }
}
