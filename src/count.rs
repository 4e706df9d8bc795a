use crate::Operation;
use std::marker::PhantomData;

/// Number of items, duplicates included
pub struct CountOperation<T> {
    count: usize,
    item: PhantomData<T>,
}

impl<T> Operation for CountOperation<T> {
    type Item = T;
    type Output = usize;

    fn create() -> Self {
        CountOperation {
            count: 0,
            item: PhantomData,
        }
    }

    fn update(&mut self, _value: Self::Item) {
        self.count += 1;
    }

    fn merge_with(&mut self, other: Self) {
        self.count += other.count;
    }

    fn finish(self) -> Self::Output {
        self.count
    }
}
