use crate::Operation;
use std::ops::Add;

/// Sum of the items, starting from `T::default()`.
/// Overflow follows `T`'s addition, so sum into a wider type when the total
/// may not fit in `T`
pub struct SumOperation<T> {
    sum: T,
}

impl<T: Add<Output = T> + Default> Operation for SumOperation<T> {
    type Item = T;
    type Output = T;

    fn create() -> Self {
        SumOperation { sum: T::default() }
    }

    fn update(&mut self, value: Self::Item) {
        let sum = std::mem::take(&mut self.sum);
        self.sum = sum + value;
    }

    fn merge_with(&mut self, other: Self) {
        self.update(other.sum);
    }

    fn finish(self) -> Self::Output {
        self.sum
    }
}
