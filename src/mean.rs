use crate::Operation;
use std::marker::PhantomData;

/// Arithmetic mean of the items, as a `f64`. Empty input gives NaN
pub struct MeanOperation<T> {
    count: usize,
    sum: f64,
    item: PhantomData<T>,
}

impl<T: Into<f64>> Operation for MeanOperation<T> {
    type Item = T;
    type Output = f64;

    fn create() -> Self {
        MeanOperation {
            count: 0,
            sum: 0.,
            item: PhantomData,
        }
    }

    fn update(&mut self, value: Self::Item) {
        self.count += 1;
        self.sum += value.into();
    }

    fn merge_with(&mut self, other: Self) {
        self.count += other.count;
        self.sum += other.sum;
    }

    fn finish(self) -> Self::Output {
        self.sum / (self.count as f64)
    }
}
