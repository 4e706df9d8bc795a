use crate::Operation;

/// Smallest item, or `None` if nothing was seen.
/// Among equal items the first one is kept
pub struct MinOperation<T> {
    min: Option<T>,
}

/// Largest item, or `None` if nothing was seen.
/// Among equal items the last one is kept
pub struct MaxOperation<T> {
    max: Option<T>,
}

impl<T: Ord> Operation for MinOperation<T> {
    type Item = T;
    type Output = Option<T>;

    fn create() -> Self {
        MinOperation { min: None }
    }

    fn update(&mut self, value: Self::Item) {
        let replace = match &self.min {
            Some(min) => value < *min,
            None => true,
        };
        if replace {
            self.min = Some(value);
        }
    }

    fn merge_with(&mut self, other: Self) {
        if let Some(value) = other.min {
            self.update(value);
        }
    }

    fn finish(self) -> Self::Output {
        self.min
    }
}

impl<T: Ord> Operation for MaxOperation<T> {
    type Item = T;
    type Output = Option<T>;

    fn create() -> Self {
        MaxOperation { max: None }
    }

    fn update(&mut self, value: Self::Item) {
        let replace = match &self.max {
            Some(max) => value >= *max,
            None => true,
        };
        if replace {
            self.max = Some(value);
        }
    }

    fn merge_with(&mut self, other: Self) {
        if let Some(value) = other.max {
            self.update(value);
        }
    }

    fn finish(self) -> Self::Output {
        self.max
    }
}
