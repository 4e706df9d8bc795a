use std::iter::{ExactSizeIterator, FusedIterator};

/// An iterator that will generate the keys `0, 1, ..., num - 1`,
/// in ascending or descending order
pub struct SequentialKeys {
    position: usize,
    num: usize,
    order: SequentialOrder,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SequentialOrder {
    Ascending,
    Descending,
}

impl SequentialKeys {
    pub fn new(num: usize, order: SequentialOrder) -> SequentialKeys {
        SequentialKeys {
            position: 0,
            num,
            order,
        }
    }
}

impl Iterator for SequentialKeys {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position == self.num {
            None
        } else {
            let r = match self.order {
                SequentialOrder::Ascending => self.position,
                SequentialOrder::Descending => self.num - 1 - self.position,
            };
            self.position += 1;
            Some(r as i64)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.num - self.position;
        (size, Some(size))
    }
}

impl FusedIterator for SequentialKeys {}

impl ExactSizeIterator for SequentialKeys {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn orders() {
        let keys: Vec<i64> = SequentialKeys::new(5, SequentialOrder::Ascending).collect();
        assert_eq!(keys, vec![0, 1, 2, 3, 4]);
        let keys: Vec<i64> = SequentialKeys::new(5, SequentialOrder::Descending).collect();
        assert_eq!(keys, vec![4, 3, 2, 1, 0]);
    }
}
