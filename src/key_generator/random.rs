use ordered_float::NotNan;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg64;
use std::iter::{ExactSizeIterator, FusedIterator};

/// An iterator that will generate `num` random integer keys in `[low, high)`.
/// Small ranges produce plenty of duplicates.
/// The same seed always produces the same sequence
pub struct RandomKeys {
    low: i64,
    high: i64,
    remaining: usize,
    rng: Pcg64,
}

impl RandomKeys {
    pub fn new(low: i64, high: i64, num: usize, seed: u64) -> RandomKeys {
        assert!(low < high, "Empty key range [{}, {})", low, high);
        RandomKeys {
            low,
            high,
            remaining: num,
            rng: Pcg64::seed_from_u64(seed),
        }
    }
}

impl Iterator for RandomKeys {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.rng.gen_range(self.low, self.high))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl FusedIterator for RandomKeys {}

impl ExactSizeIterator for RandomKeys {}

/// An iterator that will generate `num` random float keys in `[0, scale)`.
/// Floats are only totally ordered without NaN, so every value is checked
/// before being handed out
pub struct RandomFloatKeys {
    scale: f64,
    remaining: usize,
    rng: Pcg64,
}

impl RandomFloatKeys {
    pub fn new(scale: f64, num: usize, seed: u64) -> RandomFloatKeys {
        assert!(scale >= 0., "The scale must be a non-negative number");
        RandomFloatKeys {
            scale,
            remaining: num,
            rng: Pcg64::seed_from_u64(seed),
        }
    }

    fn next_random(&mut self) -> f64 {
        self.rng.gen::<f64>() * self.scale
    }
}

impl Iterator for RandomFloatKeys {
    type Item = NotNan<f64>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        // With an infinite scale, a zero draw gives NaN and must be discarded
        loop {
            if let Ok(key) = NotNan::new(self.next_random()) {
                return Some(key);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl FusedIterator for RandomFloatKeys {}

impl ExactSizeIterator for RandomFloatKeys {}
