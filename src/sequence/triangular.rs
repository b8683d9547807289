//! Triangular number producer.

/// Infinite producer of triangular numbers `k(k+1)/2` for k = 1, 2, 3, ...
///
/// Values are `u128`, so every index up to `u64::MAX` is exact.
#[derive(Debug, Clone)]
pub struct Triangular {
    k: u64,
}

impl Triangular {
    pub fn new() -> Self {
        Self { k: 1 }
    }
}

impl Default for Triangular {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Triangular {
    type Item = u128;

    fn next(&mut self) -> Option<u128> {
        let k = u128::from(self.k);
        self.k += 1;
        // k <= u64::MAX, so k * (k + 1) < 2^128.
        Some(k * (k + 1) / 2)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
