//! Thread-safe random number generation adapter.
//!
//! Implements `RandomPort` using `rand::thread_rng()`.

use rand::Rng;

use crate::ports::outbound::RandomPort;

/// Production random number generator using thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngAdapter;

impl ThreadRngAdapter {
    /// Create a new ThreadRngAdapter.
    pub fn new() -> Self {
        Self
    }
}

impl RandomPort for ThreadRngAdapter {
    fn gen_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gen_index_bounds() {
        let rng = ThreadRngAdapter::new();
        for len in 1..=5 {
            for _ in 0..100 {
                let value = rng.gen_index(len);
                assert!(value < len, "Value {} out of range for len {}", value, len);
            }
        }
    }

    #[test]
    fn test_gen_index_reaches_every_slot() {
        let rng = ThreadRngAdapter::new();
        let mut seen = [false; 5];
        for _ in 0..1_000 {
            seen[rng.gen_index(5)] = true;
        }
        assert!(seen.iter().all(|s| *s), "not all indices drawn: {:?}", seen);
    }
}
