//! Seeded, reproducible entropy source

use qsa_domain::EntropySource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Entropy source with a fixed seed
///
/// Two runs with the same seed draw identical sample streams, which makes
/// the full depth-by-depth escalation trace reproducible.
#[derive(Debug)]
pub struct SeededEntropy {
    rng: Mutex<StdRng>,
}

impl SeededEntropy {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl EntropySource for SeededEntropy {
    fn unit(&self) -> f64 {
        self.rng.lock().unwrap().r#gen()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let first = SeededEntropy::from_seed(42);
        let second = SeededEntropy::from_seed(42);

        for _ in 0..32 {
            assert_eq!(first.unit(), second.unit());
        }
    }

    #[test]
    fn test_unit_stays_in_range() {
        let entropy = SeededEntropy::from_seed(7);
        for _ in 0..100 {
            let sample = entropy.unit();
            assert!((0.0..1.0).contains(&sample));
        }
    }

    #[test]
    fn test_stream_advances() {
        let entropy = SeededEntropy::from_seed(42);
        let samples: Vec<f64> = (0..8).map(|_| entropy.unit()).collect();
        // A fixed seed still yields a varying stream
        assert!(samples.windows(2).any(|pair| pair[0] != pair[1]));
    }
}
