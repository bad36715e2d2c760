//! OS-seeded entropy source

use qsa_domain::EntropySource;
use rand::Rng;

/// Entropy source backed by the thread-local OS-seeded generator
///
/// The default source for interactive runs: every escalation draws a fresh,
/// non-reproducible sample stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn unit(&self) -> f64 {
        rand::thread_rng().r#gen()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_stays_in_range() {
        let entropy = OsEntropy;
        for _ in 0..100 {
            let sample = entropy.unit();
            assert!((0.0..1.0).contains(&sample));
        }
    }

    #[test]
    fn test_uniform_stays_in_range() {
        let entropy = OsEntropy;
        for _ in 0..100 {
            let sample = entropy.uniform(0.4, 0.95);
            assert!((0.4..0.95).contains(&sample));
        }
    }
}
