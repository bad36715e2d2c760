//! Score vector value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// An ordered, non-empty sequence of confidence samples
///
/// The non-empty invariant is enforced at construction so every average in
/// the pipeline is a safe division. Samples are nominally in [0, 1] but the
/// vector does not enforce a range; stages that perturb scores may push
/// values outside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreVector {
    values: Vec<f64>,
}

impl ScoreVector {
    /// Create a score vector, rejecting empty input
    pub fn try_new(values: Vec<f64>) -> Result<Self, DomainError> {
        if values.is_empty() {
            return Err(DomainError::EmptyScores);
        }
        Ok(Self { values })
    }

    /// The individual samples
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        // Unreachable by construction, kept for slice-like completeness
        self.values.is_empty()
    }

    /// Arithmetic mean of the samples
    pub fn average(&self) -> f64 {
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new_rejects_empty() {
        assert_eq!(ScoreVector::try_new(vec![]), Err(DomainError::EmptyScores));
    }

    #[test]
    fn test_try_new_accepts_samples() {
        let scores = ScoreVector::try_new(vec![0.4, 0.6]).unwrap();
        assert_eq!(scores.len(), 2);
        assert_eq!(scores.values(), &[0.4, 0.6]);
    }

    #[test]
    fn test_average() {
        let scores = ScoreVector::try_new(vec![0.2, 0.4, 0.6]).unwrap();
        assert!((scores.average() - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_average_single_sample() {
        let scores = ScoreVector::try_new(vec![0.9]).unwrap();
        assert!((scores.average() - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_out_of_range_samples_are_kept() {
        // The vector does not clamp; range discipline belongs to the stages
        let scores = ScoreVector::try_new(vec![1.3, -0.2]).unwrap();
        assert_eq!(scores.values(), &[1.3, -0.2]);
    }
}
