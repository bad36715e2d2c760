//! Initial mediation
//!
//! The entry stage of every escalation: draws a fresh score vector for the
//! query, checks its average against the acceptance threshold, and emits the
//! cognition mode report.

use super::score::ScoreVector;
use super::verdict::Verdict;
use crate::cognition::ModeMap;
use crate::core::error::DomainError;
use crate::core::query::Query;
use crate::entropy::EntropySource;
use serde::{Deserialize, Serialize};

/// Draws per mediation pass
const SAMPLE_COUNT: usize = 3;
/// Sample range for mediated scores
const SAMPLE_LOW: f64 = 0.4;
const SAMPLE_HIGH: f64 = 0.95;

/// Everything a mediation pass produces
#[derive(Debug, Clone)]
pub struct MediationOutcome {
    pub verdict: Verdict,
    pub scores: ScoreVector,
    pub modes: ModeMap,
}

/// Mediates a query into an initial (or re-drawn) score vector
///
/// # Example
///
/// ```
/// use qsa_domain::{ConstantEntropy, Mediator, Query};
///
/// let mediator = Mediator::default();
/// let outcome = mediator
///     .mediate(&Query::new("test"), &ConstantEntropy::new(1.0))
///     .unwrap();
/// assert!(outcome.verdict.consensus);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mediator {
    threshold: f64,
}

impl Mediator {
    /// Default acceptance threshold
    pub const DEFAULT_THRESHOLD: f64 = 0.75;

    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Run one mediation pass for the query
    pub fn mediate(
        &self,
        query: &Query,
        entropy: &dyn EntropySource,
    ) -> Result<MediationOutcome, DomainError> {
        let samples: Vec<f64> = (0..SAMPLE_COUNT)
            .map(|_| entropy.uniform(SAMPLE_LOW, SAMPLE_HIGH))
            .collect();
        let scores = ScoreVector::try_new(samples)?;
        let trueness = scores.average();

        let verdict = if trueness >= self.threshold {
            Verdict::consensus(trueness)
        } else {
            Verdict::escalate(trueness)
        };

        Ok(MediationOutcome {
            verdict,
            scores,
            modes: ModeMap::from_query(query),
        })
    }
}

impl Default for Mediator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD)
    }
}
