//! Stage trait and evaluation context

use super::score::ScoreVector;
use super::verdict::Verdict;
use crate::cognition::ModeMap;
use crate::core::error::DomainError;
use crate::core::query::Query;
use crate::entropy::EntropySource;

/// Read-only view of the escalation state handed to a stage
#[derive(Debug)]
pub struct StageContext<'a> {
    /// The query under escalation
    pub query: &'a Query,
    /// Current score vector
    pub scores: &'a ScoreVector,
    /// Trueness reported by the previous stage
    pub trueness: f64,
    /// Depth counter at the time this stage runs
    pub depth: usize,
}

/// What a stage produced: a verdict, plus optional state replacements
///
/// Most stages only re-score; mediating stages also replace the score
/// vector and the cognition mode report.
#[derive(Debug, Clone)]
pub struct StageOutcome {
    pub verdict: Verdict,
    /// Replacement score vector, if the stage resampled
    pub scores: Option<ScoreVector>,
    /// Replacement mode report, if the stage re-mediated
    pub modes: Option<ModeMap>,
}

impl StageOutcome {
    /// Outcome that only re-scores, leaving scores and modes untouched
    pub fn of(verdict: Verdict) -> Self {
        Self {
            verdict,
            scores: None,
            modes: None,
        }
    }

    pub fn with_scores(mut self, scores: ScoreVector) -> Self {
        self.scores = Some(scores);
        self
    }

    pub fn with_modes(mut self, modes: ModeMap) -> Self {
        self.modes = Some(modes);
        self
    }
}

/// One rung of the escalation ladder
///
/// Stages are pure apart from drawing on the entropy source: same context
/// plus same draws always yields the same outcome.
pub trait Stage: Send + Sync {
    /// Stable display name, used in traces and reports
    fn name(&self) -> &'static str;

    /// Evaluate the stage against the current escalation state
    fn evaluate(
        &self,
        ctx: &StageContext<'_>,
        entropy: &dyn EntropySource,
    ) -> Result<StageOutcome, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentinel::disposition::Disposition;

    #[test]
    fn test_outcome_of_keeps_state() {
        let outcome = StageOutcome::of(Verdict::escalate(0.5));
        assert!(outcome.scores.is_none());
        assert!(outcome.modes.is_none());
    }

    #[test]
    fn test_outcome_with_scores() {
        let scores = ScoreVector::try_new(vec![0.1, 0.2]).unwrap();
        let outcome = StageOutcome::of(Verdict::consensus(0.9)).with_scores(scores.clone());
        assert_eq!(outcome.scores, Some(scores));
    }

    #[test]
    fn test_outcome_carries_disposition() {
        let outcome =
            StageOutcome::of(Verdict::consensus(1.0).with_disposition(Disposition::Monitor));
        assert_eq!(outcome.verdict.disposition, Some(Disposition::Monitor));
    }
}
