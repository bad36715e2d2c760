//! The escalation ladder stages
//!
//! Seven stages, run in order by the escalation loop once initial mediation
//! fails to reach consensus. Each is a small piece of arithmetic over the
//! current scores plus entropy; none of them holds state.

use super::mediation::Mediator;
use super::stage::{Stage, StageContext, StageOutcome};
use super::verdict::Verdict;
use crate::core::error::DomainError;
use crate::entropy::EntropySource;
use crate::sentinel::disposition::Disposition;

/// Noise range shared by the perturbation and synchronization stages
const NOISE_LOW: f64 = -0.1;
const NOISE_HIGH: f64 = 0.1;

/// Lowers the acceptance threshold and mediates the query again
///
/// The new threshold is `max(0.5, trueness * 0.9)`, so a near-miss first
/// pass gets a slightly easier second draw. This is the only ladder stage
/// that replaces the score vector and the mode report.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThresholdAdaptation;

impl ThresholdAdaptation {
    const FLOOR: f64 = 0.5;
    const DECAY: f64 = 0.9;

    /// Threshold for the re-mediation pass
    pub fn adapt(trueness: f64) -> f64 {
        (trueness * Self::DECAY).max(Self::FLOOR)
    }
}

impl Stage for ThresholdAdaptation {
    fn name(&self) -> &'static str {
        "threshold adaptation"
    }

    fn evaluate(
        &self,
        ctx: &StageContext<'_>,
        entropy: &dyn EntropySource,
    ) -> Result<StageOutcome, DomainError> {
        let mediator = Mediator::new(Self::adapt(ctx.trueness));
        let outcome = mediator.mediate(ctx.query, entropy)?;
        Ok(StageOutcome::of(outcome.verdict)
            .with_scores(outcome.scores)
            .with_modes(outcome.modes))
    }
}

/// Perturbs every score with independent noise and re-averages
///
/// Consensus when the perturbed average reaches 0.65. The perturbed votes
/// are discarded after averaging; the score vector is left as it was.
#[derive(Debug, Clone, Copy, Default)]
pub struct PerturbationVote;

impl PerturbationVote {
    const CONSENSUS_FLOOR: f64 = 0.65;
}

impl Stage for PerturbationVote {
    fn name(&self) -> &'static str {
        "perturbation vote"
    }

    fn evaluate(
        &self,
        ctx: &StageContext<'_>,
        entropy: &dyn EntropySource,
    ) -> Result<StageOutcome, DomainError> {
        let votes: Vec<f64> = ctx
            .scores
            .values()
            .iter()
            .map(|score| score + entropy.uniform(NOISE_LOW, NOISE_HIGH))
            .collect();
        let trueness = votes.iter().sum::<f64>() / votes.len() as f64;

        let verdict = if trueness >= Self::CONSENSUS_FLOOR {
            Verdict::consensus(trueness)
        } else {
            Verdict::escalate(trueness)
        };
        Ok(StageOutcome::of(verdict))
    }
}

/// Averages the scores, applies one damped noise sample, and clamps
///
/// The only stage that clamps its output into [0, 1]. Consensus when the
/// clamped value reaches 0.75.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoisySynchronization;

impl NoisySynchronization {
    const CONSENSUS_FLOOR: f64 = 0.75;
    const NOISE_DAMPING: f64 = 0.9;
}

impl Stage for NoisySynchronization {
    fn name(&self) -> &'static str {
        "noisy synchronization"
    }

    fn evaluate(
        &self,
        ctx: &StageContext<'_>,
        entropy: &dyn EntropySource,
    ) -> Result<StageOutcome, DomainError> {
        let synced = ctx.scores.average();
        let noise = entropy.uniform(NOISE_LOW, NOISE_HIGH);
        let trueness = (synced + noise * Self::NOISE_DAMPING).clamp(0.0, 1.0);

        let verdict = if trueness >= Self::CONSENSUS_FLOOR {
            Verdict::consensus(trueness)
        } else {
            Verdict::escalate(trueness)
        };
        Ok(StageOutcome::of(verdict))
    }
}

/// Forces consensus when the score average drops below the risk floor
///
/// A sufficiently low average is treated as a containment event: trueness is
/// forced to 1.0 and the escalation ends. Otherwise the unclamped average
/// passes through with a "Monitor" label.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskClamp;

impl RiskClamp {
    const RISK_FLOOR: f64 = 0.3;
}

impl Stage for RiskClamp {
    fn name(&self) -> &'static str {
        "risk clamp"
    }

    fn evaluate(
        &self,
        ctx: &StageContext<'_>,
        _entropy: &dyn EntropySource,
    ) -> Result<StageOutcome, DomainError> {
        let risk = ctx.scores.average();
        let verdict = if risk < Self::RISK_FLOOR {
            Verdict::consensus(1.0).with_disposition(Disposition::ContainmentEnforced)
        } else {
            Verdict::escalate(risk).with_disposition(Disposition::Monitor)
        };
        Ok(StageOutcome::of(verdict))
    }
}

/// Halts the escalation once the depth counter has gone deep enough
///
/// Ignores the scores entirely: past a fixed depth the escalation is ended
/// unconditionally with trueness 1.0. Under the standard ladder this stage
/// runs at depth 10 and therefore always halts when reached.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecursionBreaker;

impl RecursionBreaker {
    const DEPTH_LIMIT: usize = 4;
    const HOLDING_TRUENESS: f64 = 0.5;
}

impl Stage for RecursionBreaker {
    fn name(&self) -> &'static str {
        "recursion breaker"
    }

    fn evaluate(
        &self,
        ctx: &StageContext<'_>,
        _entropy: &dyn EntropySource,
    ) -> Result<StageOutcome, DomainError> {
        let verdict = if ctx.depth > Self::DEPTH_LIMIT {
            Verdict::consensus(1.0).with_disposition(Disposition::RecursionHalted)
        } else {
            Verdict::escalate(Self::HOLDING_TRUENESS).with_disposition(Disposition::DepthMonitor)
        };
        Ok(StageOutcome::of(verdict))
    }
}

/// Collapses a near-zero score average into full consensus
#[derive(Debug, Clone, Copy, Default)]
pub struct ParadoxConvergence;

impl ParadoxConvergence {
    const CONVERGENCE_FLOOR: f64 = 0.2;
    const PERSIST_TRUENESS: f64 = 0.3;
}

impl Stage for ParadoxConvergence {
    fn name(&self) -> &'static str {
        "paradox convergence"
    }

    fn evaluate(
        &self,
        ctx: &StageContext<'_>,
        _entropy: &dyn EntropySource,
    ) -> Result<StageOutcome, DomainError> {
        let verdict = if ctx.scores.average() < Self::CONVERGENCE_FLOOR {
            Verdict::consensus(1.0).with_disposition(Disposition::OmegaPointAchieved)
        } else {
            Verdict::escalate(Self::PERSIST_TRUENESS)
                .with_disposition(Disposition::ParadoxPersists)
        };
        Ok(StageOutcome::of(verdict))
    }
}

/// Final rung: rebirth when the scores have all but vanished
#[derive(Debug, Clone, Copy, Default)]
pub struct PrimordialRebirth;

impl PrimordialRebirth {
    const REBIRTH_FLOOR: f64 = 0.1;
    const WATCH_TRUENESS: f64 = 0.1;
}

impl Stage for PrimordialRebirth {
    fn name(&self) -> &'static str {
        "primordial rebirth"
    }

    fn evaluate(
        &self,
        ctx: &StageContext<'_>,
        _entropy: &dyn EntropySource,
    ) -> Result<StageOutcome, DomainError> {
        let verdict = if ctx.scores.average() < Self::REBIRTH_FLOOR {
            Verdict::consensus(1.0).with_disposition(Disposition::RebirthComplete)
        } else {
            Verdict::escalate(Self::WATCH_TRUENESS).with_disposition(Disposition::VoidWatch)
        };
        Ok(StageOutcome::of(verdict))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::query::Query;
    use crate::entropy::ConstantEntropy;
    use crate::sentinel::score::ScoreVector;

    fn scores(values: &[f64]) -> ScoreVector {
        ScoreVector::try_new(values.to_vec()).unwrap()
    }

    fn ctx<'a>(query: &'a Query, scores: &'a ScoreVector, trueness: f64, depth: usize) -> StageContext<'a> {
        StageContext {
            query,
            scores,
            trueness,
            depth,
        }
    }

    #[test]
    fn test_adapt_decays_toward_floor() {
        assert!((ThresholdAdaptation::adapt(0.9) - 0.81).abs() < 1e-12);
        assert!((ThresholdAdaptation::adapt(0.4) - 0.5).abs() < 1e-12);
        assert!((ThresholdAdaptation::adapt(0.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_adaptation_replaces_scores_and_modes() {
        let query = Query::new("test");
        let current = scores(&[0.4, 0.4, 0.4]);
        let outcome = ThresholdAdaptation
            .evaluate(&ctx(&query, &current, 0.4, 6), &ConstantEntropy::new(0.0))
            .unwrap();
        assert!(outcome.scores.is_some());
        assert!(outcome.modes.is_some());
        // Re-drawn average 0.4 still misses the adapted threshold of 0.5
        assert!(!outcome.verdict.consensus);
        assert!((outcome.verdict.trueness - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_adaptation_can_accept_a_near_miss() {
        // Unit sample 0.4 draws 0.62; the adapted threshold is
        // max(0.5, 0.62 * 0.9) = 0.558, so the re-draw passes
        let query = Query::new("test");
        let current = scores(&[0.62, 0.62, 0.62]);
        let outcome = ThresholdAdaptation
            .evaluate(&ctx(&query, &current, 0.62, 6), &ConstantEntropy::new(0.4))
            .unwrap();
        assert!(outcome.verdict.consensus);
        assert!((outcome.verdict.trueness - 0.62).abs() < 1e-9);
    }

    #[test]
    fn test_perturbation_vote_consensus() {
        let query = Query::new("test");
        let current = scores(&[0.5, 0.6, 0.7]);
        // Unit sample 1.0 adds +0.1 to every vote: average 0.7 >= 0.65
        let outcome = PerturbationVote
            .evaluate(&ctx(&query, &current, 0.6, 7), &ConstantEntropy::new(1.0))
            .unwrap();
        assert!(outcome.verdict.consensus);
        assert!((outcome.verdict.trueness - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_perturbation_vote_escalates_and_keeps_scores() {
        let query = Query::new("test");
        let current = scores(&[0.5, 0.6, 0.7]);
        // Unit sample 0.0 subtracts 0.1 from every vote: average 0.5 < 0.65
        let outcome = PerturbationVote
            .evaluate(&ctx(&query, &current, 0.6, 7), &ConstantEntropy::new(0.0))
            .unwrap();
        assert!(!outcome.verdict.consensus);
        assert!((outcome.verdict.trueness - 0.5).abs() < 1e-9);
        assert!(outcome.scores.is_none());
    }

    #[test]
    fn test_synchronization_consensus() {
        let query = Query::new("test");
        let current = scores(&[0.7, 0.7, 0.7]);
        // Noise +0.1 damped to +0.09: 0.79 >= 0.75
        let outcome = NoisySynchronization
            .evaluate(&ctx(&query, &current, 0.7, 8), &ConstantEntropy::new(1.0))
            .unwrap();
        assert!(outcome.verdict.consensus);
        assert!((outcome.verdict.trueness - 0.79).abs() < 1e-9);
    }

    #[test]
    fn test_synchronization_clamps_high() {
        let query = Query::new("test");
        let current = scores(&[0.95, 0.95, 0.95]);
        let outcome = NoisySynchronization
            .evaluate(&ctx(&query, &current, 0.95, 8), &ConstantEntropy::new(1.0))
            .unwrap();
        assert_eq!(outcome.verdict.trueness, 1.0);
        assert!(outcome.verdict.consensus);
    }

    #[test]
    fn test_synchronization_clamps_low() {
        let query = Query::new("test");
        let current = scores(&[0.05, 0.05, 0.05]);
        // 0.05 - 0.09 would go negative; clamped to 0.0
        let outcome = NoisySynchronization
            .evaluate(&ctx(&query, &current, 0.05, 8), &ConstantEntropy::new(0.0))
            .unwrap();
        assert_eq!(outcome.verdict.trueness, 0.0);
        assert!(!outcome.verdict.consensus);
    }

    #[test]
    fn test_risk_clamp_contains_low_scores() {
        let query = Query::new("test");
        let current = scores(&[0.2, 0.2, 0.2]);
        let outcome = RiskClamp
            .evaluate(&ctx(&query, &current, 0.2, 9), &ConstantEntropy::new(0.5))
            .unwrap();
        assert!(outcome.verdict.consensus);
        assert_eq!(outcome.verdict.trueness, 1.0);
        assert_eq!(
            outcome.verdict.disposition,
            Some(Disposition::ContainmentEnforced)
        );
    }

    #[test]
    fn test_risk_clamp_monitors_unclamped() {
        let query = Query::new("test");
        // Above the floor the average passes through without range enforcement
        let current = scores(&[1.2, 1.2, 1.2]);
        let outcome = RiskClamp
            .evaluate(&ctx(&query, &current, 1.2, 9), &ConstantEntropy::new(0.5))
            .unwrap();
        assert!(!outcome.verdict.consensus);
        assert!((outcome.verdict.trueness - 1.2).abs() < 1e-9);
        assert_eq!(outcome.verdict.disposition, Some(Disposition::Monitor));
    }

    #[test]
    fn test_recursion_breaker_halts_past_limit() {
        let query = Query::new("test");
        let current = scores(&[0.4, 0.4, 0.4]);
        let outcome = RecursionBreaker
            .evaluate(&ctx(&query, &current, 0.4, 10), &ConstantEntropy::new(0.5))
            .unwrap();
        assert!(outcome.verdict.consensus);
        assert_eq!(outcome.verdict.trueness, 1.0);
        assert_eq!(
            outcome.verdict.disposition,
            Some(Disposition::RecursionHalted)
        );
    }

    #[test]
    fn test_recursion_breaker_monitors_shallow_depth() {
        let query = Query::new("test");
        let current = scores(&[0.4, 0.4, 0.4]);
        let outcome = RecursionBreaker
            .evaluate(&ctx(&query, &current, 0.4, 4), &ConstantEntropy::new(0.5))
            .unwrap();
        assert!(!outcome.verdict.consensus);
        assert_eq!(outcome.verdict.trueness, 0.5);
        assert_eq!(outcome.verdict.disposition, Some(Disposition::DepthMonitor));
    }

    #[test]
    fn test_paradox_convergence_omega_point() {
        let query = Query::new("test");
        let current = scores(&[0.1, 0.1, 0.1]);
        let outcome = ParadoxConvergence
            .evaluate(&ctx(&query, &current, 0.1, 11), &ConstantEntropy::new(0.5))
            .unwrap();
        assert!(outcome.verdict.consensus);
        assert_eq!(
            outcome.verdict.disposition,
            Some(Disposition::OmegaPointAchieved)
        );
    }

    #[test]
    fn test_paradox_persists() {
        let query = Query::new("test");
        let current = scores(&[0.4, 0.4, 0.4]);
        let outcome = ParadoxConvergence
            .evaluate(&ctx(&query, &current, 0.4, 11), &ConstantEntropy::new(0.5))
            .unwrap();
        assert!(!outcome.verdict.consensus);
        assert!((outcome.verdict.trueness - 0.3).abs() < 1e-12);
        assert_eq!(
            outcome.verdict.disposition,
            Some(Disposition::ParadoxPersists)
        );
    }

    #[test]
    fn test_rebirth_below_floor() {
        let query = Query::new("test");
        let current = scores(&[0.05, 0.05, 0.05]);
        let outcome = PrimordialRebirth
            .evaluate(&ctx(&query, &current, 0.05, 12), &ConstantEntropy::new(0.5))
            .unwrap();
        assert!(outcome.verdict.consensus);
        assert_eq!(outcome.verdict.trueness, 1.0);
        assert_eq!(
            outcome.verdict.disposition,
            Some(Disposition::RebirthComplete)
        );
    }

    #[test]
    fn test_rebirth_void_watch() {
        let query = Query::new("test");
        let current = scores(&[0.4, 0.4, 0.4]);
        let outcome = PrimordialRebirth
            .evaluate(&ctx(&query, &current, 0.4, 12), &ConstantEntropy::new(0.5))
            .unwrap();
        assert!(!outcome.verdict.consensus);
        assert!((outcome.verdict.trueness - 0.1).abs() < 1e-12);
        assert_eq!(outcome.verdict.disposition, Some(Disposition::VoidWatch));
    }
}
