//! The ordered ladder of escalation stages
//!
//! Replaces depth-keyed dispatch with an explicit position-indexed handler
//! list: the maximum reachable depth is self-evident from the ladder length
//! rather than hidden in a constant.

use super::INITIAL_DEPTH;
use crate::sentinel::stage::Stage;
use crate::sentinel::stages::{
    NoisySynchronization, ParadoxConvergence, PerturbationVote, PrimordialRebirth,
    RecursionBreaker, RiskClamp, ThresholdAdaptation,
};

/// Ordered list of stages a query escalates through after mediation
///
/// The stage at position `p` runs at depth `INITIAL_DEPTH + 1 + p`; the
/// ladder's ceiling is the deepest depth any stage can run at.
///
/// # Example
///
/// ```
/// use qsa_domain::EscalationLadder;
///
/// let ladder = EscalationLadder::standard();
/// assert_eq!(ladder.len(), 7);
/// assert_eq!(ladder.ceiling(), 12);
/// ```
pub struct EscalationLadder {
    stages: Vec<Box<dyn Stage>>,
}

impl EscalationLadder {
    /// Build a ladder from an explicit stage list
    pub fn new(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    /// The standard seven-stage ladder
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(ThresholdAdaptation),
            Box::new(PerturbationVote),
            Box::new(NoisySynchronization),
            Box::new(RiskClamp),
            Box::new(RecursionBreaker),
            Box::new(ParadoxConvergence),
            Box::new(PrimordialRebirth),
        ])
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Deepest depth any stage of this ladder can run at
    pub fn ceiling(&self) -> usize {
        INITIAL_DEPTH + self.stages.len()
    }

    /// The stage bound to a depth counter value, if any
    pub fn stage_for_depth(&self, depth: usize) -> Option<&dyn Stage> {
        depth
            .checked_sub(INITIAL_DEPTH + 1)
            .and_then(|position| self.stages.get(position))
            .map(Box::as_ref)
    }

    /// Stage names in ladder order
    pub fn names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }
}

impl Default for EscalationLadder {
    fn default() -> Self {
        Self::standard()
    }
}
