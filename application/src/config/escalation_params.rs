//! Escalation parameters — use case loop control.
//!
//! [`EscalationParams`] groups the static parameters that control the
//! escalation loop in
//! [`RunEscalationUseCase`](crate::use_cases::run_escalation::RunEscalationUseCase).
//! These are application-layer concerns, not domain policy.

use qsa_domain::Mediator;
use serde::{Deserialize, Serialize};

/// Escalation loop control parameters.
///
/// The depth bound is validated against the ladder's ceiling when the use
/// case runs: a bound past the ladder would leave the loop with no stage to
/// dispatch, so it is rejected up front instead of spinning in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EscalationParams {
    /// Maximum value the depth counter may reach (inclusive bound).
    pub max_depth: usize,
    /// Acceptance threshold for the initial mediation pass.
    pub mediation_threshold: f64,
}

impl Default for EscalationParams {
    fn default() -> Self {
        Self {
            max_depth: 12,
            mediation_threshold: Mediator::DEFAULT_THRESHOLD,
        }
    }
}

impl EscalationParams {
    // ==================== Builder Methods ====================

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_mediation_threshold(mut self, threshold: f64) -> Self {
        self.mediation_threshold = threshold;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = EscalationParams::default();
        assert_eq!(params.max_depth, 12);
        assert_eq!(params.mediation_threshold, 0.75);
    }

    #[test]
    fn test_builder() {
        let params = EscalationParams::default()
            .with_max_depth(7)
            .with_mediation_threshold(0.5);

        assert_eq!(params.max_depth, 7);
        assert_eq!(params.mediation_threshold, 0.5);
    }
}
