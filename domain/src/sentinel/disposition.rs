//! Stage disposition labels

use serde::{Deserialize, Serialize};

/// Descriptive label some stages attach to their verdict
///
/// Dispositions are report-only: the escalation loop never branches on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Disposition {
    /// Risk clamp forced the score up
    ContainmentEnforced,
    /// Risk clamp saw nothing to contain
    Monitor,
    /// Recursion breaker halted the escalation
    RecursionHalted,
    /// Recursion breaker found the depth still acceptable
    DepthMonitor,
    /// Paradox convergence collapsed the scores
    OmegaPointAchieved,
    /// Paradox convergence left the scores standing
    ParadoxPersists,
    /// Primordial rebirth reset the pipeline
    RebirthComplete,
    /// Primordial rebirth kept watching
    VoidWatch,
}

impl Disposition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Disposition::ContainmentEnforced => "Containment enforced",
            Disposition::Monitor => "Monitor",
            Disposition::RecursionHalted => "Recursion halted",
            Disposition::DepthMonitor => "Depth monitor",
            Disposition::OmegaPointAchieved => "Omega-point achieved",
            Disposition::ParadoxPersists => "Paradox persists",
            Disposition::RebirthComplete => "Rebirth complete",
            Disposition::VoidWatch => "Void watch",
        }
    }
}

impl std::fmt::Display for Disposition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_labels() {
        assert_eq!(
            Disposition::ContainmentEnforced.to_string(),
            "Containment enforced"
        );
        assert_eq!(Disposition::RecursionHalted.to_string(), "Recursion halted");
        assert_eq!(
            Disposition::OmegaPointAchieved.to_string(),
            "Omega-point achieved"
        );
        assert_eq!(Disposition::VoidWatch.to_string(), "Void watch");
    }
}
