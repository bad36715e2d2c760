//! Stage verdicts

use super::disposition::Disposition;
use serde::{Deserialize, Serialize};

/// The decision a stage hands back to the escalation loop
///
/// # Example
///
/// ```
/// use qsa_domain::sentinel::{Disposition, Verdict};
///
/// let verdict = Verdict::consensus(1.0).with_disposition(Disposition::RecursionHalted);
/// assert!(verdict.consensus);
///
/// let pending = Verdict::escalate(0.4);
/// assert!(!pending.consensus);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// The stage's confidence average
    pub trueness: f64,
    /// Whether the score was accepted, ending the escalation
    pub consensus: bool,
    /// Optional descriptive label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disposition: Option<Disposition>,
}

impl Verdict {
    /// Create a consensus verdict: the escalation stops here
    pub fn consensus(trueness: f64) -> Self {
        Self {
            trueness,
            consensus: true,
            disposition: None,
        }
    }

    /// Create a non-consensus verdict: the escalation continues
    pub fn escalate(trueness: f64) -> Self {
        Self {
            trueness,
            consensus: false,
            disposition: None,
        }
    }

    /// Attach a disposition label
    pub fn with_disposition(mut self, disposition: Disposition) -> Self {
        self.disposition = Some(disposition);
        self
    }
}
